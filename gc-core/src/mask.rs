/// Mask access token or webhook secret suitable for use in logs.
pub fn secret(value: &str) -> String {
    const DEFAULT_MASK: &str = "************";
    let prefix: String = value.chars().take(4).collect();
    if value.chars().count() < 8 {
        DEFAULT_MASK.to_string()
    } else {
        format!("{}{}", prefix, DEFAULT_MASK)
    }
}

/// Mask bank account number or IBAN suitable for use in logs, keeping the
/// same trailing digits GoCardless reports as `account_number_ending`.
pub fn account_number(number: &str) -> String {
    const DEFAULT_MASK: &str = "******";
    let digits = number.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
    if digits.len() < 6 {
        DEFAULT_MASK.to_string()
    } else {
        let ending: String = digits[digits.len() - 2..].iter().collect();
        format!("{}{}", DEFAULT_MASK, ending)
    }
}
