use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{link, CreateRequest, Links, Metadata, Resource};

/// Request to add a bank account that payouts can be sent to.
///
/// Depending on the country, either `account_number` plus `sort_code`
/// (or `bank_code`/`branch_code`) or an `iban` identify the account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCreditorBankAccount {
    pub set_as_default_payout_account: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

impl CreateRequest for CreateCreditorBankAccount {
    type Resource = CreditorBankAccount;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditorBankAccount {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub account_holder_name: Option<String>,
    pub account_number_ending: Option<String>,
    pub country_code: Option<String>,
    pub currency: Option<String>,
    pub bank_name: Option<String>,
    pub enabled: Option<bool>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub links: Links,
}

impl CreditorBankAccount {
    pub fn creditor_id(&self) -> Option<&str> {
        link(&self.links, "creditor")
    }
}

impl Resource for CreditorBankAccount {
    const ENVELOPE: &'static str = "creditor_bank_accounts";

    fn id(&self) -> &str {
        &self.id
    }
}
