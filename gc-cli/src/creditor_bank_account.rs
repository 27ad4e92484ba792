use argh::FromArgs;
use gc_client::model::{CreateCreditorBankAccount, Links};
use gc_client::Client;

use crate::{parse_metadata, print_json, CliError};

/// Manages the bank accounts payouts are sent to.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "creditor-bank-account")]
pub struct CreditorBankAccountCommand {
    #[argh(subcommand)]
    subcommand: CreditorBankAccountSubCommand,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand)]
pub enum CreditorBankAccountSubCommand {
    Create(CreateCreditorBankAccountCommand),
    Get(GetCreditorBankAccount),
    Disable(DisableCreditorBankAccount),
}

impl CreditorBankAccountCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        match &self.subcommand {
            CreditorBankAccountSubCommand::Create(cmd) => cmd.run(client).await,
            CreditorBankAccountSubCommand::Get(cmd) => cmd.run(client).await,
            CreditorBankAccountSubCommand::Disable(cmd) => cmd.run(client).await,
        }
    }
}

/// Add a creditor bank account.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "create")]
pub struct CreateCreditorBankAccountCommand {
    /// name of the account holder
    #[argh(option)]
    account_holder_name: String,
    /// local account number
    #[argh(option)]
    account_number: Option<String>,
    /// sort code, for GB accounts
    #[argh(option)]
    sort_code: Option<String>,
    /// bank code, for countries that use one
    #[argh(option)]
    bank_code: Option<String>,
    /// branch code, for countries that use one
    #[argh(option)]
    branch_code: Option<String>,
    /// international bank account number, instead of local details
    #[argh(option)]
    iban: Option<String>,
    /// two-letter country code, e.g. GB
    #[argh(option)]
    country_code: Option<String>,
    /// three-letter currency code, e.g. GBP
    #[argh(option)]
    currency: Option<String>,
    /// creditor ID (default: GOCARDLESS_CREDITOR_ID)
    #[argh(option)]
    creditor: Option<String>,
    /// make this the default payout account for its currency
    #[argh(switch)]
    set_as_default_payout_account: bool,
    /// metadata as key=value, may be repeated
    #[argh(option)]
    metadata: Vec<String>,
}

impl CreateCreditorBankAccountCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let mut links = Links::new();
        if let Some(creditor) = &self.creditor {
            links.insert("creditor".to_string(), creditor.clone());
        }

        let request = CreateCreditorBankAccount {
            set_as_default_payout_account: self.set_as_default_payout_account,
            account_holder_name: Some(self.account_holder_name.clone()),
            account_number: self.account_number.clone(),
            sort_code: self.sort_code.clone(),
            bank_code: self.bank_code.clone(),
            branch_code: self.branch_code.clone(),
            iban: self.iban.clone(),
            country_code: self.country_code.clone(),
            currency: self.currency.clone(),
            metadata: parse_metadata(&self.metadata)?,
            links,
        };

        let account = client.create_creditor_bank_account(&request).await?;
        tracing::info!(id = account.id.as_str(), "creditor bank account created");
        print_json(&account)
    }
}

/// Show a creditor bank account.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "get")]
pub struct GetCreditorBankAccount {
    /// creditor bank account ID
    #[argh(positional)]
    id: String,
}

impl GetCreditorBankAccount {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        print_json(&client.get_creditor_bank_account(&self.id).await?)
    }
}

/// Disable a creditor bank account. This cannot be undone.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "disable")]
pub struct DisableCreditorBankAccount {
    /// creditor bank account ID
    #[argh(positional)]
    id: String,
}

impl DisableCreditorBankAccount {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let account = client.disable_creditor_bank_account(&self.id).await?;
        tracing::info!(id = account.id.as_str(), "creditor bank account disabled");
        print_json(&account)
    }
}
