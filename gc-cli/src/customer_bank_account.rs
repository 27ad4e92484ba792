use argh::FromArgs;
use gc_client::model::{CreateCustomerBankAccount, Links};
use gc_client::Client;

use crate::{parse_metadata, print_json, CliError};

/// Manages customer bank accounts.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "customer-bank-account")]
pub struct CustomerBankAccountCommand {
    #[argh(subcommand)]
    subcommand: CustomerBankAccountSubCommand,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand)]
pub enum CustomerBankAccountSubCommand {
    Create(CreateCustomerBankAccountCommand),
    Get(GetCustomerBankAccount),
    Disable(DisableCustomerBankAccount),
}

impl CustomerBankAccountCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        match &self.subcommand {
            CustomerBankAccountSubCommand::Create(cmd) => cmd.run(client).await,
            CustomerBankAccountSubCommand::Get(cmd) => cmd.run(client).await,
            CustomerBankAccountSubCommand::Disable(cmd) => cmd.run(client).await,
        }
    }
}

/// Add a bank account for a customer.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "create")]
pub struct CreateCustomerBankAccountCommand {
    /// customer ID the account belongs to
    #[argh(option)]
    customer: String,
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
    /// metadata as key=value, may be repeated
    #[argh(option)]
    metadata: Vec<String>,
}

impl CreateCustomerBankAccountCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let request = CreateCustomerBankAccount {
            account_holder_name: Some(self.account_holder_name.clone()),
            account_number: self.account_number.clone(),
            sort_code: self.sort_code.clone(),
            bank_code: self.bank_code.clone(),
            branch_code: self.branch_code.clone(),
            iban: self.iban.clone(),
            country_code: self.country_code.clone(),
            currency: self.currency.clone(),
            metadata: parse_metadata(&self.metadata)?,
            links: Links::from([("customer".to_string(), self.customer.clone())]),
        };

        let account = client.create_customer_bank_account(&request).await?;
        tracing::info!(id = account.id.as_str(), "customer bank account created");
        print_json(&account)
    }
}

/// Show a customer bank account.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "get")]
pub struct GetCustomerBankAccount {
    /// customer bank account ID
    #[argh(positional)]
    id: String,
}

impl GetCustomerBankAccount {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        print_json(&client.get_customer_bank_account(&self.id).await?)
    }
}

/// Disable a customer bank account, cancelling its mandates.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "disable")]
pub struct DisableCustomerBankAccount {
    /// customer bank account ID
    #[argh(positional)]
    id: String,
}

impl DisableCustomerBankAccount {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let account = client.disable_customer_bank_account(&self.id).await?;
        tracing::info!(id = account.id.as_str(), "customer bank account disabled");
        print_json(&account)
    }
}
