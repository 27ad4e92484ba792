use argh::FromArgs;
use chrono::NaiveDate;
use gc_client::model::{CreatePayment, Links};
use gc_client::Client;

use crate::{parse_metadata, print_json, CliError};

/// Manages payments collected against mandates.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "payment")]
pub struct PaymentCommand {
    #[argh(subcommand)]
    subcommand: PaymentSubCommand,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand)]
pub enum PaymentSubCommand {
    Create(CreatePaymentCommand),
    Get(GetPayment),
    Cancel(CancelPayment),
    Retry(RetryPayment),
}

impl PaymentCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        match &self.subcommand {
            PaymentSubCommand::Create(cmd) => cmd.run(client).await,
            PaymentSubCommand::Get(cmd) => cmd.run(client).await,
            PaymentSubCommand::Cancel(cmd) => cmd.run(client).await,
            PaymentSubCommand::Retry(cmd) => cmd.run(client).await,
        }
    }
}

/// Collect a payment against a mandate.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "create")]
pub struct CreatePaymentCommand {
    /// mandate ID to collect against
    #[argh(option)]
    mandate: String,
    /// amount in minor units, e.g. pence
    #[argh(option)]
    amount: i64,
    /// three-letter currency code, e.g. GBP
    #[argh(option)]
    currency: String,
    /// date to charge the customer on, as YYYY-MM-DD (default: earliest possible)
    #[argh(option)]
    charge_date: Option<NaiveDate>,
    /// description shown to the customer
    #[argh(option)]
    description: Option<String>,
    /// reference shown on the customer's bank statement
    #[argh(option)]
    reference: Option<String>,
    /// metadata as key=value, may be repeated
    #[argh(option)]
    metadata: Vec<String>,
}

impl CreatePaymentCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        if self.amount <= 0 {
            return Err(CliError::InvalidArgument {
                name: "amount",
                reason: format!("must be positive, got {}", self.amount),
            });
        }

        let request = CreatePayment {
            amount: self.amount,
            currency: self.currency.to_uppercase(),
            charge_date: self.charge_date,
            description: self.description.clone(),
            reference: self.reference.clone(),
            metadata: parse_metadata(&self.metadata)?,
            links: Links::from([("mandate".to_string(), self.mandate.clone())]),
        };

        let payment = client.create_payment(&request).await?;
        tracing::info!(id = payment.id.as_str(), "payment created");
        print_json(&payment)
    }
}

/// Show a payment.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "get")]
pub struct GetPayment {
    /// payment ID
    #[argh(positional)]
    id: String,
}

impl GetPayment {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        print_json(&client.get_payment(&self.id).await?)
    }
}

/// Cancel a payment that has not been submitted yet.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "cancel")]
pub struct CancelPayment {
    /// payment ID
    #[argh(positional)]
    id: String,
}

impl CancelPayment {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let payment = client.cancel_payment(&self.id).await?;
        tracing::info!(id = payment.id.as_str(), "payment cancelled");
        print_json(&payment)
    }
}

/// Retry a failed payment.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "retry")]
pub struct RetryPayment {
    /// payment ID
    #[argh(positional)]
    id: String,
}

impl RetryPayment {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let payment = client.retry_payment(&self.id).await?;
        tracing::info!(id = payment.id.as_str(), "payment retried");
        print_json(&payment)
    }
}
