use argh::FromArgs;
use gc_client::model::{CreateMandate, Links};
use gc_client::Client;

use crate::{parse_metadata, print_json, CliError};

/// Manages Direct Debit mandates.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "mandate")]
pub struct MandateCommand {
    #[argh(subcommand)]
    subcommand: MandateSubCommand,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand)]
pub enum MandateSubCommand {
    Create(CreateMandateCommand),
    Get(GetMandate),
    Cancel(CancelMandate),
    Reinstate(ReinstateMandate),
}

impl MandateCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        match &self.subcommand {
            MandateSubCommand::Create(cmd) => cmd.run(client).await,
            MandateSubCommand::Get(cmd) => cmd.run(client).await,
            MandateSubCommand::Cancel(cmd) => cmd.run(client).await,
            MandateSubCommand::Reinstate(cmd) => cmd.run(client).await,
        }
    }
}

/// Create a mandate against a customer bank account.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "create")]
pub struct CreateMandateCommand {
    /// customer bank account ID
    #[argh(option)]
    customer_bank_account: String,
    /// creditor ID (default: GOCARDLESS_CREDITOR_ID)
    #[argh(option)]
    creditor: Option<String>,
    /// direct debit scheme, e.g. bacs or sepa_core
    #[argh(option)]
    scheme: Option<String>,
    /// mandate reference shown on the customer's bank statement
    #[argh(option)]
    reference: Option<String>,
    /// metadata as key=value, may be repeated
    #[argh(option)]
    metadata: Vec<String>,
}

impl CreateMandateCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let mut links = Links::from([(
            "customer_bank_account".to_string(),
            self.customer_bank_account.clone(),
        )]);
        if let Some(creditor) = &self.creditor {
            links.insert("creditor".to_string(), creditor.clone());
        }

        let request = CreateMandate {
            reference: self.reference.clone(),
            scheme: self.scheme.clone(),
            metadata: parse_metadata(&self.metadata)?,
            links,
        };

        let mandate = client.create_mandate(&request).await?;
        tracing::info!(id = mandate.id.as_str(), "mandate created");
        print_json(&mandate)
    }
}

/// Show a mandate.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "get")]
pub struct GetMandate {
    /// mandate ID
    #[argh(positional)]
    id: String,
}

impl GetMandate {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        print_json(&client.get_mandate(&self.id).await?)
    }
}

/// Cancel a mandate and its pending payments.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "cancel")]
pub struct CancelMandate {
    /// mandate ID
    #[argh(positional)]
    id: String,
}

impl CancelMandate {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let mandate = client.cancel_mandate(&self.id).await?;
        tracing::info!(id = mandate.id.as_str(), "mandate cancelled");
        print_json(&mandate)
    }
}

/// Reinstate a cancelled or expired mandate.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "reinstate")]
pub struct ReinstateMandate {
    /// mandate ID
    #[argh(positional)]
    id: String,
}

impl ReinstateMandate {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let mandate = client.reinstate_mandate(&self.id).await?;
        tracing::info!(id = mandate.id.as_str(), "mandate reinstated");
        print_json(&mandate)
    }
}
