use argh::FromArgs;
use gc_client::model::Metadata;
use gc_client::{Client, ClientError};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

mod creditor;
mod creditor_bank_account;
mod customer;
mod customer_bank_account;
mod mandate;
mod payment;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Client(#[from] ClientError),
    #[error("JSON serialization error: {0}")]
    JSONSerializationError(#[from] serde_json::Error),
    #[error("invalid value for --{name}: {reason}")]
    #[diagnostic(code(gccli::bad_argument))]
    InvalidArgument { name: &'static str, reason: String },
}

/// Command-line interface for GoCardless creditor, mandate and payment operations.
///
/// Connection settings come from GOCARDLESS_TOKEN, GOCARDLESS_BASE_URL,
/// GOCARDLESS_VERSION and GOCARDLESS_CREDITOR_ID, or a .env file.
#[derive(FromArgs, PartialEq, Eq, Debug)]
pub struct Arguments {
    /// use JSON for log messages
    #[argh(switch)]
    json: bool,
    #[argh(subcommand)]
    command: RootCommand,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand)]
pub enum RootCommand {
    Creditor(creditor::CreditorCommand),
    CreditorBankAccount(creditor_bank_account::CreditorBankAccountCommand),
    Customer(customer::CustomerCommand),
    CustomerBankAccount(customer_bank_account::CustomerBankAccountCommand),
    Mandate(mandate::MandateCommand),
    Payment(payment::PaymentCommand),
}

impl RootCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        match self {
            RootCommand::Creditor(cmd) => cmd.run(client).await,
            RootCommand::CreditorBankAccount(cmd) => cmd.run(client).await,
            RootCommand::Customer(cmd) => cmd.run(client).await,
            RootCommand::CustomerBankAccount(cmd) => cmd.run(client).await,
            RootCommand::Mandate(cmd) => cmd.run(client).await,
            RootCommand::Payment(cmd) => cmd.run(client).await,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_BACKTRACE").is_none() {
        std::env::set_var("RUST_BACKTRACE", "1")
    }

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "gccli=info,gc_client=info")
    }

    let args: Arguments = argh::from_env();

    if args.json {
        tracing_subscriber::fmt::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let client = match Client::from_env() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to configure GoCardless client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = args.command.run(&client).await {
        tracing::error!("command failed: {}", e);
        std::process::exit(1);
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parses repeated `--metadata key=value` arguments.
pub(crate) fn parse_metadata(values: &[String]) -> Result<Metadata, CliError> {
    values
        .iter()
        .map(|value| match value.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(CliError::InvalidArgument {
                name: "metadata",
                reason: format!("expected key=value, got '{}'", value),
            }),
        })
        .collect()
}
