use argh::FromArgs;
use gc_client::Client;

use crate::{print_json, CliError};

/// Inspects creditors.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "creditor")]
pub struct CreditorCommand {
    #[argh(subcommand)]
    subcommand: CreditorSubCommand,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand)]
pub enum CreditorSubCommand {
    Get(GetCreditor),
}

impl CreditorCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        match &self.subcommand {
            CreditorSubCommand::Get(cmd) => cmd.run(client).await,
        }
    }
}

/// Show a creditor.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "get")]
pub struct GetCreditor {
    /// creditor ID (default: GOCARDLESS_CREDITOR_ID)
    #[argh(positional)]
    id: Option<String>,
}

impl GetCreditor {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let id = match self.id.as_deref().or(client.config().creditor_id()) {
            Some(id) => id.to_string(),
            None => {
                return Err(CliError::InvalidArgument {
                    name: "id",
                    reason: "no creditor ID given and GOCARDLESS_CREDITOR_ID is not set".into(),
                })
            }
        };
        let creditor = client.get_creditor(&id).await?;
        print_json(&creditor)
    }
}
