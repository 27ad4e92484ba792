use argh::FromArgs;
use gc_client::model::CreateCustomer;
use gc_client::Client;

use crate::{parse_metadata, print_json, CliError};

/// Manages customers.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "customer")]
pub struct CustomerCommand {
    #[argh(subcommand)]
    subcommand: CustomerSubCommand,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand)]
pub enum CustomerSubCommand {
    Create(CreateCustomerCommand),
    Get(GetCustomer),
}

impl CustomerCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        match &self.subcommand {
            CustomerSubCommand::Create(cmd) => cmd.run(client).await,
            CustomerSubCommand::Get(cmd) => cmd.run(client).await,
        }
    }
}

/// Create a customer.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "create")]
pub struct CreateCustomerCommand {
    /// email address
    #[argh(option)]
    email: Option<String>,
    /// given name
    #[argh(option)]
    given_name: Option<String>,
    /// family name
    #[argh(option)]
    family_name: Option<String>,
    /// company name, instead of given and family name
    #[argh(option)]
    company_name: Option<String>,
    /// first line of the address
    #[argh(option)]
    address_line1: Option<String>,
    /// second line of the address
    #[argh(option)]
    address_line2: Option<String>,
    /// town or city
    #[argh(option)]
    city: Option<String>,
    /// postal code
    #[argh(option)]
    postal_code: Option<String>,
    /// two-letter country code, e.g. GB
    #[argh(option)]
    country_code: Option<String>,
    /// two-letter language code for notifications, e.g. en
    #[argh(option)]
    language: Option<String>,
    /// metadata as key=value, may be repeated
    #[argh(option)]
    metadata: Vec<String>,
}

impl CreateCustomerCommand {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        let request = CreateCustomer {
            email: self.email.clone(),
            given_name: self.given_name.clone(),
            family_name: self.family_name.clone(),
            company_name: self.company_name.clone(),
            address_line1: self.address_line1.clone(),
            address_line2: self.address_line2.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            country_code: self.country_code.clone(),
            language: self.language.clone(),
            metadata: parse_metadata(&self.metadata)?,
        };

        let customer = client.create_customer(&request).await?;
        tracing::info!(id = customer.id.as_str(), "customer created");
        print_json(&customer)
    }
}

/// Show a customer.
#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argh(subcommand, name = "get")]
pub struct GetCustomer {
    /// customer ID
    #[argh(positional)]
    id: String,
}

impl GetCustomer {
    pub async fn run(&self, client: &Client) -> Result<(), CliError> {
        print_json(&client.get_customer(&self.id).await?)
    }
}
