use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{link, CreateRequest, Links, Metadata, Resource};

/// Request to add a bank account a customer's mandates are taken against.
/// `links.customer` must reference an existing customer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCustomerBankAccount {
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

impl CreateRequest for CreateCustomerBankAccount {
    type Resource = CustomerBankAccount;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerBankAccount {
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

impl CustomerBankAccount {
    pub fn customer_id(&self) -> Option<&str> {
        link(&self.links, "customer")
    }
}

impl Resource for CustomerBankAccount {
    const ENVELOPE: &'static str = "customer_bank_accounts";

    fn id(&self) -> &str {
        &self.id
    }
}
