use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{link, CreateRequest, Links, Metadata, Resource};

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateMandate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

impl CreateRequest for CreateMandate {
    type Resource = Mandate;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mandate {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub reference: Option<String>,
    pub status: Option<MandateStatus>,
    pub scheme: Option<String>,
    pub next_possible_charge_date: Option<NaiveDate>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub links: Links,
}

impl Mandate {
    pub fn creditor_id(&self) -> Option<&str> {
        link(&self.links, "creditor")
    }

    pub fn customer_bank_account_id(&self) -> Option<&str> {
        link(&self.links, "customer_bank_account")
    }
}

impl Resource for Mandate {
    const ENVELOPE: &'static str = "mandates";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MandateStatus {
    PendingCustomerApproval,
    PendingSubmission,
    Submitted,
    Active,
    Failed,
    Cancelled,
    Expired,
    Consumed,
    Blocked,
    SuspendedByPayer,
    #[serde(other)]
    Unknown,
}
