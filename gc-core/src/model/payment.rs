use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{link, CreateRequest, Links, Metadata, Resource};

/// Request to collect `amount` (in minor units, e.g. pence) against the
/// mandate in `links.mandate`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePayment {
    pub amount: i64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

impl CreateRequest for CreatePayment {
    type Resource = Payment;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub charge_date: Option<NaiveDate>,
    pub amount: Option<i64>,
    pub amount_refunded: Option<i64>,
    pub description: Option<String>,
    pub currency: Option<String>,
    pub status: Option<PaymentStatus>,
    pub reference: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub links: Links,
}

impl Payment {
    pub fn mandate_id(&self) -> Option<&str> {
        link(&self.links, "mandate")
    }
}

impl Resource for Payment {
    const ENVELOPE: &'static str = "payments";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    PendingCustomerApproval,
    PendingSubmission,
    Submitted,
    Confirmed,
    PaidOut,
    Cancelled,
    CustomerApprovalDenied,
    Failed,
    ChargedBack,
    #[serde(other)]
    Unknown,
}
