use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{link, Links, Resource};

/// The organisation on whose behalf payments are collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creditor {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub logo_url: Option<String>,
    pub verification_status: Option<VerificationStatus>,
    #[serde(default)]
    pub links: Links,
}

impl Creditor {
    pub fn default_gbp_payout_account_id(&self) -> Option<&str> {
        link(&self.links, "default_gbp_payout_account")
    }

    pub fn default_eur_payout_account_id(&self) -> Option<&str> {
        link(&self.links, "default_eur_payout_account")
    }
}

impl Resource for Creditor {
    const ENVELOPE: &'static str = "creditors";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Successful,
    InReview,
    ActionRequired,
    #[serde(other)]
    Unknown,
}
