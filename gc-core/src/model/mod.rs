use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

mod creditor;
mod creditor_bank_account;
mod customer;
mod customer_bank_account;
mod mandate;
mod payment;

pub use creditor::{Creditor, VerificationStatus};
pub use creditor_bank_account::{CreateCreditorBankAccount, CreditorBankAccount};
pub use customer::{CreateCustomer, Customer};
pub use customer_bank_account::{CreateCustomerBankAccount, CustomerBankAccount};
pub use mandate::{CreateMandate, Mandate, MandateStatus};
pub use payment::{CreatePayment, Payment, PaymentStatus};

/// Relation name (e.g. `creditor`) to the ID of the related resource.
///
/// Ordered so that the same links always serialize identically.
pub type Links = BTreeMap<String, String>;

/// Free-form key/value pairs attached to a resource.
pub type Metadata = BTreeMap<String, String>;

/// A resource as returned by the API.
pub trait Resource: DeserializeOwned {
    /// Top-level JSON key wrapping the resource in request and response
    /// bodies. Also the collection path below the API base URL.
    const ENVELOPE: &'static str;

    fn id(&self) -> &str;
}

/// Body of a request that creates a resource of type `Resource`.
pub trait CreateRequest: Serialize {
    type Resource: Resource;
}

pub(crate) fn link<'a>(links: &'a Links, relation: &str) -> Option<&'a str> {
    links.get(relation).map(String::as_str)
}
