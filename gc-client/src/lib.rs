mod client;
mod creditor_bank_accounts;
mod creditors;
mod customer_bank_accounts;
mod customers;
mod error;
mod mandates;
mod payments;

pub use client::Client;
pub use error::{ApiErrorDetails, ApiErrorType, ClientError, FieldError, Result};
pub use gc_core::{model, Config};
