use gc_core::model::{CreatePayment, Payment};

use crate::{Client, Result};

impl Client {
    pub async fn create_payment(&self, payment: &CreatePayment) -> Result<Payment> {
        tracing::debug!(
            amount = payment.amount,
            currency = payment.currency.as_str(),
            mandate = payment.links.get("mandate").map(String::as_str).unwrap_or(""),
            "creating payment"
        );

        self.create(payment).await
    }

    pub async fn get_payment(&self, id: &str) -> Result<Payment> {
        self.get(id).await
    }

    /// Cancels a payment that has not yet been submitted to the banks.
    pub async fn cancel_payment(&self, id: &str) -> Result<Payment> {
        self.action(id, "cancel").await
    }

    /// Retries a failed payment.
    pub async fn retry_payment(&self, id: &str) -> Result<Payment> {
        self.action(id, "retry").await
    }
}
