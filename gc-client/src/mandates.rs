use std::borrow::Cow;

use gc_core::model::{CreateMandate, Mandate};

use crate::{Client, Result};

impl Client {
    /// Creates a mandate against a customer bank account. `links.creditor`
    /// falls back to the configured creditor ID when unset.
    pub async fn create_mandate(&self, mandate: &CreateMandate) -> Result<Mandate> {
        let mandate = match self.links_with_default_creditor(&mandate.links) {
            Some(links) => Cow::Owned(CreateMandate {
                links,
                ..mandate.clone()
            }),
            None => Cow::Borrowed(mandate),
        };

        self.create(&*mandate).await
    }

    pub async fn get_mandate(&self, id: &str) -> Result<Mandate> {
        self.get(id).await
    }

    /// Cancels the mandate and any pending payments taken against it.
    pub async fn cancel_mandate(&self, id: &str) -> Result<Mandate> {
        self.action(id, "cancel").await
    }

    pub async fn reinstate_mandate(&self, id: &str) -> Result<Mandate> {
        self.action(id, "reinstate").await
    }
}
