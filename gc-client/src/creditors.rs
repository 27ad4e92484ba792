use gc_core::model::Creditor;

use crate::{Client, Result};

impl Client {
    pub async fn get_creditor(&self, id: &str) -> Result<Creditor> {
        self.get(id).await
    }
}
