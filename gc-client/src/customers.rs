use gc_core::model::{CreateCustomer, Customer};

use crate::{Client, Result};

impl Client {
    pub async fn create_customer(&self, customer: &CreateCustomer) -> Result<Customer> {
        self.create(customer).await
    }

    pub async fn get_customer(&self, id: &str) -> Result<Customer> {
        self.get(id).await
    }
}
