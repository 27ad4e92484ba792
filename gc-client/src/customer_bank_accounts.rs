use gc_core::mask;
use gc_core::model::{CreateCustomerBankAccount, CustomerBankAccount};
use tracing::Level;

use crate::{Client, Result};

impl Client {
    pub async fn create_customer_bank_account(
        &self,
        account: &CreateCustomerBankAccount,
    ) -> Result<CustomerBankAccount> {
        if tracing::event_enabled!(Level::DEBUG) {
            let number = account
                .account_number
                .as_deref()
                .or(account.iban.as_deref())
                .map(mask::account_number)
                .unwrap_or_default();
            tracing::debug!(
                account_number = number.as_str(),
                customer = account.links.get("customer").map(String::as_str).unwrap_or(""),
                "creating customer bank account"
            );
        }

        self.create(account).await
    }

    pub async fn get_customer_bank_account(&self, id: &str) -> Result<CustomerBankAccount> {
        self.get(id).await
    }

    pub async fn disable_customer_bank_account(&self, id: &str) -> Result<CustomerBankAccount> {
        self.action(id, "disable").await
    }
}
