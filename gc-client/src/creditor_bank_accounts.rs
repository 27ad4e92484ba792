use std::borrow::Cow;

use gc_core::mask;
use gc_core::model::{CreateCreditorBankAccount, CreditorBankAccount};
use tracing::Level;

use crate::{Client, Result};

impl Client {
    /// Adds a bank account payouts can be sent to. `links.creditor` falls
    /// back to the configured creditor ID when unset.
    pub async fn create_creditor_bank_account(
        &self,
        account: &CreateCreditorBankAccount,
    ) -> Result<CreditorBankAccount> {
        let account = match self.links_with_default_creditor(&account.links) {
            Some(links) => Cow::Owned(CreateCreditorBankAccount {
                links,
                ..account.clone()
            }),
            None => Cow::Borrowed(account),
        };

        if tracing::event_enabled!(Level::DEBUG) {
            let number = account
                .account_number
                .as_deref()
                .or(account.iban.as_deref())
                .map(mask::account_number)
                .unwrap_or_default();
            tracing::debug!(
                account_number = number.as_str(),
                country_code = account.country_code.as_deref().unwrap_or(""),
                "creating creditor bank account"
            );
        }

        self.create(&*account).await
    }

    pub async fn get_creditor_bank_account(&self, id: &str) -> Result<CreditorBankAccount> {
        self.get(id).await
    }

    /// Disables the account so no further payouts are sent to it. This
    /// cannot be undone.
    pub async fn disable_creditor_bank_account(&self, id: &str) -> Result<CreditorBankAccount> {
        self.action(id, "disable").await
    }
}
