use gc_client::model::{CreateCustomer, CreateCustomerBankAccount, Links, Metadata};
use serde_json::json;

use crate::{envelope, TestApi};

#[test_log::test(tokio::test)]
pub async fn create_customer() {
    let api = TestApi::start().await;
    api.expect(
        "POST",
        "/customers",
        envelope(
            201,
            "customers",
            json!({
                "id": "CU123",
                "created_at": "2014-05-08T17:01:06.000Z",
                "email": "user@example.com",
                "given_name": "Frank",
                "family_name": "Osborne",
                "country_code": "GB",
                "language": "en",
                "metadata": {"salesforce_id": "ABCD1234"}
            }),
        ),
    )
    .await;

    let request = CreateCustomer {
        email: Some("user@example.com".to_string()),
        given_name: Some("Frank".to_string()),
        family_name: Some("Osborne".to_string()),
        country_code: Some("GB".to_string()),
        metadata: Metadata::from([("salesforce_id".to_string(), "ABCD1234".to_string())]),
        ..CreateCustomer::default()
    };

    let customer = api.client().create_customer(&request).await.unwrap();

    assert_eq!(
        vec![r#"{"customers":{"email":"user@example.com","given_name":"Frank","family_name":"Osborne","country_code":"GB","metadata":{"salesforce_id":"ABCD1234"}}}"#.to_string()],
        api.received_bodies().await
    );
    assert_eq!("CU123", customer.id);
    assert_eq!(Some("en"), customer.language.as_deref());
    assert_eq!(None, customer.company_name);
}

#[test_log::test(tokio::test)]
pub async fn get_customer() {
    let api = TestApi::start().await;
    api.expect(
        "GET",
        "/customers/CU123",
        envelope(200, "customers", json!({"id": "CU123", "email": "user@example.com"})),
    )
    .await;

    let customer = api.client().get_customer("CU123").await.unwrap();

    assert_eq!(Some("user@example.com"), customer.email.as_deref());
    assert!(customer.metadata.is_empty());
}

#[test_log::test(tokio::test)]
pub async fn create_customer_bank_account() {
    let api = TestApi::start().await;
    api.expect(
        "POST",
        "/customer_bank_accounts",
        envelope(
            201,
            "customer_bank_accounts",
            json!({
                "id": "BA456",
                "created_at": "2014-05-08T17:01:06.000Z",
                "account_holder_name": "Frank Osborne",
                "account_number_ending": "11",
                "country_code": "GB",
                "currency": "GBP",
                "bank_name": "BARCLAYS BANK PLC",
                "enabled": true,
                "links": {"customer": "CU123"}
            }),
        ),
    )
    .await;

    let request = CreateCustomerBankAccount {
        account_holder_name: Some("Frank Osborne".to_string()),
        account_number: Some("55779911".to_string()),
        sort_code: Some("200000".to_string()),
        country_code: Some("GB".to_string()),
        links: Links::from([("customer".to_string(), "CU123".to_string())]),
        ..CreateCustomerBankAccount::default()
    };

    let account = api
        .client()
        .create_customer_bank_account(&request)
        .await
        .unwrap();

    assert_eq!(
        vec![r#"{"customer_bank_accounts":{"account_holder_name":"Frank Osborne","account_number":"55779911","sort_code":"200000","country_code":"GB","links":{"customer":"CU123"}}}"#.to_string()],
        api.received_bodies().await
    );
    assert_eq!("BA456", account.id);
    assert_eq!(Some("CU123"), account.customer_id());
}

#[test_log::test(tokio::test)]
pub async fn get_and_disable_customer_bank_account() {
    let api = TestApi::start().await;
    api.expect(
        "GET",
        "/customer_bank_accounts/BA456",
        envelope(200, "customer_bank_accounts", json!({"id": "BA456", "enabled": true})),
    )
    .await;
    api.expect(
        "POST",
        "/customer_bank_accounts/BA456/actions/disable",
        envelope(200, "customer_bank_accounts", json!({"id": "BA456", "enabled": false})),
    )
    .await;

    let account = api.client().get_customer_bank_account("BA456").await.unwrap();
    assert_eq!(Some(true), account.enabled);

    let account = api
        .client()
        .disable_customer_bank_account("BA456")
        .await
        .unwrap();
    assert_eq!(Some(false), account.enabled);
}
