use gc_client::model::{CreateCreditorBankAccount, Links};
use serde_json::json;

use crate::{envelope, TestApi, CREDITOR_ID};

const NUDE_WINES_REQUEST: &str = r#"{"creditor_bank_accounts":{"set_as_default_payout_account":false,"account_holder_name":"Nude Wines","account_number":"55779911","sort_code":"200000","country_code":"GB","links":{"creditor":"CR123"}}}"#;

fn nude_wines() -> CreateCreditorBankAccount {
    CreateCreditorBankAccount {
        account_holder_name: Some("Nude Wines".to_string()),
        account_number: Some("55779911".to_string()),
        sort_code: Some("200000".to_string()),
        country_code: Some("GB".to_string()),
        links: Links::from([("creditor".to_string(), "CR123".to_string())]),
        ..CreateCreditorBankAccount::default()
    }
}

fn nude_wines_response() -> serde_json::Value {
    json!({
        "id": "BA123",
        "created_at": "2014-05-27T12:43:17.000Z",
        "account_holder_name": "Nude Wines",
        "account_number_ending": "11",
        "country_code": "GB",
        "currency": "GBP",
        "bank_name": "BARCLAYS BANK PLC",
        "enabled": true,
        "links": {
            "creditor": "CR123"
        }
    })
}

#[test_log::test(tokio::test)]
pub async fn create_creditor_bank_account() {
    let api = TestApi::start().await;
    api.expect(
        "POST",
        "/creditor_bank_accounts",
        envelope(201, "creditor_bank_accounts", nude_wines_response()),
    )
    .await;

    let account = api
        .client()
        .create_creditor_bank_account(&nude_wines())
        .await
        .expect("failed to create creditor bank account");

    assert_eq!(vec![NUDE_WINES_REQUEST.to_string()], api.received_bodies().await);

    assert_eq!("BA123", account.id);
    assert_eq!(Some("Nude Wines"), account.account_holder_name.as_deref());
    assert_eq!(Some("11"), account.account_number_ending.as_deref());
    assert_eq!(Some("GB"), account.country_code.as_deref());
    assert_eq!(Some("BARCLAYS BANK PLC"), account.bank_name.as_deref());
    assert_eq!(Some(true), account.enabled);
    assert_eq!(
        Links::from([("creditor".to_string(), "CR123".to_string())]),
        account.links
    );
}

#[test_log::test(tokio::test)]
pub async fn same_request_serializes_identically() {
    let api = TestApi::start().await;
    crate::given("POST", "/creditor_bank_accounts")
        .respond_with(envelope(201, "creditor_bank_accounts", nude_wines_response()))
        .expect(2)
        .mount(api.server())
        .await;

    let request = nude_wines();
    api.client()
        .create_creditor_bank_account(&request)
        .await
        .unwrap();
    api.client()
        .create_creditor_bank_account(&request)
        .await
        .unwrap();

    let bodies = api.received_bodies().await;
    assert_eq!(2, bodies.len());
    assert_eq!(bodies[0], bodies[1]);
}

#[test_log::test(tokio::test)]
pub async fn creditor_link_defaults_to_configured_creditor() {
    let api = TestApi::start().await;
    api.expect(
        "POST",
        "/creditor_bank_accounts",
        envelope(
            201,
            "creditor_bank_accounts",
            json!({"id": "BA124", "links": {"creditor": CREDITOR_ID}}),
        ),
    )
    .await;

    let request = CreateCreditorBankAccount {
        set_as_default_payout_account: true,
        account_holder_name: Some("Nude Wines".to_string()),
        iban: Some("GB60BARC20000055779911".to_string()),
        ..CreateCreditorBankAccount::default()
    };

    let account = api
        .client()
        .create_creditor_bank_account(&request)
        .await
        .unwrap();

    assert_eq!(
        vec![format!(
            r#"{{"creditor_bank_accounts":{{"set_as_default_payout_account":true,"account_holder_name":"Nude Wines","iban":"GB60BARC20000055779911","links":{{"creditor":"{}"}}}}}}"#,
            CREDITOR_ID
        )],
        api.received_bodies().await
    );
    assert_eq!(Some(CREDITOR_ID), account.creditor_id());
}

#[test_log::test(tokio::test)]
pub async fn no_creditor_link_without_configured_creditor() {
    let api = TestApi::start_without_creditor().await;
    api.expect(
        "POST",
        "/creditor_bank_accounts",
        envelope(201, "creditor_bank_accounts", json!({"id": "BA125"})),
    )
    .await;

    let request = CreateCreditorBankAccount {
        account_holder_name: Some("Nude Wines".to_string()),
        ..CreateCreditorBankAccount::default()
    };

    api.client()
        .create_creditor_bank_account(&request)
        .await
        .unwrap();

    assert_eq!(
        vec![
            r#"{"creditor_bank_accounts":{"set_as_default_payout_account":false,"account_holder_name":"Nude Wines"}}"#
                .to_string()
        ],
        api.received_bodies().await
    );
}

#[test_log::test(tokio::test)]
pub async fn missing_optional_fields_are_unset() {
    let api = TestApi::start().await;
    api.expect(
        "GET",
        "/creditor_bank_accounts/BA123",
        envelope(
            200,
            "creditor_bank_accounts",
            json!({
                "id": "BA123",
                "account_holder_name": "Nude Wines",
                "account_number_ending": "11",
                "enabled": true
            }),
        ),
    )
    .await;

    let account = api
        .client()
        .get_creditor_bank_account("BA123")
        .await
        .unwrap();

    assert_eq!("BA123", account.id);
    assert_eq!(None, account.currency);
    assert_eq!(None, account.created_at);
    assert_eq!(None, account.bank_name);
    assert!(account.links.is_empty());
    assert_eq!(vec![String::new()], api.received_bodies().await);
}

#[test_log::test(tokio::test)]
pub async fn disable_creditor_bank_account() {
    let api = TestApi::start().await;
    api.expect(
        "POST",
        "/creditor_bank_accounts/BA123/actions/disable",
        envelope(
            200,
            "creditor_bank_accounts",
            json!({"id": "BA123", "enabled": false, "links": {"creditor": "CR123"}}),
        ),
    )
    .await;

    let account = api
        .client()
        .disable_creditor_bank_account("BA123")
        .await
        .unwrap();

    assert_eq!(Some(false), account.enabled);
}
