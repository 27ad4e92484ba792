use gc_client::model::{CreateMandate, Links, MandateStatus};
use serde_json::json;

use crate::{envelope, TestApi, CREDITOR_ID};

fn mandate(status: &str) -> serde_json::Value {
    json!({
        "id": "MD123",
        "created_at": "2014-05-08T17:01:06.000Z",
        "reference": "REF-123",
        "status": status,
        "scheme": "bacs",
        "next_possible_charge_date": "2014-11-10",
        "links": {
            "customer_bank_account": "BA456",
            "creditor": CREDITOR_ID
        }
    })
}

#[test_log::test(tokio::test)]
pub async fn create_mandate_links_configured_creditor() {
    let api = TestApi::start().await;
    api.expect(
        "POST",
        "/mandates",
        envelope(201, "mandates", mandate("pending_submission")),
    )
    .await;

    let request = CreateMandate {
        scheme: Some("bacs".to_string()),
        links: Links::from([("customer_bank_account".to_string(), "BA456".to_string())]),
        ..CreateMandate::default()
    };

    let mandate = api.client().create_mandate(&request).await.unwrap();

    assert_eq!(
        vec![format!(
            r#"{{"mandates":{{"scheme":"bacs","links":{{"creditor":"{}","customer_bank_account":"BA456"}}}}}}"#,
            CREDITOR_ID
        )],
        api.received_bodies().await
    );
    assert_eq!("MD123", mandate.id);
    assert_eq!(Some(MandateStatus::PendingSubmission), mandate.status);
    assert_eq!(Some("BA456"), mandate.customer_bank_account_id());
}

#[test_log::test(tokio::test)]
pub async fn mandate_lifecycle_actions() {
    let api = TestApi::start().await;
    api.expect("GET", "/mandates/MD123", envelope(200, "mandates", mandate("active")))
        .await;
    api.expect(
        "POST",
        "/mandates/MD123/actions/cancel",
        envelope(200, "mandates", mandate("cancelled")),
    )
    .await;
    api.expect(
        "POST",
        "/mandates/MD123/actions/reinstate",
        envelope(200, "mandates", mandate("pending_submission")),
    )
    .await;

    let client = api.client();
    assert_eq!(
        Some(MandateStatus::Active),
        client.get_mandate("MD123").await.unwrap().status
    );
    assert_eq!(
        Some(MandateStatus::Cancelled),
        client.cancel_mandate("MD123").await.unwrap().status
    );
    assert_eq!(
        Some(MandateStatus::PendingSubmission),
        client.reinstate_mandate("MD123").await.unwrap().status
    );
}
