use gc_client::model::VerificationStatus;
use serde_json::json;

use crate::{envelope, TestApi};

#[test_log::test(tokio::test)]
pub async fn get_creditor() {
    let api = TestApi::start().await;
    api.expect(
        "GET",
        "/creditors/CR123",
        envelope(
            200,
            "creditors",
            json!({
                "id": "CR123",
                "created_at": "2014-05-08T17:01:06.000Z",
                "name": "Nude Wines",
                "address_line1": "338-346 Goswell Road",
                "city": "London",
                "postal_code": "EC1V 7LQ",
                "country_code": "GB",
                "verification_status": "successful",
                "links": {
                    "default_gbp_payout_account": "BA123"
                }
            }),
        ),
    )
    .await;

    let creditor = api.client().get_creditor("CR123").await.unwrap();

    assert_eq!("CR123", creditor.id);
    assert_eq!(Some("Nude Wines"), creditor.name.as_deref());
    assert_eq!(None, creditor.region);
    assert_eq!(
        Some(VerificationStatus::Successful),
        creditor.verification_status
    );
    assert_eq!(Some("BA123"), creditor.default_gbp_payout_account_id());
    assert_eq!(None, creditor.default_eur_payout_account_id());
}
