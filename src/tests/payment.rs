//! Tests for payment forwarding.

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::test_client;
use crate::types::PaymentFwd;

#[tokio::test]
async fn test_create_list_delete_payment_fwd() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bcy/test/payments"))
        .and(body_partial_json(serde_json::json!({
            "destination": "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "f35c80c2-3347-410d-b4ac-d049910289ec",
            "destination": "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
            "input_address": "C6LBLc3kg3HL1M8quVFEPoDFSMkgxNu7vo",
            "token": "test-token"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bcy/test/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "f35c80c2-3347-410d-b4ac-d049910289ec",
                "destination": "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
                "input_address": "C6LBLc3kg3HL1M8quVFEPoDFSMkgxNu7vo"
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/bcy/test/payments/f35c80c2-3347-410d-b4ac-d049910289ec"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());

    let pay = client
        .create_payment_fwd(&PaymentFwd {
            destination: "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(!pay.input_address.is_empty());

    let pays = client.list_payment_fwds().await.unwrap();
    assert_eq!(pays.len(), 1);
    assert_eq!(pays[0].id, pay.id);

    client.delete_payment_fwd(&pay.id).await.unwrap();
}
