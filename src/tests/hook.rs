//! Tests for webhook management.

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::test_client;
use crate::types::Hook;

#[tokio::test]
async fn test_create_and_delete_hook() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bcy/test/hooks"))
        .and(body_partial_json(serde_json::json!({
            "event": "new-block",
            "url": "https://my.domain.com/callbacks/blocks"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "399d0923-e920-48ee-8928-2051cbfbc369",
            "event": "new-block",
            "url": "https://my.domain.com/callbacks/blocks",
            "token": "test-token"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/bcy/test/hooks/399d0923-e920-48ee-8928-2051cbfbc369"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let hook = client
        .create_hook(&Hook {
            event: "new-block".to_string(),
            url: "https://my.domain.com/callbacks/blocks".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(hook.id, "399d0923-e920-48ee-8928-2051cbfbc369");

    client.delete_hook(&hook.id).await.unwrap();
}

#[tokio::test]
async fn test_list_and_get_hooks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bcy/test/hooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "399d0923-e920-48ee-8928-2051cbfbc369",
                "event": "confirmed-tx",
                "address": "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
                "url": "https://my.domain.com/callbacks/txs"
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bcy/test/hooks/399d0923-e920-48ee-8928-2051cbfbc369"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "399d0923-e920-48ee-8928-2051cbfbc369",
            "event": "confirmed-tx",
            "address": "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
            "url": "https://my.domain.com/callbacks/txs",
            "callback_errors": 2
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());

    let hooks = client.list_hooks().await.unwrap();
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0].event, "confirmed-tx");

    let hook = client.get_hook(&hooks[0].id).await.unwrap();
    assert_eq!(hook.callback_errors, 2);
}
