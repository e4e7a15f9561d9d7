//! Tests for address queries, keychain generation, and the faucet.

use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::test_client;
use crate::types::{AddrKeychain, BlockCypherConfig};
use crate::{AddrParams, BlockCypherClient, BlockCypherError};

#[tokio::test]
async fn test_get_addr_balance() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bcy/test/addrs/CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
            "total_received": 100000,
            "total_sent": 0,
            "balance": 100000,
            "unconfirmed_balance": 0,
            "final_balance": 100000,
            "n_tx": 1,
            "final_n_tx": 1
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let addr = client
        .get_addr_balance(
            "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
            &AddrParams::default(),
        )
        .await
        .unwrap();

    assert_eq!(addr.balance, 100000);
    assert_eq!(addr.n_tx, 1);
    assert!(addr.txrefs.is_empty());
}

#[tokio::test]
async fn test_get_addr_forwards_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bcy/test/addrs/CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd"))
        .and(query_param("unspentOnly", "true"))
        .and(query_param("limit", "5"))
        .and(query_param("before", "300000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
            "balance": 100000,
            "txrefs": [
                {"tx_hash": "aaaa", "block_height": 299000, "tx_output_n": 0, "value": 100000, "spent": false}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let addr = client
        .get_addr(
            "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
            &AddrParams {
                unspent_only: true,
                limit: Some(5),
                before: Some(300000),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(addr.txrefs.len(), 1);
    assert_eq!(addr.txrefs[0].tx_hash, "aaaa");
    assert!(!addr.txrefs[0].spent);
}

#[tokio::test]
async fn test_get_addr_full_carries_whole_txs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bcy/test/addrs/CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd/full"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
            "txs": [{
                "hash": "aaaa",
                "block_height": 299000,
                "total": 100000,
                "inputs": [{"prev_hash": "bbbb", "output_index": 0}],
                "outputs": [{"value": 100000, "addresses": ["CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd"]}]
            }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let addr = client
        .get_addr_full("CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd", &AddrParams::default())
        .await
        .unwrap();

    assert_eq!(addr.txs.len(), 1);
    assert_eq!(addr.txs[0].inputs.len(), 1);
    assert_eq!(addr.txs[0].outputs[0].value, 100000);
}

#[tokio::test]
async fn test_gen_addr_keychain() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bcy/test/addrs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "address": "CGHCLa9JPwArBvZyBqSFdGYxVbEmyBsUNx",
            "public": "02c716d071a76cbf0d29c29cacfec76e0ef8116b37389fb7a3e76d6d32cf59f4d3",
            "private": "6b7855bfa0cbce65fa9b84b80058d1e117331b35fbe7f7e9c97f6e7c4b0e7143",
            "wif": "BpssP5kLsnygEaHuodnpQBChvi2YszWGAgstUfDmXTX3Y4EG3pv4"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let keys = client.gen_addr_keychain().await.unwrap();

    assert!(!keys.address.is_empty());
    assert!(!keys.private.is_empty());
    assert!(!keys.wif.is_empty());
}

#[tokio::test]
async fn test_gen_addr_multisig() {
    let server = MockServer::start().await;

    let pubkeys = vec![
        "02c716d071a76cbf0d29c29cacfec76e0ef8116b37389fb7a3e76d6d32cf59f4d3".to_string(),
        "033ef4d5165637d99b673bcdbb7ead359cee6afd7aaf78d3da9d2392ee4102c8ea".to_string(),
        "022b8934cc41e76cb4286b9f3ed57e2d27798395b04dd23711981a77dc216df8ca".to_string(),
    ];

    Mock::given(method("POST"))
        .and(path("/bcy/test/addrs"))
        .and(body_partial_json(serde_json::json!({
            "pubkeys": pubkeys,
            "script_type": "multisig-2-of-3"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "address": "De2gwq9GvNgvKgHCYRMKnPqss3pzWGSHiH",
            "pubkeys": pubkeys,
            "script_type": "multisig-2-of-3"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .gen_addr_multisig(&AddrKeychain {
            pubkeys,
            script_type: "multisig-2-of-3".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.address, "De2gwq9GvNgvKgHCYRMKnPqss3pzWGSHiH");
}

#[tokio::test]
async fn test_faucet_funds_address() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bcy/test/faucet"))
        .and(body_json(serde_json::json!({
            "address": "CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd",
            "amount": 100000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tx_ref": "aaaa1111"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let txhash = client
        .faucet("CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd", 100000)
        .await
        .unwrap();
    assert_eq!(txhash, "aaaa1111");
}

#[tokio::test]
async fn test_faucet_rejected_off_testnet() {
    let client = BlockCypherClient::new(BlockCypherConfig::default());
    let err = client
        .faucet("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 1000)
        .await
        .unwrap_err();
    assert!(matches!(err, BlockCypherError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_faucet_rejects_oversized_amount() {
    let client = test_client("http://127.0.0.1:1");
    let err = client
        .faucet("CFqoZmZ3ePwK5wnkhxJjJAQKJ82C7RJdmd", 10_000_001)
        .await
        .unwrap_err();
    assert!(matches!(err, BlockCypherError::InvalidRequest(_)));
}
