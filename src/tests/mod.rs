//! Tests for the BlockCypher client, backed by a mock HTTP server.

mod address;
mod hook;
mod payment;

use crate::types::BlockCypherConfig;
use crate::BlockCypherClient;

/// Client scoped to the BlockCypher test chain, pointed at a mock server.
fn test_client(base_url: &str) -> BlockCypherClient {
    BlockCypherClient::new(BlockCypherConfig {
        base_url: base_url.to_string(),
        coin: "bcy".to_string(),
        chain: "test".to_string(),
        token: Some("test-token".to_string()),
    })
}
