//! Webhook registration and management.

use crate::client::BlockCypherClient;
use crate::error::BlockCypherError;
use crate::types::Hook;

impl BlockCypherClient {
    /// Register a webhook; the response carries the server-assigned id.
    pub async fn create_hook(&self, hook: &Hook) -> Result<Hook, BlockCypherError> {
        self.post("/hooks", Vec::new(), hook).await
    }

    /// List all webhooks registered under the configured token.
    pub async fn list_hooks(&self) -> Result<Vec<Hook>, BlockCypherError> {
        self.get("/hooks", Vec::new()).await
    }

    /// Fetch a webhook by id.
    pub async fn get_hook(&self, id: &str) -> Result<Hook, BlockCypherError> {
        self.get(&format!("/hooks/{id}"), Vec::new()).await
    }

    /// Delete a webhook by id.
    pub async fn delete_hook(&self, id: &str) -> Result<(), BlockCypherError> {
        self.delete(&format!("/hooks/{id}"), Vec::new()).await
    }
}
