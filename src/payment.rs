//! Payment forwarding: server-generated addresses that forward incoming
//! payments to a destination.

use crate::client::BlockCypherClient;
use crate::error::BlockCypherError;
use crate::types::PaymentFwd;

impl BlockCypherClient {
    /// Create a payment forwarding address; the response carries the
    /// server-assigned id and input address.
    pub async fn create_payment_fwd(
        &self,
        payment: &PaymentFwd,
    ) -> Result<PaymentFwd, BlockCypherError> {
        self.post("/payments", Vec::new(), payment).await
    }

    /// List all payment forwardings registered under the configured
    /// token.
    pub async fn list_payment_fwds(&self) -> Result<Vec<PaymentFwd>, BlockCypherError> {
        self.get("/payments", Vec::new()).await
    }

    /// Delete a payment forwarding by id.
    pub async fn delete_payment_fwd(&self, id: &str) -> Result<(), BlockCypherError> {
        self.delete(&format!("/payments/{id}"), Vec::new()).await
    }
}
