//! Microtransactions: small transfers built and funded server-side.

use crate::client::BlockCypherClient;
use crate::error::BlockCypherError;
use crate::types::MicroTx;

impl BlockCypherClient {
    /// Send a microtransaction.
    ///
    /// With `from_private`/`from_wif` set the service signs and
    /// broadcasts in one call. With `from_pubkey` set the first call
    /// returns `tosign` data; sign it externally, attach the
    /// `signatures`, and call again to broadcast.
    pub async fn send_micro(&self, micro: &MicroTx) -> Result<MicroTx, BlockCypherError> {
        self.post("/txs/micro", Vec::new(), micro).await
    }
}
