//! Transaction queries and the build/sign/send skeleton flow.
//!
//! Building a transaction is a two-step exchange: `new_tx` returns a
//! skeleton with `tosign` data, the caller signs it with an external
//! keychain, and `send_tx` submits the completed skeleton. No signing
//! happens in this crate.

use serde::Serialize;

use crate::client::{BlockCypherClient, QueryPairs};
use crate::error::BlockCypherError;
use crate::types::{NullData, Tx, TxConfidence, TxSkel};

/// Query options for transaction endpoints.
#[derive(Debug, Clone, Default)]
pub struct TxParams {
    /// Maximum number of inputs/outputs to return.
    pub limit: Option<u32>,
    /// Index of the first input to return.
    pub instart: Option<u32>,
    /// Index of the first output to return.
    pub outstart: Option<u32>,
    /// Include the raw transaction hex in the response.
    pub include_hex: bool,
    /// Include confidence information for unconfirmed transactions.
    pub include_confidence: bool,
}

impl TxParams {
    pub(crate) fn query(&self) -> QueryPairs {
        let mut q = Vec::new();
        if let Some(limit) = self.limit {
            q.push(("limit", limit.to_string()));
        }
        if let Some(instart) = self.instart {
            q.push(("instart", instart.to_string()));
        }
        if let Some(outstart) = self.outstart {
            q.push(("outstart", outstart.to_string()));
        }
        if self.include_hex {
            q.push(("includeHex", "true".to_string()));
        }
        if self.include_confidence {
            q.push(("includeConfidence", "true".to_string()));
        }
        q
    }
}

#[derive(Serialize)]
struct RawTx<'a> {
    tx: &'a str,
}

/// Fail on skeletons the service flagged with per-item errors even
/// though the HTTP exchange itself succeeded.
fn check_skel(skel: TxSkel) -> Result<TxSkel, BlockCypherError> {
    if skel.errors.is_empty() {
        return Ok(skel);
    }
    Err(BlockCypherError::Rejected {
        errors: skel.errors.into_iter().map(|e| e.error).collect(),
    })
}

impl BlockCypherClient {
    /// List unconfirmed transactions currently in the mempool.
    pub async fn get_unconfirmed_txs(&self) -> Result<Vec<Tx>, BlockCypherError> {
        self.get("/txs", Vec::new()).await
    }

    /// Fetch a transaction by hash.
    pub async fn get_tx(&self, hash: &str, params: &TxParams) -> Result<Tx, BlockCypherError> {
        self.get(&format!("/txs/{hash}"), params.query()).await
    }

    /// Fetch confidence information for an unconfirmed transaction.
    pub async fn get_tx_confidence(&self, hash: &str) -> Result<TxConfidence, BlockCypherError> {
        self.get(&format!("/txs/{hash}/confidence"), Vec::new()).await
    }

    /// Build a transaction skeleton from a partially-filled transaction
    /// (inputs by address, outputs by address and value).
    ///
    /// The returned skeleton carries `tosign` data for the caller to
    /// sign externally before [`send_tx`](Self::send_tx).
    pub async fn new_tx(&self, tx: &Tx) -> Result<TxSkel, BlockCypherError> {
        let skel = self.post("/txs/new", Vec::new(), tx).await?;
        check_skel(skel)
    }

    /// Submit a signed transaction skeleton for broadcast.
    pub async fn send_tx(&self, skel: &TxSkel) -> Result<TxSkel, BlockCypherError> {
        let skel = self.post("/txs/send", Vec::new(), skel).await?;
        check_skel(skel)
    }

    /// Broadcast a raw transaction from its hex encoding.
    pub async fn push_tx(&self, hex: &str) -> Result<Tx, BlockCypherError> {
        self.post("/txs/push", Vec::new(), &RawTx { tx: hex }).await
    }

    /// Decode a raw transaction without broadcasting it.
    pub async fn decode_tx(&self, hex: &str) -> Result<Tx, BlockCypherError> {
        self.post("/txs/decode", Vec::new(), &RawTx { tx: hex }).await
    }

    /// Embed data in the chain through a null-data output; the service
    /// builds, funds, and broadcasts the carrying transaction.
    pub async fn send_data(&self, data: &NullData) -> Result<NullData, BlockCypherError> {
        self.post("/txs/data", Vec::new(), data).await
    }
}
