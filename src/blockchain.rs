//! Chain and block queries.

use crate::client::{BlockCypherClient, QueryPairs};
use crate::error::BlockCypherError;
use crate::types::{Block, Blockchain};

/// Query options for paging a block's transaction hashes.
#[derive(Debug, Clone, Default)]
pub struct BlockParams {
    /// Index of the first transaction hash to return.
    pub txstart: Option<u32>,
    /// Maximum number of transaction hashes to return.
    pub limit: Option<u32>,
}

impl BlockParams {
    pub(crate) fn query(&self) -> QueryPairs {
        let mut q = Vec::new();
        if let Some(txstart) = self.txstart {
            q.push(("txstart", txstart.to_string()));
        }
        if let Some(limit) = self.limit {
            q.push(("limit", limit.to_string()));
        }
        q
    }
}

impl BlockCypherClient {
    /// Fetch the current state of the configured chain.
    pub async fn get_chain(&self) -> Result<Blockchain, BlockCypherError> {
        self.get("", Vec::new()).await
    }

    /// Fetch a block by hash or height.
    pub async fn get_block(
        &self,
        hash_or_height: &str,
        params: &BlockParams,
    ) -> Result<Block, BlockCypherError> {
        self.get(&format!("/blocks/{hash_or_height}"), params.query())
            .await
    }

    /// Fetch the next page of a block's transaction hashes, following
    /// the continuation URL the service embedded in `block`.
    ///
    /// Fails with [`BlockCypherError::InvalidRequest`] when the block
    /// carries no further pages.
    pub async fn get_block_next_txids(&self, block: &Block) -> Result<Block, BlockCypherError> {
        let url = block.next_txids.as_deref().ok_or_else(|| {
            BlockCypherError::InvalidRequest("block has no next_txids page".to_string())
        })?;
        self.get_url(url).await
    }
}
