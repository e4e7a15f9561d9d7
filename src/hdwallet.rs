//! HD wallet resource: wallets whose addresses the service derives from
//! extended public keys.
//!
//! All state lives remotely. Per named wallet the lifecycle is: created
//! once, grown by derivation (a permanent server-side mutation), read at
//! will, and deleted, after which the name is free for reuse.

use crate::client::{BlockCypherClient, QueryPairs};
use crate::error::BlockCypherError;
use crate::types::{DerivedAddresses, HdWallet};

/// Query options for listing HD wallet addresses.
#[derive(Debug, Clone, Default)]
pub struct HdAddressParams {
    /// Restrict to addresses that have (`true`) or have not (`false`)
    /// received any transactions.
    pub used: Option<bool>,
    /// Restrict to addresses with (`true`) or without (`false`) a zero
    /// balance.
    pub zero_balance: Option<bool>,
}

impl HdAddressParams {
    pub(crate) fn query(&self) -> QueryPairs {
        let mut q = Vec::new();
        if let Some(used) = self.used {
            q.push(("used", used.to_string()));
        }
        if let Some(zero) = self.zero_balance {
            q.push(("zerobalance", zero.to_string()));
        }
        q
    }
}

/// Query options for deriving new HD wallet addresses.
#[derive(Debug, Clone, Default)]
pub struct DeriveParams {
    /// Number of addresses to derive; the service defaults to one.
    pub count: Option<u32>,
    /// Subchain index to derive on, for wallets created with subchains.
    pub subchain_index: Option<u32>,
}

impl DeriveParams {
    pub(crate) fn query(&self) -> QueryPairs {
        let mut q = Vec::new();
        if let Some(count) = self.count {
            q.push(("count", count.to_string()));
        }
        if let Some(index) = self.subchain_index {
            q.push(("subchain_index", index.to_string()));
        }
        q
    }
}

impl BlockCypherClient {
    /// Create a named HD wallet from one or more extended public keys.
    ///
    /// The descriptor is forwarded as-is; name collisions, malformed
    /// keys, and any other validation are the service's to enforce.
    /// Returns the wallet as the service now sees it.
    pub async fn create_hd_wallet(&self, wallet: &HdWallet) -> Result<HdWallet, BlockCypherError> {
        self.post("/wallets/hd", Vec::new(), wallet).await
    }

    /// Fetch the current state of a named HD wallet.
    pub async fn get_hd_wallet(&self, name: &str) -> Result<HdWallet, BlockCypherError> {
        self.get(&format!("/wallets/hd/{name}"), Vec::new()).await
    }

    /// List the addresses associated with a named HD wallet.
    ///
    /// The result carries `addresses` and typically `name`; the service
    /// leaves other fields empty here.
    pub async fn get_hd_wallet_addresses(
        &self,
        name: &str,
        params: &HdAddressParams,
    ) -> Result<HdWallet, BlockCypherError> {
        self.get(&format!("/wallets/hd/{name}/addresses"), params.query())
            .await
    }

    /// Derive new addresses within a named HD wallet.
    ///
    /// This permanently extends the wallet's address set server-side and
    /// is not idempotent: each call derives further distinct addresses.
    /// The result contains only the newly derived addresses; call
    /// [`get_hd_wallet_addresses`](Self::get_hd_wallet_addresses)
    /// afterwards for the complete set.
    pub async fn derive_hd_address(
        &self,
        name: &str,
        params: &DeriveParams,
    ) -> Result<DerivedAddresses, BlockCypherError> {
        self.post_empty(&format!("/wallets/hd/{name}/addresses/derive"), params.query())
            .await
    }

    /// Delete a named HD wallet.
    ///
    /// On success the wallet no longer exists remotely; subsequent
    /// fetches fail with [`BlockCypherError::NotFound`] and the name may
    /// be reused by a new creation.
    pub async fn delete_hd_wallet(&self, name: &str) -> Result<(), BlockCypherError> {
        self.delete(&format!("/wallets/hd/{name}"), Vec::new()).await
    }
}
