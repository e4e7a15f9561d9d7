//! Plain wallet resource: named collections of watched addresses.

use serde::{Deserialize, Serialize};

use crate::client::BlockCypherClient;
use crate::error::BlockCypherError;
use crate::types::{AddrKeychain, Wallet};

#[derive(Serialize)]
struct AddrList {
    addresses: Vec<String>,
}

#[derive(Deserialize)]
struct WalletNames {
    #[serde(default)]
    wallet_names: Vec<String>,
}

impl BlockCypherClient {
    /// Create a named wallet, optionally seeded with addresses.
    pub async fn create_wallet(&self, wallet: &Wallet) -> Result<Wallet, BlockCypherError> {
        self.post("/wallets", Vec::new(), wallet).await
    }

    /// List the names of all wallets registered under the configured
    /// token.
    pub async fn list_wallets(&self) -> Result<Vec<String>, BlockCypherError> {
        let resp: WalletNames = self.get("/wallets", Vec::new()).await?;
        Ok(resp.wallet_names)
    }

    /// Fetch a named wallet.
    pub async fn get_wallet(&self, name: &str) -> Result<Wallet, BlockCypherError> {
        self.get(&format!("/wallets/{name}"), Vec::new()).await
    }

    /// Add addresses to a named wallet.
    ///
    /// With `omit_wallet_addresses` set, the response skips echoing the
    /// wallet's full address list.
    pub async fn add_wallet_addrs(
        &self,
        name: &str,
        addrs: Vec<String>,
        omit_wallet_addresses: bool,
    ) -> Result<Wallet, BlockCypherError> {
        let mut query = Vec::new();
        if omit_wallet_addresses {
            query.push(("omitWalletAddresses", "true".to_string()));
        }
        self.post(
            &format!("/wallets/{name}/addresses"),
            query,
            &AddrList { addresses: addrs },
        )
        .await
    }

    /// List the addresses in a named wallet.
    pub async fn get_wallet_addrs(&self, name: &str) -> Result<Vec<String>, BlockCypherError> {
        let wallet: Wallet = self
            .get(&format!("/wallets/{name}/addresses"), Vec::new())
            .await?;
        Ok(wallet.addresses)
    }

    /// Remove addresses from a named wallet.
    pub async fn delete_wallet_addrs(
        &self,
        name: &str,
        addrs: &[String],
    ) -> Result<(), BlockCypherError> {
        let query = vec![("address", addrs.join(";"))];
        self.delete(&format!("/wallets/{name}/addresses"), query).await
    }

    /// Have the service generate a fresh address, add it to a named
    /// wallet, and return both the updated wallet and the new keychain.
    pub async fn gen_wallet_addr(
        &self,
        name: &str,
    ) -> Result<(Wallet, AddrKeychain), BlockCypherError> {
        // The response interleaves wallet and keychain fields in one
        // object; decode it once and project both shapes out of it.
        let raw: serde_json::Value = self
            .post_empty(&format!("/wallets/{name}/addresses/generate"), Vec::new())
            .await?;
        let wallet = serde_json::from_value(raw.clone()).map_err(BlockCypherError::Decode)?;
        let keychain = serde_json::from_value(raw).map_err(BlockCypherError::Decode)?;
        Ok((wallet, keychain))
    }

    /// Delete a named wallet.
    pub async fn delete_wallet(&self, name: &str) -> Result<(), BlockCypherError> {
        self.delete(&format!("/wallets/{name}"), Vec::new()).await
    }
}
