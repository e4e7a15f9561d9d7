//! Address queries, keychain generation, and the test-chain faucet.

use serde::{Deserialize, Serialize};

use crate::client::{BlockCypherClient, QueryPairs};
use crate::error::BlockCypherError;
use crate::types::{Addr, AddrKeychain};

/// Largest amount the faucet will fund in one call, in satoshis.
const FAUCET_MAX: u64 = 10_000_000;

/// Query options for address endpoints.
#[derive(Debug, Clone, Default)]
pub struct AddrParams {
    /// Only return outputs that are still unspent.
    pub unspent_only: bool,
    /// Include raw scripts in transaction references.
    pub include_script: bool,
    /// Only return transactions confirmed before this block height.
    pub before: Option<u64>,
    /// Only return transactions confirmed after this block height.
    pub after: Option<u64>,
    /// Maximum number of transaction references to return.
    pub limit: Option<u32>,
    /// Only return transactions with at least this many confirmations.
    pub confirmations: Option<u64>,
    /// When querying by wallet name, omit the wallet's own addresses
    /// from transaction inputs and outputs.
    pub omit_wallet_addresses: bool,
}

impl AddrParams {
    pub(crate) fn query(&self) -> QueryPairs {
        let mut q = Vec::new();
        if self.unspent_only {
            q.push(("unspentOnly", "true".to_string()));
        }
        if self.include_script {
            q.push(("includeScript", "true".to_string()));
        }
        if let Some(before) = self.before {
            q.push(("before", before.to_string()));
        }
        if let Some(after) = self.after {
            q.push(("after", after.to_string()));
        }
        if let Some(limit) = self.limit {
            q.push(("limit", limit.to_string()));
        }
        if let Some(confirmations) = self.confirmations {
            q.push(("confirmations", confirmations.to_string()));
        }
        if self.omit_wallet_addresses {
            q.push(("omitWalletAddresses", "true".to_string()));
        }
        q
    }
}

#[derive(Serialize)]
struct FaucetReq<'a> {
    address: &'a str,
    amount: u64,
}

#[derive(Deserialize)]
struct FaucetResp {
    #[serde(default)]
    tx_ref: String,
}

impl BlockCypherClient {
    /// Fetch the balance summary of an address or named wallet, without
    /// transaction references.
    pub async fn get_addr_balance(
        &self,
        addr: &str,
        params: &AddrParams,
    ) -> Result<Addr, BlockCypherError> {
        self.get(&format!("/addrs/{addr}/balance"), params.query())
            .await
    }

    /// Fetch an address or named wallet with its transaction references.
    pub async fn get_addr(&self, addr: &str, params: &AddrParams) -> Result<Addr, BlockCypherError> {
        self.get(&format!("/addrs/{addr}"), params.query()).await
    }

    /// Fetch an address or named wallet with full transactions instead
    /// of references.
    pub async fn get_addr_full(
        &self,
        addr: &str,
        params: &AddrParams,
    ) -> Result<Addr, BlockCypherError> {
        self.get(&format!("/addrs/{addr}/full"), params.query()).await
    }

    /// Have the service generate a fresh address and keychain.
    ///
    /// The private key material in the response is generated remotely
    /// and transits the network; treat accordingly.
    pub async fn gen_addr_keychain(&self) -> Result<AddrKeychain, BlockCypherError> {
        self.post_empty("/addrs", Vec::new()).await
    }

    /// Assemble a multisig address from public keys and a script type
    /// (e.g. `multisig-2-of-3`).
    pub async fn gen_addr_multisig(
        &self,
        keychain: &AddrKeychain,
    ) -> Result<AddrKeychain, BlockCypherError> {
        self.post("/addrs", Vec::new(), keychain).await
    }

    /// Fund an address from the test-chain faucet; returns the hash of
    /// the funding transaction.
    ///
    /// Only the BlockCypher test chain (`bcy`/`test`) and the Bitcoin
    /// testnet (`btc`/`test3`) have a faucet, and at most 10 million
    /// satoshis can be requested per call; both misuses are rejected
    /// locally before any request is issued.
    pub async fn faucet(&self, address: &str, amount: u64) -> Result<String, BlockCypherError> {
        let config = self.config();
        let on_testnet = (config.coin == "bcy" && config.chain == "test")
            || (config.coin == "btc" && config.chain == "test3");
        if !on_testnet {
            return Err(BlockCypherError::InvalidRequest(
                "faucet is only available on test chains".to_string(),
            ));
        }
        if amount > FAUCET_MAX {
            return Err(BlockCypherError::InvalidRequest(format!(
                "faucet funds at most {FAUCET_MAX} satoshis per call"
            )));
        }
        let resp: FaucetResp = self
            .post("/faucet", Vec::new(), &FaucetReq { address, amount })
            .await?;
        Ok(resp.tx_ref)
    }
}
