#![deny(missing_docs)]

//! # blockcypher
//!
//! HTTP client for the [BlockCypher](https://www.blockcypher.com/dev/)
//! blockchain web API.
//!
//! Every wrapper is a thin request/response mapping onto one service
//! endpoint: the request struct is serialized to JSON, the call is issued
//! under the configured token/coin/chain scope, and the JSON response is
//! decoded into a typed result. The client holds no state between calls
//! beyond its immutable configuration, so it is cheap to clone and safe to
//! share across tasks.
//!
//! # Example
//!
//! ```no_run
//! use blockcypher::{BlockCypherClient, BlockCypherConfig, HdWallet};
//!
//! # async fn run() -> Result<(), blockcypher::BlockCypherError> {
//! let client = BlockCypherClient::new(BlockCypherConfig {
//!     coin: "bcy".to_string(),
//!     chain: "test".to_string(),
//!     token: Some("my-token".to_string()),
//!     ..Default::default()
//! });
//!
//! let wallet = client
//!     .create_hd_wallet(&HdWallet {
//!         name: "savings".to_string(),
//!         extended_public_keys: vec!["xpub661MyMwAqRbcF...".to_string()],
//!         addresses: Vec::new(),
//!     })
//!     .await?;
//! println!("created wallet {}", wallet.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

mod address;
mod blockchain;
mod hdwallet;
mod hook;
mod microtx;
mod payment;
mod transaction;
mod wallet;

#[cfg(test)]
mod tests;

pub use address::AddrParams;
pub use blockchain::BlockParams;
pub use client::BlockCypherClient;
pub use error::BlockCypherError;
pub use hdwallet::{DeriveParams, HdAddressParams};
pub use transaction::TxParams;
pub use types::{
    Addr, AddrKeychain, Block, BlockCypherConfig, Blockchain, DerivedAddresses, HdWallet, Hook,
    MicroTx, NullData, PaymentFwd, SkelError, Tx, TxConfidence, TxInput, TxOutput, TxRef, TxSkel,
    Wallet,
};
