//! BlockCypher data types: configuration and wire models.
//!
//! Field names mirror the service's JSON schema verbatim; fields the
//! service may omit default to empty rather than failing decode.

use serde::{Deserialize, Serialize};

/// Configuration for a [`BlockCypherClient`](crate::BlockCypherClient).
///
/// Immutable for the lifetime of the client; the coin, chain, and token
/// are folded into every constructed URL.
#[derive(Debug, Clone)]
pub struct BlockCypherConfig {
    /// Versioned base URL for the API (e.g. `https://api.blockcypher.com/v1`).
    pub base_url: String,
    /// Coin identifier (`btc`, `ltc`, `doge`, `dash`, or `bcy`).
    pub coin: String,
    /// Chain identifier (`main`, `test`, or `test3`).
    pub chain: String,
    /// Optional API token, sent as the `token` query parameter on every
    /// request.
    pub token: Option<String>,
}

impl Default for BlockCypherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.blockcypher.com/v1".to_string(),
            coin: "btc".to_string(),
            chain: "main".to_string(),
            token: None,
        }
    }
}

/// Top-level state of a blockchain, as returned by the chain endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blockchain {
    /// Chain name (e.g. `BTC.main`).
    #[serde(default)]
    pub name: String,
    /// Current chain height.
    #[serde(default)]
    pub height: u64,
    /// Hash of the latest block.
    #[serde(default)]
    pub hash: String,
    /// Timestamp of the latest block.
    #[serde(default)]
    pub time: Option<String>,
    /// URL of the latest block.
    #[serde(default)]
    pub latest_url: Option<String>,
    /// Hash of the second-latest block.
    #[serde(default)]
    pub previous_hash: Option<String>,
    /// URL of the second-latest block.
    #[serde(default)]
    pub previous_url: Option<String>,
    /// Number of peers the service is connected to.
    #[serde(default)]
    pub peer_count: Option<u32>,
    /// Number of unconfirmed transactions in the mempool.
    #[serde(default)]
    pub unconfirmed_count: Option<u64>,
    /// High-priority fee estimate, in satoshis per kilobyte.
    #[serde(default)]
    pub high_fee_per_kb: Option<u64>,
    /// Medium-priority fee estimate, in satoshis per kilobyte.
    #[serde(default)]
    pub medium_fee_per_kb: Option<u64>,
    /// Low-priority fee estimate, in satoshis per kilobyte.
    #[serde(default)]
    pub low_fee_per_kb: Option<u64>,
    /// Height of the most recent fork the service has seen.
    #[serde(default)]
    pub last_fork_height: Option<u64>,
    /// Hash of the most recent forked block.
    #[serde(default)]
    pub last_fork_hash: Option<String>,
}

/// A block, with its transaction hashes paged via `txids`/`next_txids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Block hash.
    #[serde(default)]
    pub hash: String,
    /// Block height.
    #[serde(default)]
    pub height: u64,
    /// Number of blocks mined on top of this one.
    #[serde(default)]
    pub depth: Option<u64>,
    /// Chain this block belongs to.
    #[serde(default)]
    pub chain: Option<String>,
    /// Total satoshis transacted in the block.
    #[serde(default)]
    pub total: Option<u64>,
    /// Total fees collected by the miner, in satoshis.
    #[serde(default)]
    pub fees: Option<u64>,
    /// Block size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// Block version.
    #[serde(default)]
    pub ver: Option<u32>,
    /// Consensus timestamp of the block.
    #[serde(default)]
    pub time: Option<String>,
    /// Time the service first received the block.
    #[serde(default)]
    pub received_time: Option<String>,
    /// Address or identifier of the relaying peer.
    #[serde(default)]
    pub relayed_by: Option<String>,
    /// Difficulty target bits.
    #[serde(default)]
    pub bits: Option<u64>,
    /// Block nonce.
    #[serde(default)]
    pub nonce: Option<u64>,
    /// Total number of transactions in the block.
    #[serde(default)]
    pub n_tx: Option<u64>,
    /// Hash of the previous block.
    #[serde(default)]
    pub prev_block: Option<String>,
    /// Merkle root of the block's transactions.
    #[serde(default)]
    pub mrkl_root: Option<String>,
    /// Transaction hashes in this page of the block.
    #[serde(default)]
    pub txids: Vec<String>,
    /// Continuation URL for the next page of transaction hashes, if any.
    #[serde(default)]
    pub next_txids: Option<String>,
}

/// Summary of a transaction as it concerns a single address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxRef {
    /// Address this reference concerns, when listed outside an address
    /// context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Height of the confirming block, `-1` while unconfirmed.
    #[serde(default)]
    pub block_height: i64,
    /// Hash of the referenced transaction.
    #[serde(default)]
    pub tx_hash: String,
    /// Input index consuming the address's funds, `-1` if not an input.
    #[serde(default)]
    pub tx_input_n: i32,
    /// Output index crediting the address, `-1` if not an output.
    #[serde(default)]
    pub tx_output_n: i32,
    /// Value transferred, in satoshis.
    #[serde(default)]
    pub value: u64,
    /// Whether the referenced output has been spent.
    #[serde(default)]
    pub spent: bool,
    /// Hash of the transaction that spent this output, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_by: Option<String>,
    /// Whether the transaction is part of an attempted double spend.
    #[serde(default)]
    pub double_spend: bool,
    /// Number of confirmations.
    #[serde(default)]
    pub confirmations: u64,
    /// Time of confirmation, if confirmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<String>,
    /// Time the service first saw the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    /// Service confidence that an unconfirmed transaction will confirm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Address balance immediately after this transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_balance: Option<u64>,
}

/// Balance and transaction summary for an address or named wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Addr {
    /// The address, or the wallet name when queried by wallet.
    #[serde(default)]
    pub address: String,
    /// Total satoshis ever received.
    #[serde(default)]
    pub total_received: u64,
    /// Total satoshis ever sent.
    #[serde(default)]
    pub total_sent: u64,
    /// Confirmed balance, in satoshis.
    #[serde(default)]
    pub balance: u64,
    /// Unconfirmed balance; negative while unconfirmed spends are pending.
    #[serde(default)]
    pub unconfirmed_balance: i64,
    /// Confirmed plus unconfirmed balance.
    #[serde(default)]
    pub final_balance: i64,
    /// Number of confirmed transactions.
    #[serde(default)]
    pub n_tx: u64,
    /// Number of unconfirmed transactions.
    #[serde(default)]
    pub unconfirmed_n_tx: u64,
    /// Total number of transactions, confirmed and unconfirmed.
    #[serde(default)]
    pub final_n_tx: u64,
    /// Confirmed transaction references.
    #[serde(default)]
    pub txrefs: Vec<TxRef>,
    /// Unconfirmed transaction references.
    #[serde(default)]
    pub unconfirmed_txrefs: Vec<TxRef>,
    /// Full transactions, populated by the full-address endpoint.
    #[serde(default)]
    pub txs: Vec<Tx>,
    /// Whether more transaction references exist beyond this page.
    #[serde(default, rename = "hasMore")]
    pub has_more: bool,
}

/// An address together with its key material, as generated or assembled
/// by the service.
///
/// Private key material appears only in responses to the generation
/// endpoint; this client never produces or consumes it locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddrKeychain {
    /// The address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Hex-encoded public key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public: String,
    /// Hex-encoded private key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private: String,
    /// Private key in wallet import format.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wif: String,
    /// Public keys composing a multisig address.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pubkeys: Vec<String>,
    /// Script type for multisig addresses (e.g. `multisig-2-of-3`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script_type: String,
    /// Original address before an asset-protocol translation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub original_address: String,
    /// Open Assets protocol address, when applicable.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub oap_address: String,
}

/// A named collection of plain addresses watched by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    /// Token the wallet is registered under; filled by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Wallet name, unique within the token/coin/chain scope.
    #[serde(default)]
    pub name: String,
    /// Addresses currently associated with the wallet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
}

/// A named wallet whose addresses the service derives from extended
/// public keys.
///
/// `name` is the sole identity key within the token/coin/chain scope and
/// is immutable after creation. `extended_public_keys` is seed material
/// set at creation and never mutated through this client. The meaning of
/// `addresses` depends on the operation: caller-supplied seed addresses
/// on creation, the service's current derived set on a fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HdWallet {
    /// Wallet name, unique within the token/coin/chain scope.
    #[serde(default)]
    pub name: String,
    /// Extended public keys the service derives addresses from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_public_keys: Vec<String>,
    /// Addresses associated with the wallet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
}

/// Result of deriving addresses within an HD wallet.
///
/// Carries only the newly derived addresses, never the wallet's full
/// set; fetch the wallet afterwards for the complete picture.
#[derive(Debug, Clone, Deserialize)]
pub struct DerivedAddresses {
    /// Name of the wallet the addresses were derived in.
    #[serde(default)]
    pub name: String,
    /// The newly derived addresses, in derivation order.
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// A transaction input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxInput {
    /// Hash of the transaction whose output is consumed.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prev_hash: String,
    /// Index of the consumed output; `-1` for coinbase inputs.
    #[serde(default)]
    pub output_index: i32,
    /// Value of the consumed output, in satoshis.
    #[serde(default)]
    pub output_value: u64,
    /// Raw input script, hex-encoded.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script: String,
    /// Script type of the consumed output.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script_type: String,
    /// Input sequence number.
    #[serde(default)]
    pub sequence: u64,
    /// Addresses the input draws from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    /// Age of the consumed output, in blocks.
    #[serde(default)]
    pub age: u64,
    /// Wallet the input was selected from, when funding by wallet name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_name: Option<String>,
}

/// A transaction output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxOutput {
    /// Output value, in satoshis.
    #[serde(default)]
    pub value: u64,
    /// Raw output script, hex-encoded.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script: String,
    /// Addresses the output pays to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    /// Script type of the output.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script_type: String,
    /// Hash of the transaction that spent this output, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_by: Option<String>,
    /// Embedded data, hex-encoded, for null-data outputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_hex: Option<String>,
    /// Embedded data as a string, when the service can decode it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_string: Option<String>,
}

/// A transaction, full or partially specified.
///
/// Partially filled (inputs by address, outputs by address and value) it
/// doubles as the request shape for building a new transaction skeleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tx {
    /// Hash of the confirming block, empty while unconfirmed.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub block_hash: String,
    /// Height of the confirming block, `-1` while unconfirmed.
    #[serde(default)]
    pub block_height: i64,
    /// Transaction hash.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
    /// All addresses involved in the transaction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    /// Total satoshis transferred, excluding fees.
    #[serde(default)]
    pub total: u64,
    /// Fees paid, in satoshis.
    #[serde(default)]
    pub fees: u64,
    /// Transaction size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Confirmation preference requested for a new transaction
    /// (`high`, `medium`, or `low`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
    /// Address or identifier of the relaying peer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relayed_by: Option<String>,
    /// Time the service first received the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    /// Time of confirmation, if confirmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<String>,
    /// Transaction version.
    #[serde(default)]
    pub ver: u32,
    /// Transaction lock time.
    #[serde(default)]
    pub lock_time: u64,
    /// Whether the transaction is part of an attempted double spend.
    #[serde(default)]
    pub double_spend: bool,
    /// Hash of the transaction this one double-spends against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_of: Option<String>,
    /// Number of inputs.
    #[serde(default)]
    pub vin_sz: u32,
    /// Number of outputs.
    #[serde(default)]
    pub vout_sz: u32,
    /// Number of confirmations; on a new-transaction request, the
    /// minimum confirmations required on funding inputs.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub confirmations: u64,
    /// Service confidence that an unconfirmed transaction will confirm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Transaction inputs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<TxInput>,
    /// Transaction outputs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<TxOutput>,
    /// Change address to use when building a new transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_address: Option<String>,
    /// Raw transaction, hex-encoded, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    /// Data protocol detected in the transaction's outputs, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_protocol: Option<String>,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl Tx {
    /// Partially-filled transaction moving `value` satoshis from one
    /// address to another, suitable as input to
    /// [`new_tx`](crate::BlockCypherClient::new_tx).
    ///
    /// With `confirmed_only` set, the service funds the transaction only
    /// from confirmed outputs.
    pub fn transfer(from: &str, to: &str, value: u64, confirmed_only: bool) -> Self {
        Self {
            inputs: vec![TxInput {
                addresses: vec![from.to_string()],
                ..Default::default()
            }],
            outputs: vec![TxOutput {
                addresses: vec![to.to_string()],
                value,
                ..Default::default()
            }],
            confirmations: if confirmed_only { 1 } else { 0 },
            ..Default::default()
        }
    }
}

/// An error reported inside a transaction skeleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkelError {
    /// The error message.
    #[serde(default)]
    pub error: String,
}

/// A transaction skeleton: an unsigned or partially signed transaction
/// together with its signing material.
///
/// The service returns `tosign` data; producing `signatures` and
/// `pubkeys` from it is the caller's responsibility, via whatever
/// keychain they hold. This client never signs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxSkel {
    /// The transaction under construction.
    #[serde(default)]
    pub tx: Tx,
    /// Hex-encoded data to sign, one entry per input.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tosign: Vec<String>,
    /// Hex-encoded signatures, parallel to `tosign`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<String>,
    /// Hex-encoded public keys, parallel to `tosign`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pubkeys: Vec<String>,
    /// Hex-encoded transactions over which `tosign` was computed, when
    /// validation is requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tosign_tx: Vec<String>,
    /// Errors the service reported while processing the skeleton.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<SkelError>,
}

/// Confidence information for an unconfirmed transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct TxConfidence {
    /// Milliseconds since the service first saw the transaction.
    #[serde(default)]
    pub age_millis: u64,
    /// Number of peers that have relayed the transaction.
    #[serde(default)]
    pub receive_count: i64,
    /// Probability, between 0 and 1, that the transaction will confirm.
    #[serde(default)]
    pub confidence: f64,
    /// The transaction hash.
    #[serde(default)]
    pub txhash: String,
    /// URL of the full transaction.
    #[serde(default)]
    pub txurl: Option<String>,
}

/// A microtransaction: a small value transfer built, and optionally
/// signed, server-side.
///
/// Two flows exist: sending `from_private`/`from_wif` lets the service
/// sign (the key transits to the service; use only where that is
/// acceptable), while sending `from_pubkey` returns `tosign` data for
/// the caller to sign externally and resubmit with `signatures` filled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MicroTx {
    /// Hex-encoded public key to fund from, for the two-step flow.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from_pubkey: String,
    /// Hex-encoded private key to fund from, for server-side signing.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from_private: String,
    /// Private key in wallet import format, for server-side signing.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from_wif: String,
    /// Destination address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub to_address: String,
    /// Value to transfer, in satoshis.
    #[serde(default)]
    pub value_satoshis: u64,
    /// Address to return change to; defaults to the funding address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_address: Option<String>,
    /// Whether the service guarantees the transaction against double
    /// spends, for a fee.
    #[serde(default)]
    pub wait_guarantee: bool,
    /// Hex-encoded data to sign, returned by the first step of the
    /// public-key flow.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tosign: Vec<String>,
    /// Hex-encoded signatures, supplied on the second step of the
    /// public-key flow.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<String>,
    /// Inputs selected by the service.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<TxInput>,
    /// Outputs built by the service.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<TxOutput>,
    /// Fees paid, in satoshis.
    #[serde(default)]
    pub fees: u64,
    /// Hash of the completed transaction.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

/// Data embedded in the chain through a null-data output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NullData {
    /// The data to embed; at most 40 bytes on most chains.
    #[serde(default)]
    pub data: String,
    /// Encoding of `data`: `string` (default) or `hex`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Hash of the transaction carrying the data, filled by the service.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

/// A webhook registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hook {
    /// Server-assigned webhook identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Event to subscribe to (e.g. `new-block`, `confirmed-tx`,
    /// `tx-confidence`).
    #[serde(default)]
    pub event: String,
    /// Transaction or block hash to filter on, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
    /// Wallet name to filter on, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wallet_name: String,
    /// Address to filter on, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    /// Confirmation count to notify at, for confirmation events.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub confirmations: u64,
    /// Confidence threshold to notify at, for confidence events.
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub confidence: f64,
    /// Raw script to filter on, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script: String,
    /// URL the service delivers events to.
    #[serde(default)]
    pub url: String,
    /// Number of failed delivery attempts so far.
    #[serde(default)]
    pub callback_errors: u64,
    /// Token the webhook is registered under; filled by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn is_zero_f64(n: &f64) -> bool {
    *n == 0.0
}

/// A payment forwarding request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentFwd {
    /// Server-assigned forwarding identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Address payments are forwarded to.
    #[serde(default)]
    pub destination: String,
    /// Server-generated address to receive payments on.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub input_address: String,
    /// Address receiving the processing fee, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub process_fees_address: String,
    /// Flat processing fee, in satoshis.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub process_fees_satoshis: u64,
    /// Processing fee as a fraction of each payment.
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub process_fees_percent: f64,
    /// URL notified on each forwarded payment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub callback_url: String,
    /// Whether forwarding waits for payment confirmation callbacks.
    #[serde(default)]
    pub enable_confirmations: bool,
    /// Mining fee attached to each forwarding transaction, in satoshis.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mining_fees_satoshis: u64,
    /// Hashes of forwarding transactions processed so far.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub txs: Vec<String>,
    /// Token the forwarding is registered under; filled by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
