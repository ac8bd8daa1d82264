//! Core entity types for transaction construction and signing

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit hash
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Recognized locking-script shapes
///
/// Everything the engine does not recognize is `Unknown`; outputs of
/// unknown shape are not signable because no owning address can be
/// attached to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptType {
    P2pkh,
    P2pk,
    P2sh,
    P2wpkh,
    P2wsh,
    #[default]
    Unknown,
}

/// HD derivation-chain selector: receiving vs. change keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chain {
    External,
    Internal,
}

/// A spendable destination controlled by one HD wallet leaf
///
/// `public_key` is optional because an address can be known (e.g. parsed
/// from a watched script) before its key material is; signing requires it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub public_key: Option<ByteString>,
    pub index: u32,
    pub external: bool,
}

/// Reference to a transaction output: display txid (reversed hex) + position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub tx_reversed_hex: String,
    pub index: u32,
}

/// Block header: opaque consensus header data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash,
    pub merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Block: header anchored at a height
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub height: i32,
}

/// Transaction input
///
/// `previous_output` is a lookup result cached by the resolver pass, not
/// an owned relationship; it stays `None` until the local UTXO store has
/// been consulted, and an input whose slot is still `None` at signing
/// time is unsignable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub previous_output_tx_reversed_hex: String,
    pub previous_output_index: u32,
    pub script: ByteString,
    pub sequence: u32,
    pub previous_output: Option<TransactionOutput>,
}

/// Transaction output
///
/// `address` is the optional back-reference to the controlling address,
/// populated externally once the locking script has been recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: i64,
    pub index: u32,
    pub locking_script: ByteString,
    pub script_type: ScriptType,
    pub key_hash: ByteString,
    pub address: Option<Address>,
}

/// Transaction: version, ordered inputs and outputs, lock time
///
/// Input and output order is semantically significant: it affects the
/// wire serialization, the signature hash, and the txid. A transaction is
/// immutable once built, except for writing a computed signature script
/// into an input's `script` slot after signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}
