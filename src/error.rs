//! Error types for entity construction and signing

use thiserror::Error;

/// Entity Factory failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("invalid output: negative value {0}")]
    InvalidOutput(i64),
}

/// Wire serialization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    #[error("previous output txid is not a 32-byte hex string: {0}")]
    InvalidTxHex(String),

    #[error("input {0} has no resolved previous output")]
    MissingPreviousOutput(usize),
}

/// Key Derivation Provider failures
///
/// Everything the provider can fail with; the signer collapses all of
/// these into `SignError::NoPrivateKey`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyDerivationError {
    #[error("derived key material is not a valid secp256k1 secret key")]
    InvalidKeyMaterial,

    #[error("key material unavailable: {0}")]
    Unavailable(String),
}

/// Per-input signing failures
///
/// Each variant is terminal for that input's signing attempt and is
/// propagated to the caller unmodified; none represent transient
/// conditions, so nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    #[error("input index {0} out of range")]
    IndexOutOfRange(usize),

    #[error("input {0} has no resolved previous output")]
    NoPreviousOutput(usize),

    #[error("previous output of input {0} has no owning address")]
    NoPreviousOutputAddress(usize),

    #[error("owning address carries no public key")]
    NoPublicKeyInAddress,

    #[error("no private key could be derived for the owning address")]
    NoPrivateKey,

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}
