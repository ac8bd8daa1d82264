//! Per-input transaction signing
//!
//! `InputSigner` produces the unlocking-script stack for one input at a
//! time. Each call is a pure function of the transaction snapshot, the
//! input index, the resolved UTXO/address graph and the key provider, so
//! signing all inputs concurrently needs no synchronization; the caller
//! writes each returned stack into its own input's script slot and
//! aborts the whole transaction on any per-input failure.

use crate::constants::SIGHASH_ALL;
use crate::crypto;
use crate::error::SignError;
use crate::hd::KeyProvider;
use crate::serialize;
use crate::types::{ByteString, Chain, Transaction};

pub struct InputSigner<P> {
    key_provider: P,
}

impl<P: KeyProvider> InputSigner<P> {
    pub fn new(key_provider: P) -> Self {
        Self { key_provider }
    }

    /// Produce the signature-script stack elements for one input.
    ///
    /// Returns exactly `[signature + sighash byte, public key]` or fails
    /// with exactly one `SignError`; there is no partial success. The
    /// signature is deterministic (RFC 6979), so identical calls
    /// reproduce identical bytes.
    pub fn sig_script_data(
        &self,
        transaction: &Transaction,
        index: usize,
    ) -> Result<Vec<ByteString>, SignError> {
        let input = transaction
            .inputs
            .get(index)
            .ok_or(SignError::IndexOutOfRange(index))?;

        let previous_output = input
            .previous_output
            .as_ref()
            .ok_or(SignError::NoPreviousOutput(index))?;

        let address = previous_output
            .address
            .as_ref()
            .ok_or(SignError::NoPreviousOutputAddress(index))?;

        let public_key = address
            .public_key
            .as_ref()
            .ok_or(SignError::NoPublicKeyInAddress)?;

        let chain = if address.external {
            Chain::External
        } else {
            Chain::Internal
        };
        let private_key = self
            .key_provider
            .derive_private_key(address.index, chain)
            .map_err(|_| SignError::NoPrivateKey)?;

        let mut preimage = serialize::serialized_for_signature(transaction, index)?;
        preimage.extend_from_slice(&SIGHASH_ALL.to_le_bytes());
        let signature_hash = crypto::double_sha256(&preimage);

        let mut signature = crypto::sign(&signature_hash, &private_key);
        signature.push(SIGHASH_ALL as u8);

        Ok(vec![signature, public_key.clone()])
    }
}
