//! HD key derivation provider
//!
//! The signer only needs one capability from the wallet: a deterministic,
//! side-effect-free mapping from `(leaf index, chain)` to private key
//! material. `KeyProvider` is that seam; hardware-backed or full BIP-32
//! providers plug in behind it.

use crate::crypto::{double_sha256, hash160};
use crate::error::KeyDerivationError;
use crate::types::{ByteString, Chain};
use secp256k1::{PublicKey, Secp256k1, SecretKey};

/// Capability the Input Signer consumes
pub trait KeyProvider {
    /// Derive the private key for one HD leaf.
    ///
    /// Must be deterministic: the same `(index, chain)` always yields the
    /// same key or the same error.
    fn derive_private_key(&self, index: u32, chain: Chain)
        -> Result<SecretKey, KeyDerivationError>;
}

/// Seed-backed deterministic provider.
///
/// Leaf material is `double_sha256(seed || chain tag || index LE)`. This
/// is a self-contained derivation scheme, not BIP-32; it satisfies the
/// engine's contract (deterministic, one key per leaf) and keeps key
/// derivation inside the crate for fixtures and single-wallet callers.
pub struct SeedKeyProvider {
    seed: ByteString,
}

impl SeedKeyProvider {
    pub fn new(seed: ByteString) -> Self {
        Self { seed }
    }

    fn chain_tag(chain: Chain) -> u8 {
        match chain {
            Chain::External => 0,
            Chain::Internal => 1,
        }
    }

    /// Serialized compressed public key for a leaf
    pub fn public_key(&self, index: u32, chain: Chain) -> Result<ByteString, KeyDerivationError> {
        let secret_key = self.derive_private_key(index, chain)?;
        let secp = Secp256k1::new();
        Ok(PublicKey::from_secret_key(&secp, &secret_key)
            .serialize()
            .to_vec())
    }

    /// hash160 of the leaf's compressed public key (P2PKH key hash)
    pub fn key_hash(&self, index: u32, chain: Chain) -> Result<[u8; 20], KeyDerivationError> {
        Ok(hash160(&self.public_key(index, chain)?))
    }
}

impl KeyProvider for SeedKeyProvider {
    fn derive_private_key(
        &self,
        index: u32,
        chain: Chain,
    ) -> Result<SecretKey, KeyDerivationError> {
        let mut material = self.seed.clone();
        material.push(Self::chain_tag(chain));
        material.extend_from_slice(&index.to_le_bytes());
        // Rejected by secp256k1 when outside the curve order (negligible
        // probability, but the contract is fallible).
        SecretKey::from_slice(&double_sha256(&material))
            .map_err(|_| KeyDerivationError::InvalidKeyMaterial)
    }
}
