//! Cryptographic primitives: digests and ECDSA over secp256k1

use crate::types::Hash;
use bitcoin_hashes::{sha256d, Hash as BitcoinHash};
use ripemd::Ripemd160;
use secp256k1::{ecdsa::Signature, Message, PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

/// SHA256(SHA256(x)) - the digest signatures commit to
pub fn double_sha256(data: &[u8]) -> Hash {
    let digest = sha256d::Hash::hash(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&digest[..]);
    hash
}

/// RIPEMD160(SHA256(x)) - the key hash embedded in P2PKH locking scripts
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha256_hash = Sha256::digest(data);
    let ripemd160_hash = Ripemd160::digest(sha256_hash);
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&ripemd160_hash);
    hash
}

/// Sign a 32-byte digest, producing a DER-encoded ECDSA signature.
///
/// Signing is deterministic (RFC 6979): repeated calls with the same
/// digest and key reproduce the same bytes. Tests may therefore assert
/// exact reproduction in addition to verification.
pub fn sign(digest: &Hash, secret_key: &SecretKey) -> Vec<u8> {
    let secp = Secp256k1::new();
    let message = Message::from_digest(*digest);
    secp.sign_ecdsa(&message, secret_key).serialize_der().to_vec()
}

/// Verify a DER-encoded ECDSA signature over a 32-byte digest
pub fn verify(digest: &Hash, der_signature: &[u8], public_key: &[u8]) -> bool {
    let secp = Secp256k1::new();

    let pubkey = match PublicKey::from_slice(public_key) {
        Ok(pk) => pk,
        Err(_) => return false,
    };

    let signature = match Signature::from_der(der_signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };

    let message = Message::from_digest(*digest);
    secp.verify_ecdsa(&message, &signature, &pubkey).is_ok()
}
