//! Locking-script recognition and script assembly
//!
//! This engine builds and classifies scripts; it does not execute them.

use crate::types::{ByteString, ScriptType};

const OP_0: u8 = 0x00;
const OP_PUSHDATA1: u8 = 0x4c;
const OP_DUP: u8 = 0x76;
const OP_EQUAL: u8 = 0x87;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_HASH160: u8 = 0xa9;
const OP_CHECKSIG: u8 = 0xac;

/// Classify a locking script and extract the embedded key or script hash.
///
/// Returns `(ScriptType::Unknown, empty)` for every shape outside the
/// closed set of recognized single-signature templates.
pub fn parse_locking_script(script: &[u8]) -> (ScriptType, ByteString) {
    match script {
        // OP_DUP OP_HASH160 <20-byte key hash> OP_EQUALVERIFY OP_CHECKSIG
        [OP_DUP, OP_HASH160, 0x14, hash @ .., OP_EQUALVERIFY, OP_CHECKSIG]
            if hash.len() == 20 =>
        {
            (ScriptType::P2pkh, hash.to_vec())
        }
        // OP_HASH160 <20-byte script hash> OP_EQUAL
        [OP_HASH160, 0x14, hash @ .., OP_EQUAL] if hash.len() == 20 => {
            (ScriptType::P2sh, hash.to_vec())
        }
        // OP_0 <20-byte key hash>
        [OP_0, 0x14, hash @ ..] if hash.len() == 20 => (ScriptType::P2wpkh, hash.to_vec()),
        // OP_0 <32-byte script hash>
        [OP_0, 0x20, hash @ ..] if hash.len() == 32 => (ScriptType::P2wsh, hash.to_vec()),
        // <33- or 65-byte public key> OP_CHECKSIG
        [0x21, key @ .., OP_CHECKSIG] if key.len() == 33 => (ScriptType::P2pk, key.to_vec()),
        [0x41, key @ .., OP_CHECKSIG] if key.len() == 65 => (ScriptType::P2pk, key.to_vec()),
        _ => (ScriptType::Unknown, Vec::new()),
    }
}

/// Standard P2PKH locking script for a 20-byte key hash
pub fn p2pkh_locking_script(key_hash: &[u8]) -> ByteString {
    let mut script = Vec::with_capacity(25);
    script.push(OP_DUP);
    script.push(OP_HASH160);
    script.push(key_hash.len() as u8);
    script.extend_from_slice(key_hash);
    script.push(OP_EQUALVERIFY);
    script.push(OP_CHECKSIG);
    script
}

/// Assemble a signature script from the signer's stack elements.
///
/// Each element becomes one minimal data push; for the supported script
/// types the stack is `[signature + sighash byte, public key]` and both
/// fit in direct pushes, but OP_PUSHDATA1 is emitted for longer elements.
pub fn unlocking_script(stack: &[ByteString]) -> ByteString {
    let mut script = Vec::new();
    for element in stack {
        if element.len() < OP_PUSHDATA1 as usize {
            script.push(element.len() as u8);
        } else {
            script.push(OP_PUSHDATA1);
            script.push(element.len() as u8);
        }
        script.extend_from_slice(element);
    }
    script
}
