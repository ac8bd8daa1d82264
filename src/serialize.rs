//! Canonical wire serialization for transactions
//!
//! One layout serves two purposes: the broadcast form carried to the
//! network layer, and the signature form hashed during signing. They
//! differ only in what each input's script slot contains.

use crate::crypto::double_sha256;
use crate::error::SerializeError;
use crate::types::{ByteString, Transaction, TransactionInput, TransactionOutput};
use bitcoin_hashes::hex::{FromHex, ToHex};

/// Append a compact-size ("varint") integer
pub fn write_compact_size(buf: &mut ByteString, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Previous-output reference in wire order: txid bytes reversed from the
/// stored display hex, then the 4-byte little-endian output index.
fn write_outpoint(buf: &mut ByteString, input: &TransactionInput) -> Result<(), SerializeError> {
    let mut txid = Vec::<u8>::from_hex(&input.previous_output_tx_reversed_hex)
        .map_err(|_| SerializeError::InvalidTxHex(input.previous_output_tx_reversed_hex.clone()))?;
    if txid.len() != 32 {
        return Err(SerializeError::InvalidTxHex(
            input.previous_output_tx_reversed_hex.clone(),
        ));
    }
    txid.reverse();
    buf.extend_from_slice(&txid);
    buf.extend_from_slice(&input.previous_output_index.to_le_bytes());
    Ok(())
}

fn write_output(buf: &mut ByteString, output: &TransactionOutput) {
    buf.extend_from_slice(&output.value.to_le_bytes());
    write_compact_size(buf, output.locking_script.len() as u64);
    buf.extend_from_slice(&output.locking_script);
}

fn serialize_with_scripts<F>(tx: &Transaction, script_for: F) -> Result<ByteString, SerializeError>
where
    F: Fn(usize, &TransactionInput) -> Result<ByteString, SerializeError>,
{
    let mut buf = Vec::new();
    buf.extend_from_slice(&tx.version.to_le_bytes());

    write_compact_size(&mut buf, tx.inputs.len() as u64);
    for (i, input) in tx.inputs.iter().enumerate() {
        write_outpoint(&mut buf, input)?;
        let script = script_for(i, input)?;
        write_compact_size(&mut buf, script.len() as u64);
        buf.extend_from_slice(&script);
        buf.extend_from_slice(&input.sequence.to_le_bytes());
    }

    write_compact_size(&mut buf, tx.outputs.len() as u64);
    for output in &tx.outputs {
        write_output(&mut buf, output);
    }

    buf.extend_from_slice(&tx.lock_time.to_le_bytes());
    Ok(buf)
}

/// Broadcast serialization: every input carries its signature script
pub fn serialized(tx: &Transaction) -> Result<ByteString, SerializeError> {
    serialize_with_scripts(tx, |_, input| Ok(input.script.clone()))
}

/// Signature serialization for one input.
///
/// The input at `input_index` carries the locking script of the output it
/// spends (the script code); every other input carries an empty script.
/// Fails when the signed input's previous output has not been resolved.
pub fn serialized_for_signature(
    tx: &Transaction,
    input_index: usize,
) -> Result<ByteString, SerializeError> {
    serialize_with_scripts(tx, |i, input| {
        if i == input_index {
            let previous_output = input
                .previous_output
                .as_ref()
                .ok_or(SerializeError::MissingPreviousOutput(i))?;
            Ok(previous_output.locking_script.clone())
        } else {
            Ok(Vec::new())
        }
    })
}

/// Display txid: double-SHA256 of the broadcast form, reversed, hex-encoded
pub fn txid_reversed_hex(tx: &Transaction) -> Result<String, SerializeError> {
    let mut hash = double_sha256(&serialized(tx)?);
    hash.reverse();
    Ok(hash.to_hex())
}
