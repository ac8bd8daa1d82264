//! Entity Factory
//!
//! Every entity is constructed here, so structural invariants cannot be
//! bypassed by ad-hoc instantiation. All operations are pure; the only
//! fallible one is `transaction_output`, which rejects negative values.
//! The output index is typed `u32`, so a negative index is
//! unrepresentable rather than checked.

use crate::error::FactoryError;
use crate::types::{
    Block, BlockHeader, ByteString, ScriptType, Transaction, TransactionInput, TransactionOutput,
};

pub struct Factory;

impl Factory {
    pub fn new() -> Self {
        Self
    }

    /// Link a new block to its predecessor; height continuity beyond
    /// `previous.height + 1` is the caller's responsibility.
    pub fn block_with_previous(&self, header: BlockHeader, previous: &Block) -> Block {
        Block {
            header,
            height: previous.height + 1,
        }
    }

    /// Construct a checkpoint-anchored block at an explicit height
    pub fn block_at_height(&self, header: BlockHeader, height: i32) -> Block {
        Block { header, height }
    }

    /// Pure aggregation; preserves input/output order exactly as supplied
    /// and does not enforce non-emptiness (calling-layer policy).
    pub fn transaction(
        &self,
        version: i32,
        inputs: Vec<TransactionInput>,
        outputs: Vec<TransactionOutput>,
        lock_time: u32,
    ) -> Transaction {
        Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        }
    }

    /// Construct an input; the previous-output back-reference starts
    /// unresolved and is populated later by the resolver pass.
    pub fn transaction_input(
        &self,
        previous_output_tx_reversed_hex: impl Into<String>,
        previous_output_index: u32,
        script: ByteString,
        sequence: u32,
    ) -> TransactionInput {
        TransactionInput {
            previous_output_tx_reversed_hex: previous_output_tx_reversed_hex.into(),
            previous_output_index,
            script,
            sequence,
            previous_output: None,
        }
    }

    /// Construct an output; fails with `InvalidOutput` on a negative value
    pub fn transaction_output(
        &self,
        value: i64,
        index: u32,
        locking_script: ByteString,
        script_type: ScriptType,
        key_hash: ByteString,
    ) -> Result<TransactionOutput, FactoryError> {
        if value < 0 {
            return Err(FactoryError::InvalidOutput(value));
        }
        Ok(TransactionOutput {
            value,
            index,
            locking_script,
            script_type,
            key_hash,
            address: None,
        })
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}
