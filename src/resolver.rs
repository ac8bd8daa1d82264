//! UTXO store and previous-output resolution
//!
//! Back-references are lookup results, not ownership: the store is a
//! read-only handle consulted in an explicit pass that copies each spent
//! output (with its cached owning address, when known) into the input's
//! `previous_output` slot. Unknown outpoints leave the slot empty, which
//! the signer reports at signing time.

use crate::types::{OutPoint, Transaction, TransactionInput, TransactionOutput};
use std::collections::HashMap;

/// Local view of unspent outputs, keyed by outpoint
#[derive(Debug, Clone, Default)]
pub struct UtxoStore {
    outputs: HashMap<OutPoint, TransactionOutput>,
}

impl UtxoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, outpoint: OutPoint, output: TransactionOutput) {
        self.outputs.insert(outpoint, output);
    }

    pub fn get(&self, outpoint: &OutPoint) -> Option<&TransactionOutput> {
        self.outputs.get(outpoint)
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

fn outpoint_of(input: &TransactionInput) -> OutPoint {
    OutPoint {
        tx_reversed_hex: input.previous_output_tx_reversed_hex.clone(),
        index: input.previous_output_index,
    }
}

/// Populate every input's `previous_output` back-reference from the store.
///
/// Inputs whose outpoint is unknown to the store are left unresolved.
pub fn attach_previous_outputs(transaction: &mut Transaction, store: &UtxoStore) {
    for input in &mut transaction.inputs {
        input.previous_output = store.get(&outpoint_of(input)).cloned();
    }
}
