//! # tx-engine
//!
//! UTXO transaction construction and per-input signing for an HD wallet.
//!
//! The crate assembles raw transactions from previously selected unspent
//! outputs and new outputs, then produces, for each input, the
//! signature-script stack needed to spend the referenced output, using a
//! private key derived from the owning address's derivation path.
//!
//! ## Architecture
//!
//! - [`Factory`] constructs validated entities (blocks, transactions,
//!   inputs, outputs); all construction paths go through it.
//! - [`resolver`] attaches previous-output back-references from a local
//!   [`UtxoStore`]; back-references are lookup results, not ownership.
//! - [`InputSigner`] turns `(transaction, input index)` into the
//!   two-element unlocking stack `[signature + sighash byte, public key]`,
//!   deriving the key through a [`KeyProvider`].
//! - [`serialize`] provides the canonical wire form used both for
//!   broadcast and for signature-hash computation.
//!
//! UTXO selection, fee estimation, address parsing and broadcast are
//! external collaborators; this crate neither performs network I/O nor
//! holds global state.
//!
//! ## Design principles
//!
//! 1. **Pure functions**: signing is a stateless function of explicit
//!    parameters, so per-input calls can run concurrently without locks.
//! 2. **Fail fast, no partial success**: a signing call returns a
//!    complete stack or exactly one typed error; construction errors
//!    surface before any signing is attempted.
//! 3. **Deterministic signing**: ECDSA signatures are RFC 6979
//!    deterministic, documented on [`crypto::sign`].
//!
//! ## Usage
//!
//! ```rust
//! use tx_engine::{
//!     attach_previous_outputs, script, Address, Chain, Factory, InputSigner, OutPoint,
//!     ScriptType, SeedKeyProvider, UtxoStore,
//! };
//!
//! let factory = Factory::new();
//! let provider = SeedKeyProvider::new(b"example wallet seed".to_vec());
//!
//! // The spent output, as the local UTXO store knows it.
//! let key_hash = provider.key_hash(0, Chain::External).unwrap();
//! let mut spent = factory
//!     .transaction_output(
//!         100_000,
//!         0,
//!         script::p2pkh_locking_script(&key_hash),
//!         ScriptType::P2pkh,
//!         key_hash.to_vec(),
//!     )
//!     .unwrap();
//! spent.address = Some(Address {
//!     public_key: Some(provider.public_key(0, Chain::External).unwrap()),
//!     index: 0,
//!     external: true,
//! });
//!
//! let mut store = UtxoStore::new();
//! store.insert(
//!     OutPoint { tx_reversed_hex: "11".repeat(32), index: 0 },
//!     spent,
//! );
//!
//! // Build, resolve, sign, assemble.
//! let input = factory.transaction_input("11".repeat(32), 0, vec![], 0xffffffff);
//! let output = factory
//!     .transaction_output(99_000, 0, vec![0x51], ScriptType::Unknown, vec![])
//!     .unwrap();
//! let mut tx = factory.transaction(1, vec![input], vec![output], 0);
//! attach_previous_outputs(&mut tx, &store);
//!
//! let signer = InputSigner::new(provider);
//! let stack = signer.sig_script_data(&tx, 0).unwrap();
//! assert_eq!(stack.len(), 2);
//! tx.inputs[0].script = script::unlocking_script(&stack);
//! ```

pub mod constants;
pub mod crypto;
pub mod error;
pub mod factory;
pub mod hd;
pub mod resolver;
pub mod script;
pub mod serialize;
pub mod signer;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use error::{FactoryError, KeyDerivationError, SerializeError, SignError};
pub use factory::Factory;
pub use hd::{KeyProvider, SeedKeyProvider};
pub use resolver::{attach_previous_outputs, UtxoStore};
pub use signer::InputSigner;
pub use types::*;
