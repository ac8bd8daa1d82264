//! End-to-end signing tests: build, resolve, sign, verify

use anyhow::Result;
use tx_engine::{
    attach_previous_outputs, crypto, script, serialize, Address, Chain, Factory, InputSigner,
    OutPoint, ScriptType, SeedKeyProvider, SignError, Transaction, UtxoStore, SEQUENCE_FINAL,
    SIGHASH_ALL,
};

const PREV_TXID_A: &str = "f1ba8f3b01b1a73164b8b059c0a1f10dee09b8c2c1fcb49821b2e9275729ba3d";
const PREV_TXID_B: &str = "9546a0b122c6e0e3e1dbb7358ba8cba9793c04beaed2cbcc4ccbb47e37e1d1ec";

fn provider() -> SeedKeyProvider {
    SeedKeyProvider::new(b"integration test seed".to_vec())
}

fn owned_p2pkh_output(
    factory: &Factory,
    p: &SeedKeyProvider,
    value: i64,
    index: u32,
    hd_index: u32,
    chain: Chain,
) -> Result<tx_engine::TransactionOutput> {
    let key_hash = p.key_hash(hd_index, chain)?;
    let mut output = factory.transaction_output(
        value,
        index,
        script::p2pkh_locking_script(&key_hash),
        ScriptType::P2pkh,
        key_hash.to_vec(),
    )?;
    output.address = Some(Address {
        public_key: Some(p.public_key(hd_index, chain)?),
        index: hd_index,
        external: chain == Chain::External,
    });
    Ok(output)
}

fn recompute_sighash(tx: &Transaction, index: usize) -> Result<[u8; 32]> {
    let mut preimage = serialize::serialized_for_signature(tx, index)?;
    preimage.extend_from_slice(&SIGHASH_ALL.to_le_bytes());
    Ok(crypto::double_sha256(&preimage))
}

/// The reference scenario: 1 input spending 100000 units controlled by HD
/// index 0 on the external chain, 1 output of 99000 to an arbitrary
/// locking script, version 1, lock time 0.
#[test]
fn test_single_input_end_to_end() -> Result<()> {
    let factory = Factory::new();
    let p = provider();

    let spent = owned_p2pkh_output(&factory, &p, 100_000, 0, 0, Chain::External)?;
    let mut store = UtxoStore::new();
    store.insert(
        OutPoint {
            tx_reversed_hex: PREV_TXID_A.to_string(),
            index: 0,
        },
        spent,
    );

    let input = factory.transaction_input(PREV_TXID_A, 0, vec![], SEQUENCE_FINAL);
    let output = factory.transaction_output(99_000, 0, vec![0x51, 0x52], ScriptType::Unknown, vec![])?;
    let mut tx = factory.transaction(1, vec![input], vec![output], 0);
    attach_previous_outputs(&mut tx, &store);

    let signer = InputSigner::new(provider());
    let stack = signer.sig_script_data(&tx, 0)?;

    // Exactly two elements, [signature, public key] in that order.
    assert_eq!(stack.len(), 2);
    assert_eq!(stack[1], p.public_key(0, Chain::External)?);

    // First element ends with the sighash byte and strips to valid DER.
    let signature = &stack[0];
    assert_eq!(*signature.last().unwrap(), 0x01);
    let der = &signature[..signature.len() - 1];
    assert!(secp256k1::ecdsa::Signature::from_der(der).is_ok());

    // The signature verifies against the recomputed sighash.
    let sighash = recompute_sighash(&tx, 0)?;
    assert!(crypto::verify(&sighash, der, &stack[1]));

    // Assembled transaction serializes for broadcast.
    tx.inputs[0].script = script::unlocking_script(&stack);
    let raw = serialize::serialized(&tx)?;
    assert!(raw.len() > 100);
    assert_eq!(serialize::txid_reversed_hex(&tx)?.len(), 64);
    Ok(())
}

/// Signing input 0 and input 1 of a 2-input transaction yields two
/// independently valid signatures, each verifying only against its own
/// input's signature hash.
#[test]
fn test_two_inputs_sign_independently() -> Result<()> {
    let factory = Factory::new();
    let p = provider();

    let mut store = UtxoStore::new();
    store.insert(
        OutPoint {
            tx_reversed_hex: PREV_TXID_A.to_string(),
            index: 0,
        },
        owned_p2pkh_output(&factory, &p, 100_000, 0, 0, Chain::External)?,
    );
    store.insert(
        OutPoint {
            tx_reversed_hex: PREV_TXID_B.to_string(),
            index: 1,
        },
        owned_p2pkh_output(&factory, &p, 50_000, 1, 1, Chain::Internal)?,
    );

    let inputs = vec![
        factory.transaction_input(PREV_TXID_A, 0, vec![], SEQUENCE_FINAL),
        factory.transaction_input(PREV_TXID_B, 1, vec![], SEQUENCE_FINAL),
    ];
    let output = factory.transaction_output(140_000, 0, vec![0x51], ScriptType::Unknown, vec![])?;
    let mut tx = factory.transaction(1, inputs, vec![output], 0);
    attach_previous_outputs(&mut tx, &store);

    let signer = InputSigner::new(provider());
    let stack0 = signer.sig_script_data(&tx, 0)?;
    let stack1 = signer.sig_script_data(&tx, 1)?;

    let sighash0 = recompute_sighash(&tx, 0)?;
    let sighash1 = recompute_sighash(&tx, 1)?;
    assert_ne!(sighash0, sighash1);

    let der0 = &stack0[0][..stack0[0].len() - 1];
    let der1 = &stack1[0][..stack1[0].len() - 1];

    // Each signature verifies against its own sighash and key only.
    assert!(crypto::verify(&sighash0, der0, &stack0[1]));
    assert!(crypto::verify(&sighash1, der1, &stack1[1]));
    assert!(!crypto::verify(&sighash1, der0, &stack0[1]));
    assert!(!crypto::verify(&sighash0, der1, &stack1[1]));
    Ok(())
}

/// Writing input 0's unlocking script does not disturb input 1's sighash:
/// signature serialization blanks every non-signed input's script.
#[test]
fn test_attached_script_does_not_change_other_sighash() -> Result<()> {
    let factory = Factory::new();
    let p = provider();

    let mut store = UtxoStore::new();
    store.insert(
        OutPoint {
            tx_reversed_hex: PREV_TXID_A.to_string(),
            index: 0,
        },
        owned_p2pkh_output(&factory, &p, 100_000, 0, 0, Chain::External)?,
    );
    store.insert(
        OutPoint {
            tx_reversed_hex: PREV_TXID_B.to_string(),
            index: 0,
        },
        owned_p2pkh_output(&factory, &p, 50_000, 0, 1, Chain::External)?,
    );

    let inputs = vec![
        factory.transaction_input(PREV_TXID_A, 0, vec![], SEQUENCE_FINAL),
        factory.transaction_input(PREV_TXID_B, 0, vec![], SEQUENCE_FINAL),
    ];
    let output = factory.transaction_output(140_000, 0, vec![0x51], ScriptType::Unknown, vec![])?;
    let mut tx = factory.transaction(1, inputs, vec![output], 0);
    attach_previous_outputs(&mut tx, &store);

    let sighash1_before = recompute_sighash(&tx, 1)?;

    let signer = InputSigner::new(provider());
    let stack0 = signer.sig_script_data(&tx, 0)?;
    tx.inputs[0].script = script::unlocking_script(&stack0);

    assert_eq!(recompute_sighash(&tx, 1)?, sighash1_before);
    Ok(())
}

/// Each signing failure is independently triggerable by a minimal fixture.
#[test]
fn test_error_paths() -> Result<()> {
    let factory = Factory::new();
    let p = provider();
    let signer = InputSigner::new(provider());

    // Unresolved previous output: outpoint unknown to the store.
    let input = factory.transaction_input(PREV_TXID_A, 0, vec![], SEQUENCE_FINAL);
    let mut tx = factory.transaction(1, vec![input], vec![], 0);
    attach_previous_outputs(&mut tx, &UtxoStore::new());
    assert_eq!(
        signer.sig_script_data(&tx, 0),
        Err(SignError::NoPreviousOutput(0))
    );

    // Resolved output without an owning address (unrecognized script).
    let orphan = factory.transaction_output(100_000, 0, vec![0x6a], ScriptType::Unknown, vec![])?;
    tx.inputs[0].previous_output = Some(orphan);
    assert_eq!(
        signer.sig_script_data(&tx, 0),
        Err(SignError::NoPreviousOutputAddress(0))
    );

    // Address without a public key.
    let mut keyless = owned_p2pkh_output(&factory, &p, 100_000, 0, 0, Chain::External)?;
    keyless.address.as_mut().unwrap().public_key = None;
    tx.inputs[0].previous_output = Some(keyless);
    assert_eq!(
        signer.sig_script_data(&tx, 0),
        Err(SignError::NoPublicKeyInAddress)
    );

    // Index out of range.
    assert_eq!(
        signer.sig_script_data(&tx, 5),
        Err(SignError::IndexOutOfRange(5))
    );
    Ok(())
}

/// Abort-all policy: a failure on any input leaves the caller with an
/// unsigned transaction rather than a partially signed one.
#[test]
fn test_partial_failure_aborts_whole_transaction() -> Result<()> {
    let factory = Factory::new();
    let p = provider();

    let mut store = UtxoStore::new();
    store.insert(
        OutPoint {
            tx_reversed_hex: PREV_TXID_A.to_string(),
            index: 0,
        },
        owned_p2pkh_output(&factory, &p, 100_000, 0, 0, Chain::External)?,
    );
    // PREV_TXID_B deliberately missing from the store.

    let inputs = vec![
        factory.transaction_input(PREV_TXID_A, 0, vec![], SEQUENCE_FINAL),
        factory.transaction_input(PREV_TXID_B, 0, vec![], SEQUENCE_FINAL),
    ];
    let output = factory.transaction_output(90_000, 0, vec![0x51], ScriptType::Unknown, vec![])?;
    let mut tx = factory.transaction(1, inputs, vec![output], 0);
    attach_previous_outputs(&mut tx, &store);

    let signer = InputSigner::new(provider());
    let results: Vec<_> = (0..tx.inputs.len())
        .map(|i| signer.sig_script_data(&tx, i))
        .collect();

    assert!(results[0].is_ok());
    assert_eq!(results[1], Err(SignError::NoPreviousOutput(1)));

    // Caller applies abort-all: no script is written back.
    if results.iter().any(|r| r.is_err()) {
        assert!(tx.inputs.iter().all(|input| input.script.is_empty()));
    }
    Ok(())
}
