//! Protocol constants used by the signing engine

/// Sighash type committing to all inputs and outputs ("sign-all").
///
/// The only policy this engine supports: serialized little-endian into
/// the signature preimage and appended as a single trailing byte to each
/// produced signature.
pub const SIGHASH_ALL: u32 = 1;

/// Sequence number marking an input as final
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Maximum money supply: 21,000,000 coins in smallest units
///
/// Upper bound on output values; enforced by the calling policy layer,
/// not by entity construction.
pub const MAX_MONEY: i64 = 21_000_000 * 100_000_000;
