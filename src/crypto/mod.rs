/// Cryptographic core for deterministic master seed derivation
///
/// This module implements:
/// - Sorted-multiset master seed derivation (PBKDF2-HMAC-SHA512 + SHA-512)
/// - Short display fingerprints for human verification
pub mod master_seed;

#[cfg(test)]
mod proptests;

pub use master_seed::{derive_master_seed, DeriveError, MasterSeed};
