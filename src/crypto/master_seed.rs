//! Deterministic master seed derivation from device seeds
//!
//! This module centralizes the only non-trivial logic in the tool: turning an
//! unordered collection of device seed strings into a single reproducible
//! master seed.
//!
//! ## Derivation Pipeline
//!
//! ```text
//! device seeds (any order)
//!         │
//!         ▼
//! sort (byte-wise lexicographic, ascending)
//!         │
//!         ▼
//! concatenate (no separator) → combined
//!         │
//!         ▼
//! PBKDF2-HMAC-SHA512(combined, salt="master-seed-salt-v1", 100_000 iters) → 64 bytes
//!         │
//!         ▼
//! SHA-512(derived_key) → 64 bytes
//!         │
//!         ▼
//! lowercase hex → MasterSeed (128 chars)
//! ```
//!
//! ## Security Properties
//!
//! - **Order independence**: Sorting before concatenation makes the result a
//!   pure function of the input multiset, not the input sequence.
//! - **Duplicate sensitivity**: Duplicates are preserved by the sort, so
//!   `["x"]` and `["x", "x"]` derive different master seeds.
//! - **Determinism**: No randomness, no time-dependence. Identical inputs
//!   always produce byte-for-byte identical output.
//! - **Zeroization**: The concatenated seed material and the intermediate
//!   PBKDF2 output are cleared from memory after use.
//!
//! ## Compatibility
//!
//! The salt literal, iteration count, and digest lengths are fixed protocol
//! constants. Changing any of them (or adding a separator to the
//! concatenation) changes every derived master seed, so they must never be
//! altered.
//!
//! Known property of the no-separator concatenation: distinct input multisets
//! can concatenate to the same combined string (`["ab", "c"]` and
//! `["a", "bc"]` both yield `"abc"`). This is accepted, documented behavior.

use std::fmt;
use std::num::NonZeroU32;

use ring::pbkdf2;
use sha2::{Digest, Sha512};
use thiserror::Error;
use zeroize::Zeroizing;

/// Fixed salt for PBKDF2 (versioned protocol constant, never rotate in place)
const DERIVATION_SALT: &[u8] = b"master-seed-salt-v1";

/// PBKDF2 iteration count (~100ms per derivation on commodity hardware)
const PBKDF2_ITERATIONS: u32 = 100_000;

/// PBKDF2 output length in bytes (512 bits)
const DERIVED_KEY_LEN: usize = 64;

/// Length of the short display fingerprint in hex characters
const FINGERPRINT_LEN: usize = 16;

/// Errors that can occur during master seed derivation
#[derive(Debug, Error)]
pub enum DeriveError {
    /// No device seeds were provided
    #[error("at least one device seed is required")]
    EmptyInput,
}

/// A derived master seed: 128 lowercase hex characters (512-bit digest).
///
/// Construct via [`derive_master_seed`]. The inner string is immutable once
/// produced and is only ever the hex encoding of the final SHA-512 digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterSeed(String);

impl MasterSeed {
    /// The master seed as a lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Implied entropy length in bits (hex character count × 4).
    pub fn bit_length(&self) -> usize {
        self.0.len() * 4
    }

    /// Short display fingerprint: the first 16 hex characters of
    /// SHA-512 over the ASCII bytes of the hex string.
    ///
    /// Informational only, for human verification. Never use it as an
    /// identity key.
    pub fn fingerprint(&self) -> String {
        let digest = Sha512::digest(self.0.as_bytes());
        hex::encode(digest)[..FINGERPRINT_LEN].to_string()
    }
}

impl fmt::Display for MasterSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the deterministic master seed from a collection of device seeds.
///
/// The input order does not matter: the seeds are sorted byte-wise before
/// concatenation, so any permutation of the same multiset derives the same
/// master seed. Duplicates are preserved and change the result.
///
/// # Arguments
///
/// * `seeds` - Device seed strings. Must contain at least one element.
///   Individual elements are opaque; no per-element format is enforced.
///
/// # Returns
///
/// * `Ok(MasterSeed)` - The 128-char lowercase hex master seed
/// * `Err(DeriveError::EmptyInput)` - If `seeds` is empty
///
/// # Security
///
/// - Pure function: no I/O, no randomness, no observable side effects
/// - Intermediate secret material is zeroized before returning
/// - Safe to call concurrently from multiple threads (no shared state)
pub fn derive_master_seed<S: AsRef<str>>(seeds: &[S]) -> Result<MasterSeed, DeriveError> {
    if seeds.is_empty() {
        return Err(DeriveError::EmptyInput);
    }

    // Sort a copy so the result is independent of input order
    let mut sorted: Vec<&str> = seeds.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    // Concatenate with no separator (fixed protocol behavior, see module docs)
    let combined = Zeroizing::new(sorted.concat());

    let iterations =
        NonZeroU32::new(PBKDF2_ITERATIONS).expect("iteration count constant is non-zero");

    let mut derived_key = Zeroizing::new([0u8; DERIVED_KEY_LEN]);
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA512,
        iterations,
        DERIVATION_SALT,
        combined.as_bytes(),
        &mut derived_key[..],
    );

    // Final hash pass for additional diffusion
    let final_digest = Sha512::digest(&derived_key[..]);

    Ok(MasterSeed(hex::encode(final_digest)))
}
