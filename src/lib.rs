//! Master Seed - Deterministic Seed Derivation Tool
//!
//! Derives a single master seed from an unordered collection of device
//! seed strings. The same multiset of inputs always yields the same output,
//! regardless of input order.
//!
//! Key principles:
//! - NO persistence (result is printed, never stored)
//! - NO network I/O
//! - NO randomness (determinism is the entire point)
//! - Fixed protocol constants (salt, iterations, digest lengths)

pub mod cli;
pub mod crypto;

pub use crypto::{derive_master_seed, DeriveError, MasterSeed};
