//! Property-based tests for master seed derivation
//!
//! Tests for:
//! - Order independence: any permutation of the same multiset derives the
//!   same master seed
//! - Shape: every successful derivation is 128 lowercase hex characters
//! - Duplicate sensitivity: appending a duplicate changes the result
//!
//! The case counts are kept low because each derivation runs 100,000 PBKDF2
//! iterations.

use super::derive_master_seed;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Property test: Order independence
    /// Reversing or rotating a non-empty seed list never changes the result.
    #[test]
    fn prop_order_independence(
        seeds in prop::collection::vec("[a-z0-9]{1,12}", 1..5),
        rotation in 0usize..4,
    ) {
        let mut reversed = seeds.clone();
        reversed.reverse();
        let mut rotated = seeds.clone();
        let len = rotated.len();
        rotated.rotate_left(rotation % len);

        let original = derive_master_seed(&seeds).unwrap();
        let backward = derive_master_seed(&reversed).unwrap();
        let shifted = derive_master_seed(&rotated).unwrap();
        prop_assert_eq!(&original, &backward, "Reversed input changed the master seed");
        prop_assert_eq!(&original, &shifted, "Rotated input changed the master seed");
    }

    /// Property test: Shape
    /// Every successful derivation is a 128-character lowercase hex string.
    #[test]
    fn prop_output_is_lowercase_hex(
        seeds in prop::collection::vec("[ -~]{0,24}", 1..4),
    ) {
        let seed = derive_master_seed(&seeds).unwrap();
        prop_assert_eq!(seed.as_str().len(), 128);
        prop_assert!(
            seed.as_str().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
            "Non-hex or uppercase character in master seed"
        );
    }

    /// Property test: Duplicate sensitivity
    /// Appending a copy of an existing non-empty seed changes the result.
    #[test]
    fn prop_duplicates_change_result(
        seeds in prop::collection::vec("[a-z]{1,8}", 1..4),
    ) {
        let mut with_duplicate = seeds.clone();
        with_duplicate.push(seeds[0].clone());

        let original = derive_master_seed(&seeds).unwrap();
        let duplicated = derive_master_seed(&with_duplicate).unwrap();
        prop_assert_ne!(original, duplicated, "Duplicate seed did not change the result");
    }
}
