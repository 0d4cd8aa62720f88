//! Derive the master seed from collected device seeds
//!
//! This command is the interactive surface over the pure derivation core.
//! It collects seeds (flags, file, or stdin), runs the derivation, and
//! prints the master seed with its display metadata. With `--json` the same
//! fields are emitted as a single JSON object for scripting.
//!
//! Seed values are never logged; only counts are.

use super::input::{collect_seeds, determine_seed_source, SeedSource};
use crate::crypto::derive_master_seed;
use serde::Serialize;
use tracing::debug;

/// Machine-readable derivation result for --json output
#[derive(Debug, Serialize)]
struct DeriveOutput {
    master_seed: String,
    length: usize,
    bits: usize,
    fingerprint: String,
}

pub fn execute(
    seeds: Vec<String>,
    seeds_file: Option<String>,
    hidden: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = determine_seed_source(seeds, seeds_file, hidden);
    let interactive = matches!(source, SeedSource::Stdin { .. });

    if interactive {
        println!("=== Master Seed Generator ===");
        println!();
        println!("Enter device seeds, one per line.");
        println!("Leave a line empty and press Enter to finish.");
        println!();
    }

    let seeds = collect_seeds(source)?;
    debug!(count = seeds.len(), "collected device seeds");

    if interactive {
        println!();
        println!("✓ Seeds received: {}", seeds.len());
        println!();
    }

    let master = derive_master_seed(&seeds)?;

    if json {
        let output = DeriveOutput {
            master_seed: master.as_str().to_string(),
            length: master.as_str().len(),
            bits: master.bit_length(),
            fingerprint: master.fingerprint(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Master seed (deterministic):");
    println!("{}", master);
    println!();
    println!(
        "Length: {} characters ({} bits of entropy)",
        master.as_str().len(),
        master.bit_length()
    );
    println!("Fingerprint: {}...", master.fingerprint());

    if interactive {
        println!();
        println!("✓ Master seed generated successfully!");
        println!();
        println!("Note: identical input seeds always produce");
        println!("the identical master seed.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_with_seed_flags() {
        let result = execute(
            vec!["alpha".to_string(), "beta".to_string()],
            None,
            false,
            false,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_with_json_output() {
        let result = execute(vec!["alpha".to_string()], None, false, true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_without_seeds_fails() {
        // All --seed values blank: collection yields nothing and the
        // derivation precondition fails.
        let result = execute(vec!["   ".to_string()], None, false, false);
        assert!(result.is_err(), "Derivation without seeds must fail");
    }
}
