//! Device seed collection for the `derive` subcommand
//!
//! Seeds can arrive from repeatable `--seed` flags, from a file with one
//! seed per line, or interactively from stdin (optionally with masked
//! input). The source is resolved once up front so the derive command can
//! decide whether to print the interactive banner.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Modes for device seed delivery, checked in order
#[derive(Debug)]
pub enum SeedSource {
    /// From repeatable --seed flags (scripting)
    Args(Vec<String>),
    /// From --seeds-file /path/to/seeds (one seed per line)
    File(String),
    /// From stdin, one seed per line until an empty line or EOF.
    /// `hidden` switches to masked input so seeds never echo to the terminal.
    Stdin { hidden: bool },
}

/// Determine the seed source from CLI arguments
///
/// Returns the appropriate SeedSource based on:
/// 1. If any --seed flags were given, use Args
/// 2. If --seeds-file was given, use File
/// 3. Otherwise, use Stdin (masked when --hidden was given)
pub fn determine_seed_source(
    seeds: Vec<String>,
    seeds_file: Option<String>,
    hidden: bool,
) -> SeedSource {
    if !seeds.is_empty() {
        SeedSource::Args(seeds)
    } else if let Some(path) = seeds_file {
        SeedSource::File(path)
    } else {
        SeedSource::Stdin { hidden }
    }
}

/// Collect device seeds from the resolved source
///
/// Whitespace is trimmed from every seed and empty entries are dropped, so
/// the derivation core only ever sees non-empty seed strings. An empty
/// result is not an error here; the derivation reports it as its own
/// precondition failure.
pub fn collect_seeds(source: SeedSource) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    match source {
        SeedSource::Args(seeds) => Ok(seeds
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()),
        SeedSource::File(path) => {
            if !Path::new(&path).exists() {
                return Err(format!("Seeds file not found: {}", path).into());
            }

            let contents = fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read seeds file: {}", e))?;

            Ok(contents
                .lines()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect())
        }
        SeedSource::Stdin { hidden } => collect_seeds_interactive(hidden),
    }
}

/// Prompt for seeds one per line until an empty line or EOF
fn collect_seeds_interactive(hidden: bool) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut seeds = Vec::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let prompt = format!("Seed #{}: ", seeds.len() + 1);

        let line = if hidden {
            match rpassword::prompt_password(&prompt) {
                Ok(line) => line,
                // EOF on a closed stdin ends collection, like an empty line
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(format!("Failed to read seed from stdin: {}", e).into()),
            }
        } else {
            print!("{}", prompt);
            io::stdout().flush()?;

            match lines.next() {
                Some(line) => line.map_err(|e| format!("Failed to read seed from stdin: {}", e))?,
                None => break,
            }
        };

        let seed = line.trim();
        if seed.is_empty() {
            break;
        }

        seeds.push(seed.to_string());
    }

    Ok(seeds)
}
