use clap::{Parser, Subcommand};

pub mod derive;
pub mod input;
pub mod version;

#[derive(Parser)]
#[command(name = "master-seed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Derive a deterministic master seed from device seeds", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the master seed from a collection of device seeds
    Derive {
        /// Device seed passed on the command line (repeatable)
        #[arg(long = "seed", value_name = "SEED")]
        seeds: Vec<String>,

        /// Path to a file with one device seed per line
        #[arg(long)]
        seeds_file: Option<String>,

        /// Prompt for seeds interactively with masked input
        #[arg(long)]
        hidden: bool,

        /// Print the result as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

pub fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Derive {
            seeds,
            seeds_file,
            hidden,
            json,
        } => derive::execute(seeds, seeds_file, hidden, json),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
