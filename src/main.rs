use clap::Parser;
use master_seed::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays clean for the derived seed
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
