//! vocab-index - generate a CSV index of vocabulary JSON files
//!
//! # Examples
//!
//! ```bash
//! # Write vocabulary_index.csv in the current directory
//! vocab-index
//!
//! # Write to a custom location (parent directories are created)
//! vocab-index --output dist/index.csv
//!
//! # Show per-file detail
//! RUST_LOG=vocab_index=debug vocab-index
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vocab_index::cli::{error_hint, output, run, Cli};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "vocab_index=warn".into()),
        )
        .compact()
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        if let Some(hint) = error_hint(e.as_ref()) {
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}
