//! CLI adapter for vocab-index
//!
//! Parses the command line, loads configuration and runs the index
//! generator. All printing happens here; `core/` only logs.
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |      core/       |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod generate;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::{Config, CONFIG_FILE_NAME};
use crate::core::error::VocabIndexError;

/// vocab-index - Vocabulary configuration indexer
///
/// Generate a CSV index of all vocabulary JSON configuration files.
#[derive(Parser, Debug, Default)]
#[command(name = "vocab-index")]
#[command(version)]
#[command(
    about = "Generate a CSV index of all vocabulary JSON configuration files.",
    long_about = None
)]
pub struct Cli {
    /// Output CSV file path (default: vocabulary_index.csv in current directory)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Output path from the command line, falling back to the config
    pub fn output_path(&self, config: &Config) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| config.output.default_path.clone())
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    config.log_config();

    run_with_config(cli, &config)
}

/// Run the CLI against an already loaded configuration
pub fn run_with_config(cli: Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let output = cli.output_path(config);
    generate::execute(&output, config)?;
    Ok(())
}

/// Follow-up hint for errors caused by configuration
pub fn error_hint(err: &(dyn std::error::Error + 'static)) -> Option<String> {
    err.downcast_ref::<VocabIndexError>()
        .filter(|e| e.is_config())
        .map(|_| {
            format!(
                "Check {CONFIG_FILE_NAME} (or the file named by VOCAB_INDEX_CONFIG) \
                 and the VOCAB_INDEX_* environment variables."
            )
        })
}
