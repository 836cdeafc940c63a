//! Configuration management for vocab-index.
//!
//! This module handles loading configuration from a TOML file and
//! environment variables, with defaults matching the fixed behavior
//! of the index generator.

use crate::core::error::{Result, VocabIndexError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "vocab-index.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Repository root to scan; record ids are relative to it
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File name pattern for vocabulary files (glob syntax)
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Directory names excluded anywhere in a path
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Index path used when `--output` is not given
    #[serde(default = "default_output_path")]
    pub default_path: PathBuf,
}

// Default value functions
fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_pattern() -> String {
    "*.json".to_string()
}

/// Version control, CI and virtual environment directories
pub fn default_exclude_dirs() -> Vec<String> {
    vec![
        ".git".to_string(),
        ".github".to_string(),
        ".venv".to_string(),
        "venv".to_string(),
    ]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("vocabulary_index.csv")
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            pattern: default_pattern(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_path: default_output_path(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| VocabIndexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. VOCAB_INDEX_CONFIG env var
    /// 2. ./vocab-index.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("VOCAB_INDEX_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new(CONFIG_FILE_NAME).exists() {
            Self::from_file(CONFIG_FILE_NAME)?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("VOCAB_INDEX_ROOT") {
            if !root.is_empty() {
                self.indexing.root = PathBuf::from(root);
            }
        }
        if let Ok(output) = env::var("VOCAB_INDEX_OUTPUT") {
            if !output.is_empty() {
                self.output.default_path = PathBuf::from(output);
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.pattern.is_empty() {
            return Err(VocabIndexError::ConfigError(
                "File pattern must not be empty".to_string(),
            ));
        }

        if let Err(e) = glob::Pattern::new(&self.indexing.pattern) {
            return Err(VocabIndexError::ConfigError(format!(
                "Invalid file pattern '{}': {e}",
                self.indexing.pattern
            )));
        }

        if self.indexing.exclude_dirs.iter().any(|d| d.is_empty()) {
            return Err(VocabIndexError::ConfigError(
                "Excluded directory names must not be empty".to_string(),
            ));
        }

        if self.output.default_path.as_os_str().is_empty() {
            return Err(VocabIndexError::ConfigError(
                "Default output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Root: {:?}", self.indexing.root);
        tracing::debug!("  Pattern: {}", self.indexing.pattern);
        tracing::debug!("  Excluded dirs: {:?}", self.indexing.exclude_dirs);
        tracing::debug!("  Default output: {:?}", self.output.default_path);
    }
}
