//! Error types and error handling for vocab-index.
//!
//! Only environment failures are errors. A vocabulary file that cannot be
//! read or parsed is reported as an [`ExtractFailure`] value and never
//! surfaces here.
//!
//! [`ExtractFailure`]: crate::core::types::ExtractFailure

use thiserror::Error;

/// Result type alias for vocab-index operations
pub type Result<T> = std::result::Result<T, VocabIndexError>;

/// Main error type for vocab-index
#[derive(Error, Debug)]
pub enum VocabIndexError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to replace output file: {0}")]
    PersistError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl VocabIndexError {
    /// Check if this error was caused by user-supplied settings
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            VocabIndexError::ConfigError(_) | VocabIndexError::TomlError(_)
        )
    }
}

impl From<tempfile::PersistError> for VocabIndexError {
    fn from(err: tempfile::PersistError) -> Self {
        VocabIndexError::PersistError(err.error.to_string())
    }
}
