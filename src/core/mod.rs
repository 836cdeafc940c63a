//! Core domain logic
//!
//! This module contains everything that is independent of the
//! command-line surface.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Records, failures and statistics
//! - **indexer**: File walking, extraction and CSV writing

pub mod config;
pub mod error;
pub mod indexer;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, VocabIndexError};
pub use indexer::IndexingPipeline;
