//! vocab-index - CSV index of vocabulary configuration files
//!
//! Walks a repository, reads every vocabulary JSON descriptor and
//! writes one CSV row per file summarizing its `url`, `label`,
//! `namespaceUri`, `prefix`, `format` and `comment`.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types
//!   - indexer (walking, extraction, CSV writing)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Key Features
//!
//! - Deterministic, sorted discovery
//! - Unreadable files are skipped with a warning, never fatal
//! - Output replaced atomically

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, VocabIndexError};
pub use crate::core::indexer::IndexingPipeline;
pub use crate::core::types::*;
