//! Vocabulary indexing module.
//!
//! Discovers vocabulary JSON files, projects their metadata into
//! records and writes the CSV index. Key features:
//!
//! - Sorted, deterministic discovery with excluded directory names
//! - Per-file skip-and-warn extraction
//! - Atomic replacement of the output file

pub mod extractor;
pub mod pipeline;
pub mod walker;
pub mod writer;

pub use extractor::extract;
pub use pipeline::IndexingPipeline;
pub use walker::FileWalker;
pub use writer::write_index;
