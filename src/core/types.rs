//! Core data types for vocab-index.
//!
//! Defines the record projected from each vocabulary file, the
//! per-file failure value and the statistics of one indexing pass.

use serde::Serialize;
use std::path::PathBuf;

/// CSV column headers, in output order
pub const CSV_HEADERS: [&str; 9] = [
    "id",
    "filename",
    "url",
    "label",
    "namespaceUri",
    "prefix",
    "format",
    "comment",
    "last_modified",
];

/// One row of the vocabulary index
///
/// Field order matches [`CSV_HEADERS`]; the CSV writer serializes
/// fields positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VocabularyRecord {
    /// Path relative to the repository root, extension stripped,
    /// `/`-separated
    pub id: String,

    /// Base name including extension
    pub filename: String,

    pub url: String,
    pub label: String,

    #[serde(rename = "namespaceUri")]
    pub namespace_uri: String,

    pub prefix: String,
    pub format: String,
    pub comment: String,

    /// File modification time (RFC 3339, UTC)
    pub last_modified: String,
}

/// A vocabulary file that could not be read or parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractFailure {
    /// Path of the offending file
    pub path: PathBuf,

    /// Underlying read or parse error
    pub reason: String,
}

/// Statistics from an indexing pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of candidate files found by discovery
    pub files_discovered: usize,

    /// Number of rows written to the CSV
    pub records_written: usize,

    /// Number of files skipped because extraction failed
    pub files_failed: usize,

    /// Duration of the pass in milliseconds
    pub duration_ms: u64,
}

/// Records and failures from a scan, before anything is written
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Successfully extracted records, in discovery order
    pub records: Vec<VocabularyRecord>,

    /// Files skipped during extraction, in discovery order
    pub failures: Vec<ExtractFailure>,

    /// Number of candidate files found by discovery
    pub files_discovered: usize,
}

/// Outcome of a full generate pass
#[derive(Debug, Clone)]
pub struct IndexReport {
    /// Where the CSV was written
    pub output_path: PathBuf,

    pub stats: IndexStats,

    /// Files skipped during extraction, in discovery order
    pub failures: Vec<ExtractFailure>,
}

impl IndexReport {
    /// True when discovery found no candidate files at all
    pub fn is_empty(&self) -> bool {
        self.stats.files_discovered == 0
    }
}
