//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end generate workflow:
//! 1. Walk directory tree
//! 2. Extract metadata from each file
//! 3. Write the CSV index

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::config::IndexingConfig;
use crate::core::error::Result;
use crate::core::indexer::{extractor, writer, FileWalker};
use crate::core::types::{IndexReport, IndexStats, ScanResult};

/// Orchestrates the indexing pipeline
pub struct IndexingPipeline {
    walker: FileWalker,
    root: PathBuf,
}

impl IndexingPipeline {
    /// Create a new indexing pipeline
    ///
    /// # Arguments
    ///
    /// * `root` - Repository root; ids are computed relative to it
    /// * `pattern` - Glob pattern for vocabulary file names
    /// * `exclude_dirs` - Directory names excluded at any depth
    pub fn new(root: impl Into<PathBuf>, pattern: &str, exclude_dirs: &[String]) -> Result<Self> {
        let walker = FileWalker::new(pattern, exclude_dirs.iter().cloned())?;

        Ok(Self {
            walker,
            root: root.into(),
        })
    }

    /// Build a pipeline from the indexing section of the config
    pub fn from_config(config: &IndexingConfig) -> Result<Self> {
        Self::new(&config.root, &config.pattern, &config.exclude_dirs)
    }

    /// Repository root this pipeline scans
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discover candidate files, sorted
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        self.walker.collect_files(&self.root)
    }

    /// Discover and extract, without writing anything
    ///
    /// Files that fail extraction are collected, not raised.
    pub fn scan(&self) -> Result<ScanResult> {
        tracing::info!("Starting vocabulary scan from {:?}", self.root);
        let files = self.discover()?;
        tracing::info!("Found {} vocabulary files", files.len());

        let mut scan = ScanResult {
            records: Vec::with_capacity(files.len()),
            failures: Vec::new(),
            files_discovered: files.len(),
        };

        for path in &files {
            match extractor::extract(path, &self.root) {
                Ok(record) => {
                    tracing::debug!("Indexed {:?} as '{}'", path, record.id);
                    scan.records.push(record);
                }
                Err(failure) => {
                    tracing::debug!("Skipping {:?}: {}", path, failure.reason);
                    scan.failures.push(failure);
                }
            }
        }

        Ok(scan)
    }

    /// Scan the root and write the CSV index to `output`
    ///
    /// The parent directory of `output` is created before scanning, so
    /// an unwritable destination fails fast.
    pub fn generate(&self, output: &Path) -> Result<IndexReport> {
        let start = Instant::now();

        writer::ensure_parent_dir(output)?;
        let scan = self.scan()?;
        writer::write_index(output, &scan.records)?;

        let stats = IndexStats {
            files_discovered: scan.files_discovered,
            records_written: scan.records.len(),
            files_failed: scan.failures.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Index complete: {} records written, {} skipped in {}ms",
            stats.records_written,
            stats.files_failed,
            stats.duration_ms
        );

        Ok(IndexReport {
            output_path: output.to_path_buf(),
            stats,
            failures: scan.failures,
        })
    }
}
