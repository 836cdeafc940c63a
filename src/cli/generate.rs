//! Generate command - scan the repository and write the CSV index

use crate::cli::output::{self, colors};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::IndexingPipeline;
use crate::core::types::{ExtractFailure, IndexReport};
use std::io::{self, Write};
use std::path::Path;

/// Notice printed when discovery finds nothing
pub const NO_FILES_NOTICE: &str = "No JSON files found to index.";

/// Execute the generate command
///
/// Per-file failures are printed as warnings and do not affect the
/// result; only environment failures are returned as errors.
pub fn execute(output_path: &Path, config: &Config) -> Result<IndexReport> {
    let pipeline = IndexingPipeline::from_config(&config.indexing)?;
    let report = pipeline.generate(output_path)?;

    write_warnings(&mut io::stderr().lock(), &report)?;
    write_summary(&mut io::stdout().lock(), &report)?;

    Ok(report)
}

/// Write one warning line per file that could not be indexed
pub fn write_warnings<W: Write>(out: &mut W, report: &IndexReport) -> io::Result<()> {
    for failure in &report.failures {
        output::write_warning(out, &failure_message(failure))?;
    }
    Ok(())
}

/// Write the record count and output location
///
/// Prefixed by [`NO_FILES_NOTICE`] when nothing was discovered.
pub fn write_summary<W: Write>(out: &mut W, report: &IndexReport) -> io::Result<()> {
    if report.is_empty() {
        writeln!(out, "{NO_FILES_NOTICE}")?;
    }
    writeln!(
        out,
        "{} Generated index with {} vocabulary configuration(s)",
        colors::success("✓"),
        colors::number(&report.stats.records_written.to_string())
    )?;
    writeln!(
        out,
        "{} Index saved to: {}",
        colors::success("✓"),
        colors::file_path(&report.output_path.display().to_string())
    )
}

/// Warning text for a file that could not be indexed
pub fn failure_message(failure: &ExtractFailure) -> String {
    format!(
        "Could not read {}: {}",
        failure.path.display(),
        failure.reason
    )
}
