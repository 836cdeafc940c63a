//! CSV index writer.
//!
//! Serializes records under the fixed header row. Output goes to a
//! temporary file in the destination directory which is then renamed
//! over the target, so an interrupted run leaves any previous index
//! intact.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::error::Result;
use crate::core::types::{VocabularyRecord, CSV_HEADERS};

/// Write the header and all records as CSV into `out`
///
/// The header is always written, even for an empty slice.
pub fn write_csv<W: Write>(out: W, records: &[VocabularyRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Render records to an in-memory CSV string
pub fn render_csv(records: &[VocabularyRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    // csv only emits the UTF-8 strings it was given
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Ensure the parent directory of `output` exists
pub fn ensure_parent_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Atomically replace `output` with a CSV of `records`
pub fn write_index(output: &Path, records: &[VocabularyRecord]) -> Result<()> {
    ensure_parent_dir(output)?;

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_csv(&mut tmp, records)?;
    if let Some(permissions) = output_permissions(output) {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(output)?;

    tracing::debug!("Wrote {} records to {:?}", records.len(), output);
    Ok(())
}

/// Mode the replacement file should carry
///
/// An existing index keeps its permissions. A new one gets 0644 on unix
/// instead of the 0600 temp files are created with.
fn output_permissions(output: &Path) -> Option<fs::Permissions> {
    match fs::metadata(output) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
