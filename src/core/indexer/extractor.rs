//! Metadata extraction from vocabulary JSON files.
//!
//! Turns one file into a [`VocabularyRecord`]. Read and parse errors are
//! returned as an [`ExtractFailure`] so the caller can skip the file and
//! keep going.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::fs;
use std::path::{Component, Path};
use std::time::SystemTime;

use crate::core::types::{ExtractFailure, VocabularyRecord};

/// Extract a record from `path`, computing its id relative to `repo_root`
pub fn extract(path: &Path, repo_root: &Path) -> Result<VocabularyRecord, ExtractFailure> {
    let failure = |reason: String| ExtractFailure {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = fs::read(path).map_err(|e| failure(e.to_string()))?;
    let data: Value = serde_json::from_slice(&bytes).map_err(|e| failure(e.to_string()))?;
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| failure(e.to_string()))?;

    Ok(VocabularyRecord {
        id: record_id(path, repo_root),
        filename: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        url: string_field(&data, "url"),
        label: string_field(&data, "label"),
        namespace_uri: string_field(&data, "namespaceUri"),
        prefix: string_field(&data, "prefix"),
        format: string_field(&data, "format"),
        comment: string_field(&data, "comment"),
        last_modified: format_timestamp(modified),
    })
}

/// Relative path without its final extension, joined with `/`
pub fn record_id(path: &Path, repo_root: &Path) -> String {
    let relative = path.strip_prefix(repo_root).unwrap_or(path);
    let stripped = relative.with_extension("");

    stripped
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Top-level string value for `key`, or empty for anything else
fn string_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

/// RFC 3339 in UTC with microseconds, e.g. `2024-05-01T09:30:12.123456Z`
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}
