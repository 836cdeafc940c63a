//! File system walker with directory-name exclusion.
//!
//! Traverses a directory tree and returns every file whose name matches
//! a glob pattern, skipping any path that passes through an excluded
//! directory name. Handles walk errors (permission denied, etc.)
//! without aborting.

use glob::Pattern;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{Result, VocabIndexError};

/// File system walker with name-based filtering
pub struct FileWalker {
    /// Pattern matched against each file name (e.g., "*.json")
    pattern: Pattern,

    /// Directory names excluded at any depth (e.g., ".git", "venv")
    exclude_dirs: HashSet<String>,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `pattern` - Glob pattern applied to file names
    /// * `exclude_dirs` - Path component names to exclude
    ///
    /// # Returns
    ///
    /// A new `FileWalker` instance or an error if the pattern is
    /// invalid
    pub fn new<I, S>(pattern: &str, exclude_dirs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pattern = Pattern::new(pattern).map_err(|e| {
            VocabIndexError::ConfigError(format!("Invalid file pattern '{pattern}': {e}"))
        })?;

        Ok(Self {
            pattern,
            exclude_dirs: exclude_dirs.into_iter().map(Into::into).collect(),
        })
    }

    /// Collect all matching files below `root`, sorted
    ///
    /// Paths are returned as `root` joined with the relative path, in
    /// ascending component-wise order, so two walks over an unchanged
    /// tree return identical vectors.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(VocabIndexError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_descend(e, root))
        {
            match entry {
                Ok(entry) => {
                    // Symlinked files are kept; symlinked directories are
                    // never descended into
                    let is_file = entry.file_type().is_file()
                        || (entry.path_is_symlink() && !entry.path().is_dir());
                    if !is_file {
                        continue;
                    }

                    let path = entry.path();
                    if self.matches(path, root) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Prune excluded directories before walkdir descends into them.
    /// Never filters the root itself.
    fn should_descend(&self, entry: &DirEntry, root: &Path) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        if self.is_excluded(entry.path(), root) {
            tracing::debug!("Skipping excluded directory: {:?}", entry.path());
            return false;
        }

        true
    }

    /// Check a candidate file against the name pattern and exclusions
    fn matches(&self, path: &Path, root: &Path) -> bool {
        let name_matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| self.pattern.matches(n))
            .unwrap_or(false);

        name_matches && !self.is_excluded(path, root)
    }

    /// True if any component of `path` below `root` is an excluded name
    pub fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        relative.components().any(|c| match c {
            Component::Normal(name) => name
                .to_str()
                .map(|n| self.exclude_dirs.contains(n))
                .unwrap_or(false),
            _ => false,
        })
    }
}
