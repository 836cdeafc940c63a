// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Synthetic vocabulary repository
#[allow(dead_code)] // Used in integration tests
pub struct TestRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestRepo {
    /// Small repository with a mix of vocabularies, excluded
    /// directories and non-JSON files
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        Self::with_files(&[
            (
                "vocabularies/foaf.json",
                r#"{"url": "http://xmlns.com/foaf/spec/index.rdf", "label": "Friend of a Friend", "namespaceUri": "http://xmlns.com/foaf/0.1/", "prefix": "foaf", "format": "rdf", "comment": "People and links"}"#,
            ),
            (
                "vocabularies/dcterms.json",
                r#"{"label": "DCMI Metadata Terms", "namespaceUri": "http://purl.org/dc/terms/", "prefix": "dcterms"}"#,
            ),
            ("vocabularies/skos.json", r#"{"label": "SKOS"}"#),
            ("README.md", "# Vocabularies"),
            (".github/workflows/config.json", r#"{"label": "CI"}"#),
            (".git/info.json", r#"{"label": "VCS"}"#),
            ("venv/lib/site.json", r#"{"label": "venv"}"#),
            (".venv/lib/site.json", r#"{"label": ".venv"}"#),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Get path to the repository
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
