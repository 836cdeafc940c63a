//! Tests for the generate command
//!
//! - Default output path from configuration
//! - Explicit --output with missing parent directories
//! - Per-file failures do not fail the run

use crate::common::{read_rows, TestRepo};
use vocab_index::cli::{generate, run_with_config, Cli};
use vocab_index::Config;

fn config_for(repo: &TestRepo) -> Config {
    let mut config = Config::default();
    config.indexing.root = repo.path().to_path_buf();
    config.output.default_path = repo.path().join("vocabulary_index.csv");
    config
}

#[test]
fn test_run_writes_default_output() {
    let repo = TestRepo::small();
    let config = config_for(&repo);

    let result = run_with_config(Cli::default(), &config);

    assert!(result.is_ok(), "run should succeed: {:?}", result.err());
    let (_, rows) = read_rows(&config.output.default_path);
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_run_with_explicit_output() {
    let repo = TestRepo::with_files(&[("voc.json", r#"{"prefix":"v"}"#)]);
    let config = config_for(&repo);
    let output = repo.path().join("reports/2024/index.csv");

    let cli = Cli {
        output: Some(output.clone()),
    };
    run_with_config(cli, &config).unwrap();

    assert!(output.exists());
    assert!(!config.output.default_path.exists());
    let (_, rows) = read_rows(&output);
    assert_eq!(rows[0][5], "v");
}

#[test]
fn test_run_succeeds_with_broken_files() {
    let repo = TestRepo::with_files(&[("broken.json", "[1, 2"), ("ok.json", "{}")]);
    let config = config_for(&repo);

    let report = generate::execute(&config.output.default_path, &config).unwrap();

    assert_eq!(report.stats.records_written, 1);
    assert_eq!(report.failures.len(), 1);

    colored::control::set_override(false);
    let mut err = Vec::new();
    generate::write_warnings(&mut err, &report).unwrap();
    let text = String::from_utf8(err).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("Warning: Could not read "));
    assert!(text.contains("broken.json"));
}

#[test]
fn test_run_empty_repository() {
    let repo = TestRepo::with_files(&[]);
    let config = config_for(&repo);

    let report = generate::execute(&config.output.default_path, &config).unwrap();

    assert!(report.is_empty());
    let (headers, rows) = read_rows(&config.output.default_path);
    assert_eq!(headers.len(), 9);
    assert!(rows.is_empty());

    colored::control::set_override(false);
    let mut out = Vec::new();
    generate::write_summary(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(generate::NO_FILES_NOTICE));
    assert!(text.contains("Generated index with 0 vocabulary configuration(s)"));
}

#[test]
fn test_run_invalid_config_pattern() {
    let repo = TestRepo::with_files(&[]);
    let mut config = config_for(&repo);
    config.indexing.pattern = "[broken".to_string();

    let result = run_with_config(Cli::default(), &config);

    assert!(result.is_err());
    assert!(!config.output.default_path.exists());
}
