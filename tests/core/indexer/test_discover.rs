//! Discovery tests
//!
//! - Sorted, repeatable output
//! - Excluded directory names pruned at any depth

use crate::common::{default_pipeline, TestRepo};

fn relative_ids(repo: &TestRepo) -> Vec<String> {
    default_pipeline(repo.path())
        .discover()
        .unwrap()
        .iter()
        .map(|p| {
            p.strip_prefix(repo.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_discover_small_repo() {
    let repo = TestRepo::small();

    assert_eq!(
        relative_ids(&repo),
        vec![
            "vocabularies/dcterms.json",
            "vocabularies/foaf.json",
            "vocabularies/skos.json",
        ]
    );
}

#[test]
fn test_discover_is_repeatable() {
    let repo = TestRepo::with_files(&[
        ("m/n.json", "{}"),
        ("a.json", "{}"),
        ("m/a.json", "{}"),
        ("z/y/x.json", "{}"),
    ]);
    let pipeline = default_pipeline(repo.path());

    let first = pipeline.discover().unwrap();
    let second = pipeline.discover().unwrap();

    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);
}

#[test]
fn test_discover_excludes_at_any_depth() {
    let repo = TestRepo::with_files(&[
        ("a/b/c/.git/objects/pack.json", "{}"),
        ("a/b/.github/dependabot.json", "{}"),
        ("a/venv/x.json", "{}"),
        ("a/b/c/.venv/y.json", "{}"),
        ("a/b/c/kept.json", "{}"),
    ]);

    assert_eq!(relative_ids(&repo), vec!["a/b/c/kept.json"]);
}

#[test]
fn test_discover_ignores_non_json() {
    let repo = TestRepo::with_files(&[
        ("voc.jsonld", "{}"),
        ("voc.json.txt", "{}"),
        ("notes.md", "# notes"),
    ]);

    assert!(relative_ids(&repo).is_empty());
}
