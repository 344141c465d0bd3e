//! Incremental analysis cache tests

use scribe::{
    core::{AnalysisPipeline, CancelToken},
    models::config::Settings,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn fixture_settings(root: &Path, cache_dir: &Path) -> Settings {
    Settings {
        root_path: root.to_path_buf(),
        cache_dir: Some(cache_dir.to_path_buf()),
        read_timeout_ms: None,
        show_progress: false,
        quiet: true,
        ..Settings::default()
    }
}

fn create_project(base_dir: &Path) {
    fs::create_dir_all(base_dir.join("src")).unwrap();
    fs::write(
        base_dir.join("Cargo.toml"),
        "[package]\nname = \"cached\"\n\n[dependencies]\nserde = \"1.0\"\n",
    )
    .unwrap();
    fs::write(base_dir.join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(base_dir.join("src/util.rs"), "pub fn util() {}").unwrap();
}

#[test]
fn test_unchanged_tree_hits_cache_fully_and_yields_identical_result() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_project(project.path());

    let settings = fixture_settings(project.path(), cache.path());

    let first = AnalysisPipeline::new(settings.clone())
        .run(&CancelToken::new())
        .unwrap();
    assert_eq!(first.provenance.cache_hit_ratio, 0.0);

    let second = AnalysisPipeline::new(settings)
        .run(&CancelToken::new())
        .unwrap();
    assert_eq!(second.provenance.cache_hit_ratio, 1.0);

    // Identical analysis content apart from run provenance
    assert_eq!(second.metadata, first.metadata);
    assert_eq!(second.technologies, first.technologies);
    assert_eq!(second.dependencies, first.dependencies);
    assert_eq!(second.license, first.license);
    assert_eq!(second.root, first.root);
    assert_eq!(second.warnings, first.warnings);
}

#[test]
fn test_modified_file_misses_cache_only_for_itself() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_project(project.path());

    let settings = fixture_settings(project.path(), cache.path());
    AnalysisPipeline::new(settings.clone())
        .run(&CancelToken::new())
        .unwrap();

    // Change one of the three files
    fs::write(project.path().join("src/util.rs"), "pub fn util_v2() {}").unwrap();

    let second = AnalysisPipeline::new(settings)
        .run(&CancelToken::new())
        .unwrap();

    // Two of three hashed files are unchanged
    let expected = 2.0 / 3.0;
    assert!((second.provenance.cache_hit_ratio - expected).abs() < 1e-9);
}

#[test]
fn test_cache_file_is_persisted_under_cache_dir() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_project(project.path());

    AnalysisPipeline::new(fixture_settings(project.path(), cache.path()))
        .run(&CancelToken::new())
        .unwrap();

    let entries: Vec<_> = fs::read_dir(cache.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let path = entries[0].as_ref().unwrap().path();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));

    // The persisted mapping is valid JSON keyed by content hash
    let content = fs::read_to_string(path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.as_object().unwrap().len(), 3);
}

#[test]
fn test_disabled_cache_never_persists() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_project(project.path());

    let mut settings = fixture_settings(project.path(), cache.path());
    settings.cache_enabled = false;

    let first = AnalysisPipeline::new(settings.clone())
        .run(&CancelToken::new())
        .unwrap();
    let second = AnalysisPipeline::new(settings)
        .run(&CancelToken::new())
        .unwrap();

    assert_eq!(first.provenance.cache_hit_ratio, 0.0);
    assert_eq!(second.provenance.cache_hit_ratio, 0.0);
    assert!(fs::read_dir(cache.path()).unwrap().next().is_none());
}
