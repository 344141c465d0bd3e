//! End-to-end tests for the Scribe tool
//!
//! These tests drive the full pipeline against realistic fixture projects
//! and check the generated document and the accumulated warnings.

use scribe::{
    core::{CancelToken, Generator},
    error::{ScribeError, WarningKind},
    models::config::Settings,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const MIT_TEXT: &str = "MIT License\n\nCopyright (c) 2024 Acme\n\n\
Permission is hereby granted, free of charge, to any person obtaining a copy \
of this software and associated documentation files.\n\n\
THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND.";

/// Create a small polyglot project with manifests, tests, and a license
fn create_fixture_project(base_dir: &Path) {
    fs::create_dir_all(base_dir.join("src")).unwrap();
    fs::create_dir_all(base_dir.join("web")).unwrap();
    fs::create_dir_all(base_dir.join("tests")).unwrap();

    fs::write(
        base_dir.join("Cargo.toml"),
        r#"[package]
name = "acme-widget"
description = "Widget processing service"

[dependencies]
serde = "1.0"
rayon = "1.11"
"#,
    )
    .unwrap();

    fs::write(
        base_dir.join("web/package.json"),
        r#"{
    "name": "acme-web",
    "dependencies": { "react": "^18.2.0", "serde": "0.0.1" }
}"#,
    )
    .unwrap();

    fs::write(base_dir.join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(base_dir.join("src/service.rs"), "pub struct Service;").unwrap();
    fs::write(base_dir.join("web/index.js"), "console.log('hi');").unwrap();
    fs::write(base_dir.join("tests/service_test.rs"), "#[test]\nfn ok() {}").unwrap();
    fs::write(base_dir.join("LICENSE"), MIT_TEXT).unwrap();
    fs::write(base_dir.join("Dockerfile"), "FROM scratch\n").unwrap();
}

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

#[test]
fn test_generated_document_covers_all_sections() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_fixture_project(project.path());

    let generator = Generator::new(fixture_settings(project.path(), cache.path())).unwrap();
    let generated = generator.generate(&CancelToken::new()).unwrap();
    let document = &generated.document;

    // Title comes from the closest manifest
    assert!(document.starts_with("# acme-widget\n"));
    assert!(document.contains("Widget processing service"));

    // Technologies: Rust leads (2 files) with JavaScript present
    assert!(document.contains("## Technologies"));
    assert!(document.contains("Rust"));
    assert!(document.contains("JavaScript"));
    assert!(document.contains("Docker"));

    // Dependencies grouped per manifest, duplicates kept per manifest
    assert!(document.contains("`Cargo.toml`"));
    assert!(document.contains("- serde 1.0"));
    assert!(document.contains("`web/package.json`"));
    assert!(document.contains("- serde 0.0.1"));

    // License detected from the MIT text
    assert!(document.contains("**MIT**"));
    let license = generated.analysis.license.as_ref().unwrap();
    assert_eq!(license.identifier, "MIT");
    assert_eq!(license.confidence, 1.0);

    // Structure tree is fenced and rooted at the project directory
    assert!(document.contains("## Project Structure"));
    assert!(document.contains("```"));
    assert!(document.contains("main.rs"));

    // Features section reflects detected facts
    assert!(document.contains("Automated test suite"));
    assert!(document.contains("Container support (Docker)"));
}

#[test]
fn test_rust_outranks_javascript_in_fixture() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_fixture_project(project.path());

    let generator = Generator::new(fixture_settings(project.path(), cache.path())).unwrap();
    let generated = generator.generate(&CancelToken::new()).unwrap();

    let names: Vec<&str> = generated
        .analysis
        .languages()
        .map(|tech| tech.name.as_str())
        .collect();
    assert_eq!(names[0], "Rust");
    assert!(names.contains(&"JavaScript"));
}

#[test]
fn test_unreadable_root_produces_no_document() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let cache = tempdir().unwrap();

    let generator = Generator::new(fixture_settings(&missing, cache.path())).unwrap();
    let err = generator.generate(&CancelToken::new()).unwrap_err();
    assert!(matches!(err, ScribeError::Access { .. }));
}

#[test]
fn test_unknown_section_fails_before_any_traversal() {
    let dir = tempdir().unwrap();
    // The root does not exist: if traversal ran first this would be an
    // access error instead of a configuration error
    let missing = dir.path().join("nope");
    let cache = tempdir().unwrap();

    let mut settings = fixture_settings(&missing, cache.path());
    settings.sections = Some(vec!["overview".into(), "sponsors".into()]);

    let err = Generator::new(settings).unwrap_err();
    assert!(matches!(err, ScribeError::UnknownSection { name } if name == "sponsors"));
}

#[test]
fn test_malformed_manifest_warns_but_still_produces_document() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    fs::write(project.path().join("package.json"), "{ broken").unwrap();
    fs::write(project.path().join("app.py"), "print('hi')").unwrap();

    let generator = Generator::new(fixture_settings(project.path(), cache.path())).unwrap();
    let generated = generator.generate(&CancelToken::new()).unwrap();

    assert!(generated.document.starts_with("# "));
    assert!(generated
        .analysis
        .warnings
        .iter()
        .any(|warning| warning.kind == WarningKind::ParseFailure));
    // The broken manifest contributes no dependencies
    assert!(generated.analysis.dependencies.is_empty());
}

#[test]
fn test_minimal_template_renders_subset() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_fixture_project(project.path());

    let mut settings = fixture_settings(project.path(), cache.path());
    settings.template = "minimal".to_string();

    let generator = Generator::new(settings).unwrap();
    let generated = generator.generate(&CancelToken::new()).unwrap();

    assert!(generated.document.contains("## Technologies"));
    assert!(!generated.document.contains("## Project Structure"));
    assert!(!generated.document.contains("## Dependencies"));
}

#[test]
fn test_section_order_is_caller_configurable() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_fixture_project(project.path());

    let mut settings = fixture_settings(project.path(), cache.path());
    settings.sections = Some(vec!["license".into(), "overview".into()]);

    let generator = Generator::new(settings).unwrap();
    let generated = generator.generate(&CancelToken::new()).unwrap();

    let license_at = generated.document.find("## License").unwrap();
    let overview_at = generated.document.find("## Overview").unwrap();
    assert!(license_at < overview_at);
    assert!(!generated.document.contains("## Technologies"));
}

#[test]
fn test_file_count_invariant_holds() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_fixture_project(project.path());

    let generator = Generator::new(fixture_settings(project.path(), cache.path())).unwrap();
    let generated = generator.generate(&CancelToken::new()).unwrap();

    assert_eq!(
        generated.analysis.root.file_count,
        generated.analysis.provenance.files_visited
    );
}
