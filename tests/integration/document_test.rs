//! Document determinism and round-trip tests

use scribe::{
    core::{CancelToken, Generator},
    models::config::Settings,
    models::Section,
    DocumentRenderer,
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
        "[package]\nname = \"deterministic\"\n",
    )
    .unwrap();
    fs::write(base_dir.join("src/main.rs"), "fn main() {}").unwrap();
}

#[test]
fn test_two_runs_render_byte_identical_documents() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_project(project.path());

    let settings = fixture_settings(project.path(), cache.path());

    let first = Generator::new(settings.clone())
        .unwrap()
        .generate(&CancelToken::new())
        .unwrap();
    let second = Generator::new(settings)
        .unwrap()
        .generate(&CancelToken::new())
        .unwrap();

    assert_eq!(first.document.as_bytes(), second.document.as_bytes());
}

#[test]
fn test_rendering_the_same_sections_twice_is_byte_identical() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_project(project.path());

    let generated = Generator::new(fixture_settings(project.path(), cache.path()))
        .unwrap()
        .generate(&CancelToken::new())
        .unwrap();

    let sections: Vec<Section> = generated.sections.clone();
    let renderer = DocumentRenderer::new();
    let once = renderer.render(&generated.analysis.metadata.name, &sections);
    let twice = renderer.render(&generated.analysis.metadata.name, &sections);

    assert_eq!(once.as_bytes(), twice.as_bytes());
    assert_eq!(once, generated.document);
}

#[test]
fn test_render_from_existing_analysis_matches_generate() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_project(project.path());

    let generator = Generator::new(fixture_settings(project.path(), cache.path())).unwrap();
    let generated = generator.generate(&CancelToken::new()).unwrap();

    // Re-rendering the captured analysis reproduces the document
    let rerendered = generator.render(generated.analysis.clone());
    assert_eq!(rerendered.document, generated.document);
}

#[test]
fn test_excluded_sections_never_leak_content() {
    let project = tempdir().unwrap();
    let cache = tempdir().unwrap();
    create_project(project.path());
    // No LICENSE file: the license section must be excluded

    let generated = Generator::new(fixture_settings(project.path(), cache.path()))
        .unwrap()
        .generate(&CancelToken::new())
        .unwrap();

    assert!(!generated.document.contains("## License"));
    let license_section = generated
        .sections
        .iter()
        .find(|section| section.id == scribe::SectionId::License)
        .unwrap();
    assert!(!license_section.included);
    assert!(license_section.content.is_empty());
}
