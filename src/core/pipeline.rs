//! Analysis pipeline orchestration
//!
//! The pipeline turns the walked descriptor stream into a single immutable
//! `AnalysisResult`: a parallel worker pool classifies files against the
//! registered analyzers (consulting the content-hash cache), then a
//! single-writer merge aggregates the contributions after all workers
//! complete. No partial result is ever observable.

use crate::analyzers::{
    default_analyzers, Contribution, FileAnalyzer, LicenseDetector, ManifestMetadata,
    StructureMapper,
};
use crate::core::cache::{default_cache_path, AnalysisCache};
use crate::core::walker::FileWalker;
use crate::error::{Result, Warning, WarningKind};
use crate::models::{
    AnalysisResult, Dependency, FileDescriptor, ProjectMetadata, Provenance, Settings,
    TechnologyKind, TechnologyProfile,
};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Cooperative cancellation handle
///
/// Cancellation is checked between files, never mid-read; a cancelled run
/// yields a partial result marked as incomplete rather than an error.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// The project analysis pipeline
pub struct AnalysisPipeline {
    settings: Settings,
    analyzers: Vec<Box<dyn FileAnalyzer>>,
    cache: AnalysisCache,
}

impl AnalysisPipeline {
    /// Create a pipeline with the default analyzer set
    pub fn new(settings: Settings) -> Self {
        let cache = if settings.cache_enabled {
            match default_cache_path(settings.cache_dir.as_deref(), &settings.root_path) {
                Some(path) => AnalysisCache::load(path),
                None => AnalysisCache::in_memory(),
            }
        } else {
            AnalysisCache::in_memory()
        };

        Self {
            settings,
            analyzers: default_analyzers(),
            cache,
        }
    }

    /// Replace the analyzer set (used to register custom capabilities)
    pub fn with_analyzers(mut self, analyzers: Vec<Box<dyn FileAnalyzer>>) -> Self {
        self.analyzers = analyzers;
        self
    }

    /// Access the underlying cache
    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    /// Run the analysis
    pub fn run(&self, cancel: &CancelToken) -> Result<AnalysisResult> {
        self.run_with_progress(cancel, |_, _, _| {})
    }

    /// Run the analysis, reporting classification progress
    pub fn run_with_progress<F>(&self, cancel: &CancelToken, progress: F) -> Result<AnalysisResult>
    where
        F: Fn(usize, usize, &str) + Send + Sync,
    {
        let started = Instant::now();

        // The walk itself is single-threaded to keep traversal order stable
        let walker = FileWalker::new(&self.settings);
        let outcome = walker.walk(cancel)?;
        let files = outcome.files;
        let mut warnings = outcome.warnings;

        progress(0, files.len(), "classifying files");

        let completed = AtomicUsize::new(0);
        let classify = |descriptor: &FileDescriptor| {
            let contribution = self.classify(descriptor);
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            progress(done, files.len(), &descriptor.path.to_string_lossy());
            contribution
        };

        // Fan out over the descriptor stream; collect() is the barrier that
        // guarantees the merge below only sees completed workers
        let contributions: Vec<Contribution> = if self.settings.parallel {
            files.par_iter().map(classify).collect()
        } else {
            files.iter().map(classify).collect()
        };

        // Single-writer merge in traversal order
        let mut profile = TechnologyProfile::new();
        let mut seen_markers: HashSet<(PathBuf, String)> = HashSet::new();
        let mut dependencies: Vec<Dependency> = Vec::new();
        let mut manifest_metadata: Vec<(usize, PathBuf, ManifestMetadata)> = Vec::new();

        for (descriptor, contribution) in files.iter().zip(contributions) {
            if let Some(message) = contribution.parse_warning {
                warnings.push(Warning::new(
                    descriptor.path.clone(),
                    WarningKind::ParseFailure,
                    message,
                ));
            }

            if let Some(language) = contribution.language {
                profile.record(&language, TechnologyKind::Language);
            }

            // A framework marker counts at most once per directory
            for framework in contribution.frameworks {
                let key = (descriptor.parent().to_path_buf(), framework.clone());
                if seen_markers.insert(key) {
                    profile.record(&framework, TechnologyKind::Framework);
                }
            }

            for dependency in contribution.dependencies {
                dependencies.push(Dependency {
                    name: dependency.name,
                    version: dependency.version,
                    manifest: descriptor.path.clone(),
                });
            }

            if let Some(metadata) = contribution.metadata {
                manifest_metadata.push((descriptor.depth, descriptor.path.clone(), metadata));
            }
        }

        let license = LicenseDetector::detect(&self.settings.root_path, &files, &mut warnings);

        let root_name = project_root_name(&self.settings.root_path);
        let mapper = StructureMapper::new(self.settings.structure_depth);
        let root = mapper.build(&root_name, &files);

        let metadata = project_metadata(&root_name, &files, manifest_metadata);

        if self.settings.cache_enabled {
            if let Err(err) = self.cache.flush() {
                warnings.push(Warning::new(
                    self.settings.root_path.clone(),
                    WarningKind::Cache,
                    err.to_string(),
                ));
            }
        }

        let provenance = Provenance {
            analyzed_at: chrono::Utc::now(),
            cache_hit_ratio: self.cache.hit_ratio(),
            files_visited: files.len(),
            duration: started.elapsed(),
            complete: !outcome.cancelled,
        };

        Ok(AnalysisResult {
            metadata,
            technologies: profile.ranked(),
            dependencies,
            license,
            root,
            provenance,
            warnings,
        })
    }

    /// Classify one file, consulting the cache for hashed content
    fn classify(&self, descriptor: &FileDescriptor) -> Contribution {
        if self.settings.cache_enabled && descriptor.is_hashed() {
            if let Some(entry) = self.cache.lookup(&descriptor.hash) {
                return entry;
            }
        }

        let needs_content = self
            .analyzers
            .iter()
            .any(|analyzer| analyzer.needs_content(descriptor));
        let content = if needs_content && descriptor.is_hashed() {
            std::fs::read(self.settings.root_path.join(&descriptor.path)).ok()
        } else {
            None
        };

        let mut contribution = Contribution::default();
        for analyzer in &self.analyzers {
            contribution.absorb(analyzer.analyze(descriptor, content.as_deref()));
        }

        if self.settings.cache_enabled && descriptor.is_hashed() {
            self.cache.store(&descriptor.hash, contribution.clone());
        }
        contribution
    }
}

/// Directory name of the project root, used as the fallback project name
fn project_root_name(root: &Path) -> String {
    root.canonicalize()
        .unwrap_or_else(|_| root.to_path_buf())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("project")
        .to_string()
}

/// Derive project-level metadata from manifests and walked paths
fn project_metadata(
    root_name: &str,
    files: &[FileDescriptor],
    mut manifest_metadata: Vec<(usize, PathBuf, ManifestMetadata)>,
) -> ProjectMetadata {
    // The manifest closest to the root wins; path order breaks depth ties
    manifest_metadata.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));

    let name = manifest_metadata
        .iter()
        .find_map(|(_, _, metadata)| metadata.name.clone())
        .unwrap_or_else(|| root_name.to_string());
    let description = manifest_metadata
        .iter()
        .find_map(|(_, _, metadata)| metadata.description.clone());

    let mut facts = ProjectMetadata {
        name,
        description,
        ..ProjectMetadata::default()
    };

    for descriptor in files {
        let file_name = descriptor.file_name();
        let components: Vec<String> = descriptor
            .path
            .components()
            .map(|component| component.as_os_str().to_string_lossy().to_lowercase())
            .collect();

        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("");

        facts.has_tests |= components
            .iter()
            .take(components.len().saturating_sub(1))
            .any(|part| part == "tests" || part == "test")
            || stem.starts_with("test_")
            || stem.ends_with("_test");

        facts.has_docs |= components
            .iter()
            .take(components.len().saturating_sub(1))
            .any(|part| part == "docs" || part == "doc")
            || (descriptor.extension.as_deref() == Some("md")
                && !file_name.eq_ignore_ascii_case("readme.md"));

        facts.has_ci |= descriptor.path.starts_with(".github/workflows")
            || matches!(file_name, ".gitlab-ci.yml" | "Jenkinsfile" | ".travis.yml");

        facts.has_docker |= file_name == "Dockerfile" || file_name.starts_with("docker-compose.");
    }

    facts
}
