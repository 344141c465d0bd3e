//! Analysis result structures

use crate::error::Warning;
use crate::models::tree::DirectoryNode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Broad classification of a detected technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnologyKind {
    /// Detected via extension rules, at most one per file
    Language,
    /// Detected via marker-file rules, any number per file
    Framework,
}

/// One ranked entry of the finalized technology profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyCount {
    pub name: String,
    pub kind: TechnologyKind,
    pub count: usize,
}

/// Occurrence counts per technology, built incrementally during the merge
///
/// Ranking is by count descending with ties broken by first-seen order, so
/// the finalized sequence is deterministic for a given traversal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnologyProfile {
    counts: HashMap<String, usize>,
    kinds: HashMap<String, TechnologyKind>,
    first_seen: Vec<String>,
}

impl TechnologyProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a technology
    pub fn record(&mut self, name: &str, kind: TechnologyKind) {
        if !self.counts.contains_key(name) {
            self.first_seen.push(name.to_string());
            self.kinds.insert(name.to_string(), kind);
        }
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Number of distinct technologies recorded
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrence counts for the given kind
    pub fn total_count(&self, kind: TechnologyKind) -> usize {
        self.counts
            .iter()
            .filter(|(name, _)| self.kinds.get(*name) == Some(&kind))
            .map(|(_, count)| count)
            .sum()
    }

    /// Finalize into a ranked sequence: count descending, first-seen ascending
    pub fn ranked(&self) -> Vec<TechnologyCount> {
        let mut entries: Vec<TechnologyCount> = self
            .first_seen
            .iter()
            .map(|name| TechnologyCount {
                name: name.clone(),
                kind: self.kinds[name],
                count: self.counts[name],
            })
            .collect();

        // Stable sort keeps first-seen order within equal counts
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

/// A dependency declared in a manifest file
///
/// A (name, manifest) pair is unique; the same name declared in different
/// manifests is retained as separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    /// Declared version constraint, kept as an opaque string
    pub version: String,
    /// Manifest path relative to the project root
    pub manifest: PathBuf,
}

/// The detected project license
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseInfo {
    /// SPDX identifier, e.g. "MIT"
    pub identifier: String,
    /// Matched file path relative to the project root
    pub path: PathBuf,
    /// Match confidence in [0, 1]; 1.0 means every fingerprint phrase matched
    pub confidence: f64,
}

/// Project-level facts detected from manifests and walked paths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project name from the nearest manifest, or the root directory name
    pub name: String,
    /// Project description from the nearest manifest, if any
    pub description: Option<String>,
    pub has_tests: bool,
    pub has_docs: bool,
    pub has_ci: bool,
    pub has_docker: bool,
}

/// Provenance metadata attached to every analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// When the analysis ran
    pub analyzed_at: chrono::DateTime<chrono::Utc>,
    /// Fraction of hashed files served from the cache
    pub cache_hit_ratio: f64,
    /// Total files visited by the walk
    pub files_visited: usize,
    /// Wall-clock analysis duration
    pub duration: Duration,
    /// False when the run was cancelled before the walk finished
    pub complete: bool,
}

/// Aggregate result of a single analysis run
///
/// Produced exactly once per invocation by the pipeline's merge step and
/// never mutated afterward; the section composer reads it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub metadata: ProjectMetadata,
    /// Ranked technology profile (count descending, first-seen ascending)
    pub technologies: Vec<TechnologyCount>,
    pub dependencies: Vec<Dependency>,
    pub license: Option<LicenseInfo>,
    /// Directory tree summary rooted at the project root
    pub root: DirectoryNode,
    pub provenance: Provenance,
    /// Non-fatal warnings accumulated during the run
    pub warnings: Vec<Warning>,
}

impl AnalysisResult {
    /// Detected languages in ranked order
    pub fn languages(&self) -> impl Iterator<Item = &TechnologyCount> {
        self.technologies
            .iter()
            .filter(|tech| tech.kind == TechnologyKind::Language)
    }

    /// Detected frameworks in ranked order
    pub fn frameworks(&self) -> impl Iterator<Item = &TechnologyCount> {
        self.technologies
            .iter()
            .filter(|tech| tech.kind == TechnologyKind::Framework)
    }

    /// Distinct manifest paths in first-seen order
    pub fn manifests(&self) -> Vec<&Path> {
        let mut seen: Vec<&Path> = Vec::new();
        for dependency in &self.dependencies {
            if !seen.contains(&dependency.manifest.as_path()) {
                seen.push(dependency.manifest.as_path());
            }
        }
        seen
    }

    /// Dependencies declared in the given manifest, in declaration order
    pub fn dependencies_of<'a>(&'a self, manifest: &'a Path) -> impl Iterator<Item = &'a Dependency> + 'a {
        self.dependencies
            .iter()
            .filter(move |dependency| dependency.manifest == manifest)
    }
}
