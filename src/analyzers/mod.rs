//! Per-file analyzers
//!
//! Each analyzer is a capability over the file descriptor stream: a pure
//! function of a descriptor and (optionally) its content, producing a partial
//! contribution to the analysis result. The pipeline fans out over the set of
//! registered analyzers; contributions for hashed files are cached by content
//! hash and merged single-threaded after the fan-out completes.

pub mod dependencies;
pub mod license;
pub mod structure;
pub mod technology;

pub use dependencies::{DependencyExtractor, MANIFEST_FILES};
pub use license::LicenseDetector;
pub use structure::StructureMapper;
pub use technology::TechnologyDetector;

use crate::models::FileDescriptor;
use serde::{Deserialize, Serialize};

/// A dependency as declared in a manifest, before the manifest path is attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDependency {
    pub name: String,
    pub version: String,
}

/// Project-level metadata found in a manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ManifestMetadata {
    /// Check whether any field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Partial contribution of one file to the analysis result
///
/// Contributions are pure functions of file content, which makes them safe to
/// cache by content hash and idempotent under concurrent recomputation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Language classification (at most one per file, first rule wins)
    pub language: Option<String>,

    /// Framework markers implied by the file name
    pub frameworks: Vec<String>,

    /// Dependencies declared in this file, when it is a recognized manifest
    pub dependencies: Vec<ManifestDependency>,

    /// Manifest-level project metadata, when present
    pub metadata: Option<ManifestMetadata>,

    /// Parse failure message for a recognized manifest that could not be parsed
    pub parse_warning: Option<String>,
}

impl Contribution {
    /// Merge another contribution into this one
    pub fn absorb(&mut self, other: Contribution) {
        if self.language.is_none() {
            self.language = other.language;
        }
        self.frameworks.extend(other.frameworks);
        self.dependencies.extend(other.dependencies);
        if self.metadata.is_none() {
            self.metadata = other.metadata;
        }
        if self.parse_warning.is_none() {
            self.parse_warning = other.parse_warning;
        }
    }
}

/// A registered per-file analyzer capability
pub trait FileAnalyzer: Send + Sync {
    /// Analyzer name, used in verbose diagnostics
    fn name(&self) -> &'static str;

    /// Whether this analyzer needs the file content for the given descriptor
    fn needs_content(&self, descriptor: &FileDescriptor) -> bool;

    /// Classify one file. `content` is None when the file was not hashed
    /// (oversized) or its content could not be read.
    fn analyze(&self, descriptor: &FileDescriptor, content: Option<&[u8]>) -> Contribution;
}

/// The default analyzer set run by the pipeline
pub fn default_analyzers() -> Vec<Box<dyn FileAnalyzer>> {
    vec![
        Box::new(TechnologyDetector::new()),
        Box::new(DependencyExtractor::new()),
    ]
}
