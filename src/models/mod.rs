//! Data models and structures for Scribe

pub mod analysis;
pub mod config;
pub mod descriptor;
pub mod document;
pub mod tree;

pub use analysis::{
    AnalysisResult, Dependency, LicenseInfo, ProjectMetadata, Provenance, TechnologyCount,
    TechnologyKind, TechnologyProfile,
};
pub use config::Settings;
pub use descriptor::{FileDescriptor, OVERSIZED_HASH};
pub use document::{Section, SectionId};
pub use tree::{DirectoryNode, TreeEntry};
