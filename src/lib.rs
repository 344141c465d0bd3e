//! Scribe - a project analyzer and README generator
//!
//! This library provides the analysis pipeline that turns a raw directory
//! tree into a populated, section-structured document: traversal, technology
//! and dependency detection, license fingerprinting, structure mapping, and
//! template-based rendering.

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    AnalysisCache, AnalysisPipeline, CancelToken, FileWalker, GeneratedDocument, Generator,
};
pub use error::{ErrorSeverity, Result, ScribeError, Warning, WarningKind};
pub use models::{
    analysis::{AnalysisResult, Dependency, LicenseInfo, TechnologyProfile},
    config::Settings,
    descriptor::FileDescriptor,
    document::{Section, SectionId},
};
pub use render::{DocumentRenderer, LicenseCatalog, SectionComposer, Template};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
