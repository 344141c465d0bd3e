//! Core functionality for directory walking and project analysis

pub mod cache;
pub mod generator;
pub mod pipeline;
pub mod walker;

pub use cache::{default_cache_path, AnalysisCache, CacheEntry};
pub use generator::{GeneratedDocument, Generator};
pub use pipeline::{AnalysisPipeline, CancelToken};
pub use walker::{FileWalker, WalkOutcome};
