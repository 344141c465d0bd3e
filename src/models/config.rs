//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default size cap above which file content is not hashed (4 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 4 * 1024 * 1024;

/// Default per-file read timeout in milliseconds
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5_000;

/// Default depth at which the structure summary collapses deeper entries
pub const DEFAULT_STRUCTURE_DEPTH: usize = 4;

/// Main configuration settings for Scribe
///
/// Built once per run from the merged configuration sources and treated as
/// an immutable input by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Project root to analyze
    pub root_path: PathBuf,

    /// Patterns for directories and files to exclude from the walk
    pub exclude_patterns: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Maximum number of files to visit before stopping the walk
    pub max_files: Option<usize>,

    /// Size cap in bytes; larger files are recorded but not hashed
    pub max_file_size: u64,

    /// Per-file read timeout in milliseconds (None disables the timeout)
    pub read_timeout_ms: Option<u64>,

    /// Depth at which the structure summary collapses deeper entries
    pub structure_depth: usize,

    /// Template name used to render the document
    pub template: String,

    /// Ordered section list; None uses the template's default order
    pub sections: Option<Vec<String>>,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to reuse per-file results from the persisted cache
    pub cache_enabled: bool,

    /// Cache directory path
    pub cache_dir: Option<PathBuf>,

    /// Whether to use parallel processing for the analysis fan-out
    pub parallel: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in terminal output
    pub use_colors: bool,

    /// Whether to show progress bars
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            exclude_patterns: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "target".to_string(),
                "dist".to_string(),
                "build".to_string(),
                "__pycache__".to_string(),
                "venv".to_string(),
                ".idea".to_string(),
                ".vscode".to_string(),
            ],
            max_depth: None,
            max_files: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            read_timeout_ms: Some(DEFAULT_READ_TIMEOUT_MS),
            structure_depth: DEFAULT_STRUCTURE_DEPTH,
            template: "standard".to_string(),
            sections: None,
            output_file: None,
            cache_enabled: true,
            cache_dir: None,
            parallel: true,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub root_path: Option<PathBuf>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub max_files: Option<usize>,
    pub max_file_size: Option<u64>,
    pub read_timeout_ms: Option<u64>,
    pub structure_depth: Option<usize>,
    pub template: Option<String>,
    pub sections: Option<Vec<String>>,
    pub output_file: Option<PathBuf>,
    pub cache_enabled: Option<bool>,
    pub cache_dir: Option<PathBuf>,
    pub parallel: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.root_path.is_some() {
            self.root_path = other.root_path;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.max_files.is_some() {
            self.max_files = other.max_files;
        }
        if other.max_file_size.is_some() {
            self.max_file_size = other.max_file_size;
        }
        if other.read_timeout_ms.is_some() {
            self.read_timeout_ms = other.read_timeout_ms;
        }
        if other.structure_depth.is_some() {
            self.structure_depth = other.structure_depth;
        }
        if other.template.is_some() {
            self.template = other.template;
        }
        if other.sections.is_some() {
            self.sections = other.sections;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.cache_enabled.is_some() {
            self.cache_enabled = other.cache_enabled;
        }
        if other.cache_dir.is_some() {
            self.cache_dir = other.cache_dir;
        }
        if other.parallel.is_some() {
            self.parallel = other.parallel;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(root_path) = &self.root_path {
            settings.root_path = root_path.clone();
        }
        if let Some(exclude_patterns) = &self.exclude_patterns {
            settings.exclude_patterns = exclude_patterns.clone();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = Some(max_depth);
        }
        if let Some(max_files) = self.max_files {
            settings.max_files = Some(max_files);
        }
        if let Some(max_file_size) = self.max_file_size {
            settings.max_file_size = max_file_size;
        }
        if let Some(read_timeout_ms) = self.read_timeout_ms {
            settings.read_timeout_ms = Some(read_timeout_ms);
        }
        if let Some(structure_depth) = self.structure_depth {
            settings.structure_depth = structure_depth;
        }
        if let Some(template) = &self.template {
            settings.template = template.clone();
        }
        if let Some(sections) = &self.sections {
            settings.sections = Some(sections.clone());
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(cache_enabled) = self.cache_enabled {
            settings.cache_enabled = cache_enabled;
        }
        if let Some(cache_dir) = &self.cache_dir {
            settings.cache_dir = Some(cache_dir.clone());
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
