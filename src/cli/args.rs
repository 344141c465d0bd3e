//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Scribe - project analyzer and README generator
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze a project tree and generate a structured README")]
#[command(long_about = "Scribe analyzes a software project's directory tree and synthesizes a \
structured README describing it: detected languages and frameworks, declared dependencies, \
license, and file organization. It is meant for developers and CI pipelines that want \
consistent project documentation without manual authoring.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Analyze the current directory and print the README to stdout
    scribe

    # Analyze a specific directory
    scribe --path ./my-project

    # Write the README next to the project
    scribe --path ./my-project --output-file ./my-project/README.md

    # Exclude directories (can specify multiple patterns)
    scribe --exclude node_modules --exclude .git

Templates & Sections:
    # Use the minimal template
    scribe --template minimal

    # List the available templates and their default sections
    scribe --list-templates

    # Only render selected sections, in the given order
    scribe --sections overview --sections license

Performance Options:
    # Limit traversal depth and file count
    scribe --max-depth 6 --max-files 20000

    # Disable the persisted analysis cache
    scribe --no-cache

    # Disable parallel classification
    scribe --no-parallel

Configuration:
    # Use a specific configuration file
    scribe --config ./scribe.toml

    # Create a default configuration file (.scribe.toml)
    scribe --init

Verbosity:
    # Quiet mode: only the document and warnings
    scribe --quiet

    # Verbose mode with per-file progress
    scribe --verbose
")]
pub struct Args {
    /// Project root to analyze
    #[arg(short, long, value_name = "PATH", help = "Project directory to analyze (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Exclude paths matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for paths to exclude (can be specified multiple times, e.g., --exclude node_modules --exclude .git)")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse")]
    pub max_depth: Option<usize>,

    /// Maximum number of files to visit
    #[arg(long, value_name = "COUNT", help = "Stop the walk after visiting this many files")]
    pub max_files: Option<usize>,

    /// Size cap in bytes above which file content is not hashed
    #[arg(long, value_name = "BYTES", help = "Files larger than this are recorded but their content is not hashed (default: 4194304)")]
    pub max_file_size: Option<u64>,

    /// Per-file read timeout in milliseconds
    #[arg(long, value_name = "MS", help = "Per-file read timeout in milliseconds; a timed-out file is skipped with a warning (default: 5000)")]
    pub read_timeout: Option<u64>,

    /// Depth at which the structure section collapses deeper entries
    #[arg(long, value_name = "DEPTH", help = "Depth at which the project structure section collapses deeper entries into a counted leaf (default: 4)")]
    pub structure_depth: Option<usize>,

    /// Template used to render the document
    #[arg(short, long, value_name = "NAME", help = "Document template: standard, minimal, or detailed (default: standard)")]
    pub template: Option<String>,

    /// Sections to render, in order
    #[arg(long, value_name = "SECTION", help = "Section to include, in order (can be specified multiple times; defaults to the template's section list)")]
    pub sections: Vec<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE", help = "File to write the document to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .scribe.toml in the current directory if present)")]
    pub config: Option<PathBuf>,

    /// Disable the persisted analysis cache
    #[arg(long, help = "Disable the persisted analysis cache (forces re-classification of every file)")]
    pub no_cache: bool,

    /// Custom cache directory path
    #[arg(long, value_name = "DIR", help = "Custom cache directory path (defaults to the user cache directory)")]
    pub cache_dir: Option<PathBuf>,

    /// Disable parallel processing
    #[arg(long, help = "Disable parallel classification (single-threaded mode)")]
    pub no_parallel: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only the document and warnings)")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show detailed progress and debug information")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored terminal output (useful when piping)")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable progress bars (useful for CI environments)")]
    pub no_progress: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.scribe.toml) in the current directory")]
    pub init: bool,

    /// List the available templates
    #[arg(long, help = "List the available templates and their default section order")]
    pub list_templates: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
