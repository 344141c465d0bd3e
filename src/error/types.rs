//! Error types and definitions for Scribe
//!
//! This module provides the error handling system for the Scribe application,
//! including the error enum, warning types, result alias, and severity model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for Scribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    /// Project root is missing or unreadable
    #[error("Cannot access project root {path}: {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Unknown section identifier in the configured section list
    #[error("Unknown section identifier: {name}")]
    UnknownSection { name: String },

    /// Unknown template name
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
    },

    /// JSON parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Cache error
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Pipeline execution error
    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl ScribeError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            ScribeError::JsonParse { .. } => ErrorSeverity::Warning,
            ScribeError::TomlParse { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            ScribeError::Access { .. } => ErrorSeverity::Critical,
            ScribeError::InvalidPath { .. } => ErrorSeverity::Critical,
            ScribeError::Config { .. } => ErrorSeverity::Critical,
            ScribeError::UnknownSection { .. } => ErrorSeverity::Critical,
            ScribeError::UnknownTemplate { .. } => ErrorSeverity::Critical,
            ScribeError::GlobPattern { .. } => ErrorSeverity::Critical,
            ScribeError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ScribeError::ConfigRead { .. } => ErrorSeverity::Critical,
            ScribeError::ConfigParse { .. } => ErrorSeverity::Critical,
            ScribeError::OutputWrite { .. } => ErrorSeverity::Critical,
            ScribeError::StdoutWrite { .. } => ErrorSeverity::Critical,

            // Regular errors - current operation fails but overall process can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ScribeError::Access { path, source } => {
                format!(
                    "Cannot access project root '{}': {}. Check that the path exists and is readable.",
                    path.display(),
                    source
                )
            }
            ScribeError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid directory path.",
                    path.display()
                )
            }
            ScribeError::UnknownSection { name } => {
                format!(
                    "Unknown section identifier '{}'. Valid sections are: overview, features, technologies, dependencies, structure, license.",
                    name
                )
            }
            ScribeError::UnknownTemplate { name } => {
                format!(
                    "Unknown template '{}'. Run 'scribe --list-templates' to see the available templates.",
                    name
                )
            }
            ScribeError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create a config file with 'scribe --init' or use command line options.",
                    path.display()
                )
            }
            ScribeError::JsonParse { file, source } => {
                format!(
                    "Invalid JSON in '{}': {}. Please check the file format.",
                    file.display(),
                    source
                )
            }
            ScribeError::Io { source } => {
                format!(
                    "File system error: {}. Check disk space and permissions.",
                    source
                )
            }
            ScribeError::OutputWrite { path, .. } => {
                format!(
                    "Cannot write output to '{}'. Check that the parent directory exists and is writable.",
                    path.display()
                )
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an access error for the project root
    pub fn access_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScribeError::Access {
            path: path.into(),
            source,
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        ScribeError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ScribeError::Config {
            message: message.into(),
        }
    }

    /// Create an unknown-section error
    pub fn unknown_section(name: impl Into<String>) -> Self {
        ScribeError::UnknownSection { name: name.into() }
    }

    /// Create an unknown-template error
    pub fn unknown_template(name: impl Into<String>) -> Self {
        ScribeError::UnknownTemplate { name: name.into() }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ScribeError::JsonParse {
            file: file.into(),
            source,
        }
    }

    /// Create a cache error
    pub fn cache_error(message: impl Into<String>) -> Self {
        ScribeError::Cache {
            message: message.into(),
        }
    }

    /// Create a pipeline error
    pub fn pipeline_error(message: impl Into<String>) -> Self {
        ScribeError::Pipeline {
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for ScribeError {
    fn from(err: std::io::Error) -> Self {
        ScribeError::io_error(err)
    }
}

impl From<toml::de::Error> for ScribeError {
    fn from(err: toml::de::Error) -> Self {
        ScribeError::TomlParse { source: err }
    }
}

impl From<glob::PatternError> for ScribeError {
    fn from(err: glob::PatternError) -> Self {
        ScribeError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for ScribeError {
    fn from(err: serde_json::Error) -> Self {
        ScribeError::JsonSerialize { source: err }
    }
}

/// Result type alias for Scribe operations
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Kinds of non-fatal warnings accumulated during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// File or directory could not be read and was skipped
    Unreadable,
    /// File exceeded the size cap and was recorded without a content hash
    Oversized,
    /// File read exceeded the per-file timeout and was skipped
    TimedOut,
    /// A recognized manifest failed to parse
    ParseFailure,
    /// Traversal stopped early because the file count cap was reached
    Truncated,
    /// The analysis cache could not be loaded or flushed
    Cache,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::Unreadable => write!(f, "unreadable"),
            WarningKind::Oversized => write!(f, "oversized"),
            WarningKind::TimedOut => write!(f, "timed-out"),
            WarningKind::ParseFailure => write!(f, "parse-failure"),
            WarningKind::Truncated => write!(f, "truncated"),
            WarningKind::Cache => write!(f, "cache"),
        }
    }
}

/// A non-fatal warning tied to a path
///
/// Warnings never abort a run. They are accumulated during analysis and
/// reported alongside the generated document, separate from the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub path: PathBuf,
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a new warning
    pub fn new(path: impl Into<PathBuf>, kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.path.display(), self.message)
    }
}
