//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScribeError};
use crate::models::config::PartialSettings;

/// Template written by `scribe --init`
const DEFAULT_CONFIG: &str = r#"# Scribe configuration file
#
# Every key is optional; unset keys fall back to built-in defaults.

# Project root to analyze
# root_path = "."

# Patterns for directories and files to exclude from the walk
# exclude_patterns = ["node_modules", ".git", "target", "dist", "build"]

# Maximum directory depth to traverse
# max_depth = 16

# Maximum number of files to visit before stopping
# max_files = 50000

# Size cap in bytes; larger files are recorded but not hashed
# max_file_size = 4194304

# Per-file read timeout in milliseconds
# read_timeout_ms = 5000

# Depth at which the structure section collapses deeper entries
# structure_depth = 4

# Template used to render the document: standard, minimal, detailed
# template = "standard"

# Ordered section list; omit to use the template's default order
# sections = ["overview", "features", "technologies", "dependencies", "structure", "license"]

# Output file path; omit to write to stdout
# output_file = "README.md"

# Reuse per-file results from the persisted cache
# cache_enabled = true

# Use parallel processing for the analysis fan-out
# parallel = true
"#;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScribeError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ScribeError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| ScribeError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(root_path) = &settings.root_path {
        if root_path.as_os_str().is_empty() {
            return Err(ScribeError::config_error(format!(
                "Invalid empty root_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(ScribeError::config_error(format!(
                    "Empty exclude pattern in config file: {}",
                    path.display()
                )));
            }

            // Try to compile the pattern to check validity
            glob::Pattern::new(pattern).map_err(|e| {
                ScribeError::config_error(format!(
                    "Invalid exclude pattern '{}' in config file: {}: {}",
                    pattern,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(depth) = settings.max_depth {
        if depth == 0 {
            return Err(ScribeError::config_error(format!(
                "Invalid max_depth 0 in config file: {}. Must be at least 1.",
                path.display()
            )));
        }
    }

    if let Some(depth) = settings.structure_depth {
        if depth == 0 {
            return Err(ScribeError::config_error(format!(
                "Invalid structure_depth 0 in config file: {}. Must be at least 1.",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(ScribeError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    // Check current directory first
    let current_dir_config = PathBuf::from(".scribe.toml");
    if current_dir_config.exists() {
        return Ok(Some(parse_config_file(current_dir_config)?));
    }

    // Check user home directory next
    if let Some(home_dir) = dirs::home_dir() {
        let home_config = home_dir.join(".scribe.toml");
        if home_config.exists() {
            return Ok(Some(parse_config_file(home_config)?));
        }
    }

    // Check XDG config directory if available
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("scribe").join("config.toml");
        if xdg_config.exists() {
            return Ok(Some(parse_config_file(xdg_config)?));
        }
    }

    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(ScribeError::io_error)?;
        }
    }

    fs::write(path, DEFAULT_CONFIG).map_err(ScribeError::io_error)?;

    Ok(())
}
