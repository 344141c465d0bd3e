//! Configuration settings validation

use crate::error::{Result, ScribeError};
use crate::models::config::Settings;
use crate::models::SectionId;
use crate::render::Template;

/// Settings validator for ensuring configuration is valid
///
/// Validation happens before any filesystem traversal, so configuration
/// errors abort the run before partial output can be produced.
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        // Validate exclude patterns
        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                ScribeError::config_error(format!("Invalid exclude pattern '{}': {}", pattern, e))
            })?;
        }

        // Validate depth limits
        if let Some(depth) = settings.max_depth {
            if depth == 0 {
                return Err(ScribeError::config_error("Max depth must be at least 1"));
            }
        }
        if settings.structure_depth == 0 {
            return Err(ScribeError::config_error(
                "Structure depth must be at least 1",
            ));
        }

        // The template must exist
        Template::builtin(&settings.template)?;

        // Every configured section name must be known
        if let Some(sections) = &settings.sections {
            for name in sections {
                name.parse::<SectionId>()?;
            }
        }

        Ok(())
    }
}
