//! Document sections and identifiers

use crate::error::{Result, ScribeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one independently toggleable document section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Overview,
    Features,
    Technologies,
    Dependencies,
    Structure,
    License,
}

impl SectionId {
    /// All known section identifiers, in default document order
    pub const ALL: [SectionId; 6] = [
        SectionId::Overview,
        SectionId::Features,
        SectionId::Technologies,
        SectionId::Dependencies,
        SectionId::Structure,
        SectionId::License,
    ];

    /// Configuration name of the section
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::Features => "features",
            SectionId::Technologies => "technologies",
            SectionId::Dependencies => "dependencies",
            SectionId::Structure => "structure",
            SectionId::License => "license",
        }
    }

    /// Human-readable section heading
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Overview => "Overview",
            SectionId::Features => "Features",
            SectionId::Technologies => "Technologies",
            SectionId::Dependencies => "Dependencies",
            SectionId::Structure => "Project Structure",
            SectionId::License => "License",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ScribeError;

    /// Parse a configured section name; unknown names are a configuration error
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(SectionId::Overview),
            "features" => Ok(SectionId::Features),
            "technologies" => Ok(SectionId::Technologies),
            "dependencies" => Ok(SectionId::Dependencies),
            "structure" => Ok(SectionId::Structure),
            "license" => Ok(SectionId::License),
            other => Err(ScribeError::unknown_section(other)),
        }
    }
}

/// One composed document section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Rendered content; empty when `included` is false
    pub content: String,
    /// False only when the rendering rule declared "no content available"
    pub included: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_known_sections() {
        assert_eq!(
            "overview".parse::<SectionId>().unwrap(),
            SectionId::Overview
        );
        assert_eq!(
            " License ".parse::<SectionId>().unwrap(),
            SectionId::License
        );
    }

    #[test]
    fn test_from_str_unknown_section_is_config_error() {
        let err = "changelog".parse::<SectionId>().unwrap_err();
        assert!(matches!(err, ScribeError::UnknownSection { name } if name == "changelog"));
    }

    #[test]
    fn test_all_covers_every_name() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>().unwrap(), id);
        }
    }
}
