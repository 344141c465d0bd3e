//! Dependency extraction from recognized manifest files
//!
//! A fixed set of manifest file names is recognized by exact name match at
//! any depth. Each manifest is parsed into name/version pairs; a manifest
//! that fails to parse contributes zero dependencies plus a non-fatal parse
//! warning. Within a single manifest, duplicate names are deduplicated with
//! the last occurrence winning; duplicates across manifests are retained.

use super::{Contribution, FileAnalyzer, ManifestDependency, ManifestMetadata};
use crate::models::FileDescriptor;
use std::collections::HashMap;

/// Manifest file names recognized by exact match at any depth
pub const MANIFEST_FILES: &[&str] = &[
    "package.json",
    "Cargo.toml",
    "pyproject.toml",
    "requirements.txt",
    "go.mod",
];

/// Extractor for declared dependencies and manifest metadata
pub struct DependencyExtractor;

impl DependencyExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Check whether a file name is a recognized manifest
    pub fn is_manifest(file_name: &str) -> bool {
        MANIFEST_FILES.contains(&file_name)
    }

    /// Parse a manifest by file name, returning its dependencies and metadata
    fn parse_manifest(
        file_name: &str,
        content: &str,
    ) -> Result<(Vec<ManifestDependency>, ManifestMetadata), String> {
        match file_name {
            "package.json" => Self::parse_package_json(content),
            "Cargo.toml" => Self::parse_cargo_toml(content),
            "pyproject.toml" => Self::parse_pyproject(content),
            "requirements.txt" => Ok(Self::parse_requirements(content)),
            "go.mod" => Ok(Self::parse_go_mod(content)),
            other => Err(format!("unrecognized manifest: {}", other)),
        }
    }

    fn parse_package_json(
        content: &str,
    ) -> Result<(Vec<ManifestDependency>, ManifestMetadata), String> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|err| err.to_string())?;

        let obj = value
            .as_object()
            .ok_or_else(|| "root value is not an object".to_string())?;

        let metadata = ManifestMetadata {
            name: obj
                .get("name")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            description: obj
                .get("description")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
        };

        let mut dependencies = Vec::new();
        for table in ["dependencies", "devDependencies"] {
            if let Some(entries) = obj.get(table).and_then(|v| v.as_object()) {
                for (name, version) in entries {
                    dependencies.push(ManifestDependency {
                        name: name.clone(),
                        version: version.as_str().unwrap_or("*").to_string(),
                    });
                }
            }
        }

        Ok((Self::dedup_last_wins(dependencies), metadata))
    }

    fn parse_cargo_toml(
        content: &str,
    ) -> Result<(Vec<ManifestDependency>, ManifestMetadata), String> {
        let value: toml::Value = toml::from_str(content).map_err(|err| err.to_string())?;

        let package = value.get("package");
        let metadata = ManifestMetadata {
            name: package
                .and_then(|p| p.get("name"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            description: package
                .and_then(|p| p.get("description"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
        };

        let mut dependencies = Vec::new();
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(entries) = value.get(table).and_then(|v| v.as_table()) {
                for (name, spec) in entries {
                    // A dependency is either "1.0" or a table with a version key
                    let version = match spec {
                        toml::Value::String(version) => version.clone(),
                        toml::Value::Table(table) => table
                            .get("version")
                            .and_then(|v| v.as_str())
                            .unwrap_or("*")
                            .to_string(),
                        _ => "*".to_string(),
                    };
                    dependencies.push(ManifestDependency {
                        name: name.clone(),
                        version,
                    });
                }
            }
        }

        Ok((Self::dedup_last_wins(dependencies), metadata))
    }

    fn parse_pyproject(
        content: &str,
    ) -> Result<(Vec<ManifestDependency>, ManifestMetadata), String> {
        let value: toml::Value = toml::from_str(content).map_err(|err| err.to_string())?;

        let project = value.get("project");
        let poetry = value.get("tool").and_then(|t| t.get("poetry"));

        let metadata = ManifestMetadata {
            name: project
                .or(poetry)
                .and_then(|p| p.get("name"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            description: project
                .or(poetry)
                .and_then(|p| p.get("description"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
        };

        let mut dependencies = Vec::new();

        // PEP 621 style: dependencies = ["requests>=2.31", ...]
        if let Some(entries) = project
            .and_then(|p| p.get("dependencies"))
            .and_then(|v| v.as_array())
        {
            for entry in entries {
                if let Some(requirement) = entry.as_str() {
                    dependencies.push(Self::split_requirement(requirement));
                }
            }
        }

        // Poetry style: [tool.poetry.dependencies] table
        if let Some(entries) = poetry
            .and_then(|p| p.get("dependencies"))
            .and_then(|v| v.as_table())
        {
            for (name, spec) in entries {
                if name == "python" {
                    continue;
                }
                let version = match spec {
                    toml::Value::String(version) => version.clone(),
                    toml::Value::Table(table) => table
                        .get("version")
                        .and_then(|v| v.as_str())
                        .unwrap_or("*")
                        .to_string(),
                    _ => "*".to_string(),
                };
                dependencies.push(ManifestDependency {
                    name: name.clone(),
                    version,
                });
            }
        }

        Ok((Self::dedup_last_wins(dependencies), metadata))
    }

    /// Parse a requirements.txt; malformed lines are skipped, never fatal
    fn parse_requirements(content: &str) -> (Vec<ManifestDependency>, ManifestMetadata) {
        let mut dependencies = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
                continue;
            }
            dependencies.push(Self::split_requirement(line));
        }

        (Self::dedup_last_wins(dependencies), ManifestMetadata::default())
    }

    /// Parse a go.mod; the module name feeds the manifest metadata
    fn parse_go_mod(content: &str) -> (Vec<ManifestDependency>, ManifestMetadata) {
        let mut dependencies = Vec::new();
        let mut metadata = ManifestMetadata::default();
        let mut in_require_block = false;

        for line in content.lines() {
            let line = line.split("//").next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            if let Some(module) = line.strip_prefix("module ") {
                let module = module.trim();
                metadata.name = module
                    .rsplit('/')
                    .next()
                    .map(|segment| segment.to_string())
                    .or_else(|| Some(module.to_string()));
                continue;
            }

            if line == "require (" {
                in_require_block = true;
                continue;
            }
            if in_require_block && line == ")" {
                in_require_block = false;
                continue;
            }

            let requirement = if in_require_block {
                Some(line)
            } else {
                line.strip_prefix("require ")
            };

            if let Some(requirement) = requirement {
                let mut parts = requirement.split_whitespace();
                if let (Some(name), Some(version)) = (parts.next(), parts.next()) {
                    dependencies.push(ManifestDependency {
                        name: name.to_string(),
                        version: version.to_string(),
                    });
                }
            }
        }

        (Self::dedup_last_wins(dependencies), metadata)
    }

    /// Split a PEP 508-ish requirement into name and constraint
    fn split_requirement(requirement: &str) -> ManifestDependency {
        let requirement = requirement.split(';').next().unwrap_or("").trim();
        let boundary = requirement
            .find(|c| "<>=!~ [".contains(c))
            .unwrap_or(requirement.len());

        let name = requirement[..boundary].trim().to_string();
        let version = requirement[boundary..].trim().to_string();
        ManifestDependency {
            name,
            version: if version.is_empty() {
                "*".to_string()
            } else {
                version
            },
        }
    }

    /// Deduplicate by name, keeping the first position and the last value
    fn dedup_last_wins(dependencies: Vec<ManifestDependency>) -> Vec<ManifestDependency> {
        let mut out: Vec<ManifestDependency> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for dependency in dependencies {
            match index.get(&dependency.name) {
                Some(&position) => out[position] = dependency,
                None => {
                    index.insert(dependency.name.clone(), out.len());
                    out.push(dependency);
                }
            }
        }
        out
    }
}

impl Default for DependencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FileAnalyzer for DependencyExtractor {
    fn name(&self) -> &'static str {
        "dependencies"
    }

    fn needs_content(&self, descriptor: &FileDescriptor) -> bool {
        Self::is_manifest(descriptor.file_name())
    }

    fn analyze(&self, descriptor: &FileDescriptor, content: Option<&[u8]>) -> Contribution {
        let file_name = descriptor.file_name();
        if !Self::is_manifest(file_name) {
            return Contribution::default();
        }

        let Some(content) = content else {
            return Contribution {
                parse_warning: Some("manifest content unavailable".to_string()),
                ..Contribution::default()
            };
        };

        let text = String::from_utf8_lossy(content);
        match Self::parse_manifest(file_name, &text) {
            Ok((dependencies, metadata)) => Contribution {
                dependencies,
                metadata: if metadata.is_empty() {
                    None
                } else {
                    Some(metadata)
                },
                ..Contribution::default()
            },
            Err(message) => Contribution {
                parse_warning: Some(message),
                ..Contribution::default()
            },
        }
    }
}
