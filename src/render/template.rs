//! Built-in document templates
//!
//! A template owns, for each section identifier, a typed rendering rule: a
//! pure function from the analysis result to the section content. Rules
//! return None to declare "no content available", which excludes the section
//! from the document. Three templates exist: `standard`, `minimal`, and
//! `detailed`.

use crate::error::{Result, ScribeError};
use crate::models::{AnalysisResult, SectionId};
use crate::render::catalog::LicenseCatalog;

/// Everything a rendering rule may draw on
pub struct RenderContext<'a> {
    pub analysis: &'a AnalysisResult,
    pub catalog: &'a dyn LicenseCatalog,
}

/// A typed rendering rule for one section
pub type RenderRule = fn(&RenderContext) -> Option<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    Standard,
    Minimal,
    Detailed,
}

/// A named, read-only document template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    flavor: Flavor,
}

impl Template {
    /// Names of the built-in templates
    pub const AVAILABLE: [&'static str; 3] = ["standard", "minimal", "detailed"];

    /// Resolve a built-in template by name
    pub fn builtin(name: &str) -> Result<Self> {
        let flavor = match name {
            "standard" => Flavor::Standard,
            "minimal" => Flavor::Minimal,
            "detailed" => Flavor::Detailed,
            other => return Err(ScribeError::unknown_template(other)),
        };
        Ok(Self { flavor })
    }

    /// Template name
    pub fn name(&self) -> &'static str {
        match self.flavor {
            Flavor::Standard => "standard",
            Flavor::Minimal => "minimal",
            Flavor::Detailed => "detailed",
        }
    }

    /// Section order used when the configuration does not list sections
    pub fn default_sections(&self) -> &'static [SectionId] {
        match self.flavor {
            Flavor::Minimal => &[
                SectionId::Overview,
                SectionId::Technologies,
                SectionId::License,
            ],
            Flavor::Standard | Flavor::Detailed => &SectionId::ALL,
        }
    }

    /// The rendering rule for a section
    pub fn rule(&self, id: SectionId) -> RenderRule {
        match (self.flavor, id) {
            (_, SectionId::Overview) => render_overview,
            (_, SectionId::Features) => render_features,
            (Flavor::Minimal, SectionId::Technologies) => render_technologies_minimal,
            (Flavor::Detailed, SectionId::Technologies) => render_technologies_detailed,
            (_, SectionId::Technologies) => render_technologies,
            (Flavor::Minimal, SectionId::Dependencies) => render_dependencies_minimal,
            (Flavor::Detailed, SectionId::Dependencies) => render_dependencies_detailed,
            (_, SectionId::Dependencies) => render_dependencies,
            (_, SectionId::Structure) => render_structure,
            (Flavor::Detailed, SectionId::License) => render_license_detailed,
            (_, SectionId::License) => render_license,
        }
    }
}

fn render_overview(ctx: &RenderContext) -> Option<String> {
    let metadata = &ctx.analysis.metadata;

    if let Some(description) = &metadata.description {
        return Some(description.clone());
    }

    match ctx.analysis.languages().next() {
        Some(language) => Some(format!(
            "{} is a {} project.",
            metadata.name, language.name
        )),
        None => Some(format!(
            "{} is a software project analyzed automatically.",
            metadata.name
        )),
    }
}

fn render_features(ctx: &RenderContext) -> Option<String> {
    let metadata = &ctx.analysis.metadata;
    let mut lines = Vec::new();

    if metadata.has_tests {
        lines.push("- Automated test suite");
    }
    if metadata.has_docs {
        lines.push("- Project documentation");
    }
    if metadata.has_ci {
        lines.push("- Continuous integration workflows");
    }
    if metadata.has_docker {
        lines.push("- Container support (Docker)");
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn render_technologies(ctx: &RenderContext) -> Option<String> {
    if ctx.analysis.technologies.is_empty() {
        return None;
    }

    let mut out = String::new();

    let languages: Vec<_> = ctx.analysis.languages().collect();
    if !languages.is_empty() {
        out.push_str("### Languages\n\n");
        for language in languages {
            out.push_str(&format!(
                "- {} ({} {})\n",
                language.name,
                language.count,
                plural(language.count, "file", "files")
            ));
        }
    }

    let frameworks: Vec<_> = ctx.analysis.frameworks().collect();
    if !frameworks.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("### Frameworks & Tooling\n\n");
        for framework in frameworks {
            out.push_str(&format!("- {}\n", framework.name));
        }
    }

    Some(out.trim_end().to_string())
}

fn render_technologies_minimal(ctx: &RenderContext) -> Option<String> {
    if ctx.analysis.technologies.is_empty() {
        return None;
    }
    let names: Vec<&str> = ctx
        .analysis
        .technologies
        .iter()
        .map(|tech| tech.name.as_str())
        .collect();
    Some(names.join(", "))
}

fn render_technologies_detailed(ctx: &RenderContext) -> Option<String> {
    if ctx.analysis.technologies.is_empty() {
        return None;
    }

    let language_total: usize = ctx.analysis.languages().map(|tech| tech.count).sum();
    let mut out = String::new();

    let languages: Vec<_> = ctx.analysis.languages().collect();
    if !languages.is_empty() {
        out.push_str("### Languages\n\n| Language | Files | Share |\n|---|---|---|\n");
        for language in languages {
            let share = (language.count as f64 / language_total as f64) * 100.0;
            out.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                language.name, language.count, share
            ));
        }
    }

    let frameworks: Vec<_> = ctx.analysis.frameworks().collect();
    if !frameworks.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("### Frameworks & Tooling\n\n");
        for framework in frameworks {
            out.push_str(&format!(
                "- {} ({} {})\n",
                framework.name,
                framework.count,
                plural(framework.count, "marker", "markers")
            ));
        }
    }

    Some(out.trim_end().to_string())
}

fn render_dependencies(ctx: &RenderContext) -> Option<String> {
    let manifests = ctx.analysis.manifests();
    if manifests.is_empty() {
        return None;
    }

    let mut out = String::new();
    for manifest in manifests {
        out.push_str(&format!("### `{}`\n\n", manifest.display()));
        for dependency in ctx.analysis.dependencies_of(manifest) {
            out.push_str(&format!("- {} {}\n", dependency.name, dependency.version));
        }
        out.push('\n');
    }
    Some(out.trim_end().to_string())
}

fn render_dependencies_minimal(ctx: &RenderContext) -> Option<String> {
    let manifests = ctx.analysis.manifests();
    if manifests.is_empty() {
        return None;
    }
    let total = ctx.analysis.dependencies.len();
    Some(format!(
        "{} {} declared across {} {}.",
        total,
        plural(total, "dependency", "dependencies"),
        manifests.len(),
        plural(manifests.len(), "manifest", "manifests")
    ))
}

fn render_dependencies_detailed(ctx: &RenderContext) -> Option<String> {
    let manifests = ctx.analysis.manifests();
    if manifests.is_empty() {
        return None;
    }

    let mut out = String::new();
    for manifest in manifests {
        out.push_str(&format!(
            "### `{}`\n\n| Name | Version |\n|---|---|\n",
            manifest.display()
        ));
        for dependency in ctx.analysis.dependencies_of(manifest) {
            out.push_str(&format!(
                "| {} | {} |\n",
                dependency.name, dependency.version
            ));
        }
        out.push('\n');
    }
    Some(out.trim_end().to_string())
}

fn render_structure(ctx: &RenderContext) -> Option<String> {
    if ctx.analysis.root.children.is_empty() {
        return None;
    }
    Some(format!("```\n{}```", ctx.analysis.root.render_ascii()))
}

fn render_license(ctx: &RenderContext) -> Option<String> {
    let license = ctx.analysis.license.as_ref()?;
    let mut out = format!(
        "This project is licensed under the **{}** license (see `{}`).",
        license.identifier,
        license.path.display()
    );
    if let Some(text) = ctx.catalog.text(&license.identifier) {
        out.push_str("\n\n");
        out.push_str(&text);
    }
    Some(out)
}

fn render_license_detailed(ctx: &RenderContext) -> Option<String> {
    let license = ctx.analysis.license.as_ref()?;
    let mut out = render_license(ctx)?;
    out.push_str(&format!(
        "\n\nDetection confidence: {:.2}.",
        license.confidence
    ));
    Some(out)
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Dependency, DirectoryNode, LicenseInfo, ProjectMetadata, Provenance, TechnologyCount,
        TechnologyKind,
    };
    use crate::render::catalog::BuiltinCatalog;
    use std::path::PathBuf;
    use std::time::Duration;

    fn sample_analysis() -> AnalysisResult {
        let mut root = DirectoryNode::new("", "widget");
        root.ensure_dir("src").push_file("main.rs");
        root.push_file("Cargo.toml");
        root.recount();

        AnalysisResult {
            metadata: ProjectMetadata {
                name: "widget".into(),
                description: Some("A sample widget.".into()),
                has_tests: true,
                has_docs: false,
                has_ci: false,
                has_docker: false,
            },
            technologies: vec![
                TechnologyCount {
                    name: "Rust".into(),
                    kind: TechnologyKind::Language,
                    count: 3,
                },
                TechnologyCount {
                    name: "Cargo".into(),
                    kind: TechnologyKind::Framework,
                    count: 1,
                },
            ],
            dependencies: vec![Dependency {
                name: "serde".into(),
                version: "1.0".into(),
                manifest: PathBuf::from("Cargo.toml"),
            }],
            license: Some(LicenseInfo {
                identifier: "MIT".into(),
                path: PathBuf::from("LICENSE"),
                confidence: 1.0,
            }),
            root,
            provenance: Provenance {
                analyzed_at: chrono::Utc::now(),
                cache_hit_ratio: 0.0,
                files_visited: 3,
                duration: Duration::from_millis(10),
                complete: true,
            },
            warnings: Vec::new(),
        }
    }

    fn context(analysis: &AnalysisResult) -> RenderContext<'_> {
        RenderContext {
            analysis,
            catalog: &BuiltinCatalog,
        }
    }

    #[test]
    fn test_unknown_template_is_config_error() {
        let err = Template::builtin("fancy").unwrap_err();
        assert!(matches!(err, ScribeError::UnknownTemplate { name } if name == "fancy"));
    }

    #[test]
    fn test_builtin_names_resolve() {
        for name in Template::AVAILABLE {
            assert_eq!(Template::builtin(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_minimal_default_sections_are_a_subset() {
        let minimal = Template::builtin("minimal").unwrap();
        assert_eq!(minimal.default_sections().len(), 3);
        let standard = Template::builtin("standard").unwrap();
        assert_eq!(standard.default_sections(), &SectionId::ALL);
    }

    #[test]
    fn test_overview_prefers_description() {
        let analysis = sample_analysis();
        let content = render_overview(&context(&analysis)).unwrap();
        assert_eq!(content, "A sample widget.");
    }

    #[test]
    fn test_overview_falls_back_to_top_language() {
        let mut analysis = sample_analysis();
        analysis.metadata.description = None;
        let content = render_overview(&context(&analysis)).unwrap();
        assert_eq!(content, "widget is a Rust project.");
    }

    #[test]
    fn test_license_section_absent_without_license() {
        let mut analysis = sample_analysis();
        analysis.license = None;
        assert_eq!(render_license(&context(&analysis)), None);
    }

    #[test]
    fn test_license_section_names_identifier_and_path() {
        let analysis = sample_analysis();
        let content = render_license(&context(&analysis)).unwrap();
        assert!(content.contains("**MIT**"));
        assert!(content.contains("`LICENSE`"));
    }

    #[test]
    fn test_dependencies_grouped_by_manifest() {
        let analysis = sample_analysis();
        let content = render_dependencies(&context(&analysis)).unwrap();
        assert!(content.contains("### `Cargo.toml`"));
        assert!(content.contains("- serde 1.0"));
    }

    #[test]
    fn test_minimal_dependencies_counts() {
        let analysis = sample_analysis();
        let content = render_dependencies_minimal(&context(&analysis)).unwrap();
        assert_eq!(content, "1 dependency declared across 1 manifest.");
    }

    #[test]
    fn test_detailed_technologies_table_shares_sum() {
        let analysis = sample_analysis();
        let content = render_technologies_detailed(&context(&analysis)).unwrap();
        assert!(content.contains("| Rust | 3 | 100.0% |"));
    }

    #[test]
    fn test_structure_is_fenced() {
        let analysis = sample_analysis();
        let content = render_structure(&context(&analysis)).unwrap();
        assert!(content.starts_with("```\nwidget/"));
        assert!(content.ends_with("```"));
    }

    #[test]
    fn test_features_absent_when_no_facts() {
        let mut analysis = sample_analysis();
        analysis.metadata.has_tests = false;
        assert_eq!(render_features(&context(&analysis)), None);
    }
}
