//! Section composition
//!
//! Maps the analysis result onto the configured ordered section list,
//! invoking each section's rendering rule from the chosen template. A rule
//! returning None marks the section as not included; unknown section
//! identifiers never reach this point (they are a configuration error).

use crate::error::Result;
use crate::models::{AnalysisResult, Section, SectionId};
use crate::render::catalog::LicenseCatalog;
use crate::render::template::{RenderContext, Template};

/// Composer producing the ordered section sequence
pub struct SectionComposer<'a> {
    template: &'a Template,
    catalog: &'a dyn LicenseCatalog,
}

impl<'a> SectionComposer<'a> {
    /// Create a composer for a template and license catalog
    pub fn new(template: &'a Template, catalog: &'a dyn LicenseCatalog) -> Self {
        Self { template, catalog }
    }

    /// Compose sections in the given order from the analysis result
    ///
    /// Deterministic: the same analysis, template, and section list always
    /// produce the same sequence.
    pub fn compose(&self, analysis: &AnalysisResult, sections: &[SectionId]) -> Vec<Section> {
        let ctx = RenderContext {
            analysis,
            catalog: self.catalog,
        };

        sections
            .iter()
            .map(|&id| match (self.template.rule(id))(&ctx) {
                Some(content) => Section {
                    id,
                    content,
                    included: true,
                },
                None => Section {
                    id,
                    content: String::new(),
                    included: false,
                },
            })
            .collect()
    }
}

/// Resolve configured section names into identifiers
///
/// Fails with a configuration error on the first unknown name, before any
/// filesystem work happens.
pub fn resolve_sections(names: &[String]) -> Result<Vec<SectionId>> {
    names.iter().map(|name| name.parse()).collect()
}
