//! Document generation use case
//!
//! Ties the analysis pipeline to the section composer and renderer. All
//! configuration is resolved up front, so unknown templates or section
//! identifiers fail before any filesystem traversal occurs.

use crate::core::pipeline::{AnalysisPipeline, CancelToken};
use crate::error::Result;
use crate::models::{AnalysisResult, Section, SectionId, Settings};
use crate::render::{
    resolve_sections, BuiltinCatalog, DocumentRenderer, LicenseCatalog, SectionComposer, Template,
};

/// A generated document together with the analysis it came from
#[derive(Debug)]
pub struct GeneratedDocument {
    /// Final rendered markup
    pub document: String,
    /// Composed sections, including the excluded ones
    pub sections: Vec<Section>,
    /// The immutable analysis result backing the document
    pub analysis: AnalysisResult,
}

/// End-to-end README generator
pub struct Generator {
    settings: Settings,
    template: Template,
    sections: Vec<SectionId>,
    catalog: Box<dyn LicenseCatalog>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("settings", &self.settings)
            .field("template", &self.template)
            .field("sections", &self.sections)
            .field("catalog", &"<dyn LicenseCatalog>")
            .finish()
    }
}

impl Generator {
    /// Create a generator, resolving template and section configuration
    pub fn new(settings: Settings) -> Result<Self> {
        let template = Template::builtin(&settings.template)?;
        let sections = match &settings.sections {
            Some(names) => resolve_sections(names)?,
            None => template.default_sections().to_vec(),
        };

        Ok(Self {
            settings,
            template,
            sections,
            catalog: Box::new(BuiltinCatalog),
        })
    }

    /// Replace the license text catalog
    pub fn with_catalog(mut self, catalog: Box<dyn LicenseCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// The resolved section order
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Analyze the project and render the document
    pub fn generate(&self, cancel: &CancelToken) -> Result<GeneratedDocument> {
        self.generate_with_progress(cancel, |_, _, _| {})
    }

    /// Analyze with progress reporting and render the document
    pub fn generate_with_progress<F>(
        &self,
        cancel: &CancelToken,
        progress: F,
    ) -> Result<GeneratedDocument>
    where
        F: Fn(usize, usize, &str) + Send + Sync,
    {
        let pipeline = AnalysisPipeline::new(self.settings.clone());
        let analysis = pipeline.run_with_progress(cancel, progress)?;
        Ok(self.render(analysis))
    }

    /// Render a document from an existing analysis result
    pub fn render(&self, analysis: AnalysisResult) -> GeneratedDocument {
        let composer = SectionComposer::new(&self.template, self.catalog.as_ref());
        let sections = composer.compose(&analysis, &self.sections);
        let document = DocumentRenderer::new().render(&analysis.metadata.name, &sections);

        GeneratedDocument {
            document,
            sections,
            analysis,
        }
    }
}
