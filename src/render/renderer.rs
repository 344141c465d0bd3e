//! Document rendering
//!
//! Concatenates included sections, in their configured order, into the final
//! markup string. Rendering is deterministic: the same section sequence
//! always yields byte-identical output, which supports round-trip testing
//! and preview-before-save.

use crate::models::Section;

/// Renderer for the final markdown document
pub struct DocumentRenderer;

impl DocumentRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the document with the given title and section sequence
    pub fn render(&self, title: &str, sections: &[Section]) -> String {
        let mut out = format!("# {}\n", title);

        for section in sections.iter().filter(|section| section.included) {
            out.push('\n');
            out.push_str("## ");
            out.push_str(section.id.title());
            out.push_str("\n\n");
            out.push_str(section.content.trim_end());
            out.push('\n');
        }

        out
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionId;

    fn section(id: SectionId, content: &str, included: bool) -> Section {
        Section {
            id,
            content: content.to_string(),
            included,
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let sections = vec![
            section(SectionId::Overview, "An overview.", true),
            section(SectionId::License, "", false),
            section(SectionId::Structure, "```\nproject/\n```", true),
        ];

        let renderer = DocumentRenderer::new();
        let first = renderer.render("project", &sections);
        let second = renderer.render("project", &sections);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_excluded_sections_are_omitted() {
        let sections = vec![
            section(SectionId::Overview, "An overview.", true),
            section(SectionId::License, "hidden", false),
        ];

        let rendered = DocumentRenderer::new().render("project", &sections);
        assert!(rendered.contains("## Overview"));
        assert!(!rendered.contains("## License"));
        assert!(!rendered.contains("hidden"));
    }

    #[test]
    fn test_header_order_follows_section_order() {
        let sections = vec![
            section(SectionId::License, "MIT", true),
            section(SectionId::Overview, "Text", true),
        ];

        let rendered = DocumentRenderer::new().render("project", &sections);
        let license_at = rendered.find("## License").unwrap();
        let overview_at = rendered.find("## Overview").unwrap();
        assert!(license_at < overview_at);
    }

    #[test]
    fn test_title_heading_comes_first() {
        let rendered = DocumentRenderer::new().render("widget", &[]);
        assert_eq!(rendered, "# widget\n");
    }
}
