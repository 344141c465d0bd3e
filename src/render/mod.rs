//! Document composition and rendering

pub mod catalog;
pub mod composer;
pub mod renderer;
pub mod template;

pub use catalog::{BuiltinCatalog, EmptyCatalog, LicenseCatalog};
pub use composer::{resolve_sections, SectionComposer};
pub use renderer::DocumentRenderer;
pub use template::{RenderContext, RenderRule, Template};
