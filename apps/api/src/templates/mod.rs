//! Pluggable visual templates.
//!
//! A template is a named bundle of rendering callbacks for one output
//! format/style; the registry is the fixed set shipped with the binary.
//! Template names are part of the external contract (CLI arguments, API
//! request bodies), so the set is closed rather than discovered at runtime.

pub mod ats_pdf;
pub mod classic_docx;
pub mod classic_pdf;
pub mod modern_pdf;
mod pdf_canvas;

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::render::builder::DocBuilder;
use crate::render::{OutputFormat, RenderError};

pub use ats_pdf::AtsPdfTemplate;
pub use classic_docx::ClassicDocxTemplate;
pub use classic_pdf::ClassicPdfTemplate;
pub use modern_pdf::ModernPdfTemplate;

pub trait Template: Send + Sync {
    /// Registry name (`docx`, `pdf`, `pdf_moderno`, `pdf_ats`).
    fn name(&self) -> &'static str;

    fn format(&self) -> OutputFormat;

    /// ATS styles change output naming and render the keyword section.
    fn is_ats(&self) -> bool {
        false
    }

    /// A fresh builder for one rendering run. Fallible because the PDF
    /// backend registers fonts up front.
    fn builder(&self) -> Result<Box<dyn DocBuilder>, RenderError>;
}

/// The fixed template set, keyed by name.
pub struct TemplateRegistry {
    templates: BTreeMap<&'static str, Arc<dyn Template>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        let all: [Arc<dyn Template>; 4] = [
            Arc::new(ClassicDocxTemplate),
            Arc::new(ClassicPdfTemplate),
            Arc::new(ModernPdfTemplate),
            Arc::new(AtsPdfTemplate),
        ];
        let mut templates = BTreeMap::new();
        for template in all {
            templates.insert(template.name(), template);
        }
        TemplateRegistry { templates }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Template>> {
        self.templates.get(name).cloned()
    }

    /// Lookup with the historical CLI behavior: an unknown name warns and
    /// falls back to the default template of the requested format family.
    pub fn get_or_default(&self, name: &str) -> Arc<dyn Template> {
        if let Some(template) = self.get(name) {
            return template;
        }
        let default = if name.starts_with("docx") { "docx" } else { "pdf" };
        warn!("template '{name}' not found, using default '{default}'");
        self.templates[default].clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.templates.keys().copied().collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_exposes_the_four_shipped_templates() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.names(), vec!["docx", "pdf", "pdf_ats", "pdf_moderno"]);
    }

    #[test]
    fn formats_and_ats_flags_match_the_names() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.get("docx").unwrap().format(), OutputFormat::Docx);
        assert_eq!(registry.get("pdf").unwrap().format(), OutputFormat::Pdf);
        assert!(registry.get("pdf_ats").unwrap().is_ats());
        assert!(!registry.get("pdf_moderno").unwrap().is_ats());
    }

    #[test]
    fn unknown_names_fall_back_per_format_family() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.get_or_default("pdf_fancy").name(), "pdf");
        assert_eq!(registry.get_or_default("docx_fancy").name(), "docx");
        assert_eq!(registry.get_or_default("pdf_moderno").name(), "pdf_moderno");
        assert!(registry.get("nope").is_none());
    }
}
