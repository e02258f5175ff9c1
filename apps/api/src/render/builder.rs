//! The abstract surface a visual template exposes to the section walker.
//!
//! This mirrors the callback bundle the templates share: the walker decides
//! *what* to emit and in which order, the builder decides *how* it looks in
//! the target document library. Default method bodies cover the common
//! rendering; styles that need to deviate (the ATS layout, the DOCX job
//! paragraph) override them.

use crate::render::RenderError;

/// Contact block rendered at the top of the document. Absent fields are
/// empty strings; the builder decides whether to show them.
#[derive(Debug, Clone, Default)]
pub struct ContactBlock {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

pub trait DocBuilder {
    /// Name + contact line + divider.
    fn title_block(&mut self, contact: &ContactBlock);

    fn section_title(&mut self, title: &str);

    fn paragraph(&mut self, text: &str);

    /// Indented bullet line. The caller passes the text without a marker.
    fn bullet(&mut self, text: &str);

    /// Skill with a 0..=5 proficiency level out of five slots.
    fn skill_bar(&mut self, name: &str, level: u8);

    fn page_break(&mut self);

    /// One job entry of the experience section.
    fn job(&mut self, position: Option<&str>, period: Option<&str>, description: &[String]) {
        if let Some(position) = position {
            self.bullet(&format!("\u{2022} {position}"));
        }
        if let Some(period) = period {
            self.paragraph(period);
        }
        for item in description {
            self.bullet(&format!("- {item}"));
        }
    }

    /// One certification line. The DOCX style decorates it; PDF builtin
    /// fonts are WinAnsi-encoded, so the plain default stays ASCII-safe.
    fn certification(&mut self, text: &str) {
        self.paragraph(text);
    }

    /// Extracted keyword list. Only ATS-oriented styles render it.
    fn keywords_section(&mut self, _keywords: &[String]) {}

    /// Consumes the builder and returns the finished document bytes.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError>;
}
