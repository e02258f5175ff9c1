//! Classic DOCX style: 22pt name, emoji contact icons, blue section markers
//! and character-glyph skill bars. DOCX text is UTF-8 throughout, so emoji
//! are safe here, unlike in the builtin-font PDF styles.

use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run};

use crate::render::builder::{ContactBlock, DocBuilder};
use crate::render::{OutputFormat, RenderError};
use crate::templates::Template;

/// Accent blue, as a DOCX hex color.
const BLUE: &str = "2F75B5";

pub struct ClassicDocxTemplate;

impl Template for ClassicDocxTemplate {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Docx
    }

    fn builder(&self) -> Result<Box<dyn DocBuilder>, RenderError> {
        Ok(Box::new(ClassicDocxBuilder { docx: Docx::new() }))
    }
}

struct ClassicDocxBuilder {
    docx: Docx,
}

impl ClassicDocxBuilder {
    fn push(&mut self, paragraph: Paragraph) {
        let docx = std::mem::take(&mut self.docx);
        self.docx = docx.add_paragraph(paragraph);
    }
}

impl DocBuilder for ClassicDocxBuilder {
    fn title_block(&mut self, contact: &ContactBlock) {
        // Run sizes are half-points: 44 = 22pt.
        self.push(
            Paragraph::new()
                .add_run(Run::new().add_text(contact.name.as_str()).size(44).bold())
                .align(AlignmentType::Left),
        );

        let mut line = Paragraph::new();
        if !contact.email.is_empty() {
            line = line
                .add_run(Run::new().add_text("\u{1F4E7} ").bold())
                .add_run(Run::new().add_text(format!("{}   ", contact.email)));
        }
        if !contact.phone.is_empty() {
            line = line
                .add_run(Run::new().add_text("\u{1F4F1} ").bold())
                .add_run(Run::new().add_text(format!("{}   ", contact.phone)));
        }
        if !contact.linkedin.is_empty() {
            line = line
                .add_run(Run::new().add_text("\u{1F310} ").bold())
                .add_run(Run::new().add_text(contact.linkedin.as_str()));
        }
        self.push(line.align(AlignmentType::Left));

        self.push(Paragraph::new().add_run(Run::new().add_text("\u{2015}".repeat(50))));
    }

    fn section_title(&mut self, title: &str) {
        self.push(
            Paragraph::new()
                .add_run(Run::new().add_text("\u{25A0} ").color(BLUE).size(28).bold())
                .add_run(Run::new().add_text(title).size(28).bold())
                .align(AlignmentType::Left),
        );
    }

    fn paragraph(&mut self, text: &str) {
        self.push(Paragraph::new().add_run(Run::new().add_text(text)));
    }

    fn bullet(&mut self, text: &str) {
        self.push(
            Paragraph::new()
                .add_run(Run::new().add_text(text))
                .indent(Some(360), None, None, None),
        );
    }

    fn skill_bar(&mut self, name: &str, level: u8) {
        let level = level.min(5);
        let bar = "\u{25A0}".repeat(level as usize) + &"\u{25A1}".repeat(5 - level as usize);
        self.push(
            Paragraph::new()
                .add_run(Run::new().add_text(format!("{name}: ")).size(22))
                .add_run(Run::new().add_text(bar).color(BLUE)),
        );
    }

    fn job(&mut self, position: Option<&str>, period: Option<&str>, description: &[String]) {
        if let Some(position) = position {
            self.bullet(&format!("\u{2022} {position}"));
        }
        if let Some(period) = period {
            self.paragraph(period);
        }
        for item in description {
            self.paragraph(&format!("- {item}"));
        }
    }

    fn certification(&mut self, text: &str) {
        self.push(
            Paragraph::new()
                .add_run(Run::new().add_text("\u{1F3C5} ").bold())
                .add_run(Run::new().add_text(text)),
        );
    }

    fn page_break(&mut self) {
        self.push(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        let mut cursor = Cursor::new(Vec::new());
        self.docx
            .build()
            .pack(&mut cursor)
            .map_err(|e| RenderError::Docx(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_a_zip_container() {
        let template = ClassicDocxTemplate;
        let mut builder = template.builder().unwrap();
        builder.title_block(&ContactBlock {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            linkedin: String::new(),
        });
        builder.section_title("Skills");
        builder.skill_bar("Rust", 4);
        builder.page_break();
        let bytes = builder.finish().unwrap();
        // DOCX is a zip archive.
        assert!(bytes.starts_with(b"PK"));
    }
}
