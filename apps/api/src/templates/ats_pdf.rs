//! ATS-optimized PDF style.
//!
//! Applicant tracking systems parse text, not layout: everything here is
//! plain Helvetica with explicit labels, centered header, textual skill
//! levels instead of bars, and a closing keyword section.

use printpdf::BuiltinFont;

use crate::render::builder::{ContactBlock, DocBuilder};
use crate::render::{OutputFormat, RenderError};
use crate::templates::pdf_canvas::{PdfCanvas, TextStyle, INCH_MM};
use crate::templates::Template;

const DARK_GREY: (f32, f32, f32) = (0.2, 0.2, 0.2);
const MID_GREY: (f32, f32, f32) = (0.5, 0.5, 0.5);
const HELVETICA_AVG_CHAR_EM: f32 = 0.5;

pub struct AtsPdfTemplate;

impl Template for AtsPdfTemplate {
    fn name(&self) -> &'static str {
        "pdf_ats"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn is_ats(&self) -> bool {
        true
    }

    fn builder(&self) -> Result<Box<dyn DocBuilder>, RenderError> {
        let canvas = PdfCanvas::new(
            "Curriculum",
            INCH_MM / 2.0,
            BuiltinFont::Helvetica,
            BuiltinFont::HelveticaBold,
            HELVETICA_AVG_CHAR_EM,
        )?;
        Ok(Box::new(AtsPdfBuilder { canvas }))
    }
}

/// Textual proficiency label the ATS style uses instead of a bar.
fn level_label(level: u8) -> &'static str {
    match level {
        1 => "Básico",
        2 => "Intermediário Baixo",
        3 => "Intermediário",
        4 => "Avançado",
        5 => "Especialista",
        _ => "",
    }
}

struct AtsPdfBuilder {
    canvas: PdfCanvas,
}

impl DocBuilder for AtsPdfBuilder {
    fn title_block(&mut self, contact: &ContactBlock) {
        self.canvas
            .text(&contact.name, TextStyle::new(18.0).bold().centered());
        self.canvas.space(2.5);

        let line = format!(
            "E-mail: {} | Telefone: {} | LinkedIn: {}",
            contact.email, contact.phone, contact.linkedin
        );
        self.canvas
            .text(&line, TextStyle::new(11.0).color(DARK_GREY).centered());

        self.canvas.space(2.5);
        self.canvas.rule(0.7, MID_GREY);
        self.canvas.space(5.0);
    }

    fn section_title(&mut self, title: &str) {
        self.canvas.space(5.0);
        self.canvas.text(title, TextStyle::new(14.0).bold());
        self.canvas.space(2.5);
    }

    fn paragraph(&mut self, text: &str) {
        self.canvas.text(text, TextStyle::new(11.0));
        self.canvas.space(2.5);
    }

    fn bullet(&mut self, text: &str) {
        self.canvas.text(text, TextStyle::new(11.0).indent(7.0));
    }

    fn skill_bar(&mut self, name: &str, level: u8) {
        self.canvas
            .text(&format!("{name}: {}", level_label(level)), TextStyle::new(11.0));
        self.canvas.space(1.3);
    }

    fn job(&mut self, position: Option<&str>, period: Option<&str>, description: &[String]) {
        if let Some(position) = position {
            self.canvas.space(2.5);
            self.canvas
                .text(&format!("Cargo: {position}"), TextStyle::new(12.0).bold().color(DARK_GREY));
        }
        if let Some(period) = period {
            self.canvas
                .text(&format!("Período: {period}"), TextStyle::new(11.0));
        }
        self.canvas.space(1.3);
        if !description.is_empty() {
            self.canvas
                .text("Responsabilidades e Realizações:", TextStyle::new(11.0).bold());
            for item in description {
                self.bullet(&format!("\u{2022} {item}"));
            }
        }
        self.canvas.space(2.5);
    }

    fn keywords_section(&mut self, keywords: &[String]) {
        if keywords.is_empty() {
            return;
        }
        self.section_title("Outras Competências");
        self.canvas
            .text(&keywords.join(", "), TextStyle::new(11.0));
        self.canvas.space(5.0);
    }

    fn page_break(&mut self) {
        self.canvas.page_break();
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        self.canvas.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_labels_cover_the_five_levels() {
        assert_eq!(level_label(1), "Básico");
        assert_eq!(level_label(3), "Intermediário");
        assert_eq!(level_label(5), "Especialista");
        assert_eq!(level_label(0), "");
    }
}
