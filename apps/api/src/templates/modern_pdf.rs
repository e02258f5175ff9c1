//! Modern PDF style: Helvetica on A4 with 0.5" margins, a light-blue header
//! band, dark-blue headings and two-tone skill squares.

use printpdf::BuiltinFont;

use crate::render::builder::{ContactBlock, DocBuilder};
use crate::render::{OutputFormat, RenderError};
use crate::templates::pdf_canvas::{PdfCanvas, TextStyle, INCH_MM};
use crate::templates::Template;

const DARK_BLUE: (f32, f32, f32) = (0.1, 0.2, 0.4);
const LIGHT_BLUE: (f32, f32, f32) = (0.6, 0.8, 0.9);
const GREY: (f32, f32, f32) = (0.9, 0.9, 0.9);
const CONTACT_GREY: (f32, f32, f32) = (0.5, 0.5, 0.5);
const HELVETICA_AVG_CHAR_EM: f32 = 0.5;

pub struct ModernPdfTemplate;

impl Template for ModernPdfTemplate {
    fn name(&self) -> &'static str {
        "pdf_moderno"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn builder(&self) -> Result<Box<dyn DocBuilder>, RenderError> {
        let canvas = PdfCanvas::new(
            "Curriculum",
            INCH_MM / 2.0,
            BuiltinFont::Helvetica,
            BuiltinFont::HelveticaBold,
            HELVETICA_AVG_CHAR_EM,
        )?;
        Ok(Box::new(ModernPdfBuilder { canvas }))
    }
}

struct ModernPdfBuilder {
    canvas: PdfCanvas,
}

impl DocBuilder for ModernPdfBuilder {
    fn title_block(&mut self, contact: &ContactBlock) {
        self.canvas.band(12.7, LIGHT_BLUE);
        self.canvas.space(7.5);

        self.canvas
            .text(&contact.name, TextStyle::new(26.0).bold().color(DARK_BLUE));
        self.canvas.space(1.5);

        let line = format!(
            "Email: {} | Tel: {} | LinkedIn: {}",
            contact.email, contact.phone, contact.linkedin
        );
        self.canvas
            .text(&line, TextStyle::new(10.0).color(CONTACT_GREY));

        self.canvas.space(2.5);
        self.canvas.rule(2.2, DARK_BLUE);
        self.canvas.space(5.0);
    }

    fn section_title(&mut self, title: &str) {
        self.canvas.space(5.0);
        self.canvas
            .text(title, TextStyle::new(14.0).bold().color(DARK_BLUE));
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
        self.canvas.skill_row(
            name,
            level,
            TextStyle::new(11.0),
            5.0,
            76.0,
            DARK_BLUE,
            Some(GREY),
            LIGHT_BLUE,
        );
        self.canvas.space(3.8);
    }

    fn page_break(&mut self) {
        self.canvas.page_break();
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        self.canvas.finish()
    }
}
