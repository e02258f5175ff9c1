//! Classic PDF style: Times-Roman on A4 with 1" margins, blue section
//! markers and square skill bars.

use printpdf::BuiltinFont;

use crate::render::builder::{ContactBlock, DocBuilder};
use crate::render::{OutputFormat, RenderError};
use crate::templates::pdf_canvas::{PdfCanvas, TextStyle, INCH_MM};
use crate::templates::Template;

/// The accent blue of the classic styles (47, 117, 181).
const BLUE: (f32, f32, f32) = (0.184, 0.459, 0.710);
const TIMES_AVG_CHAR_EM: f32 = 0.48;

pub struct ClassicPdfTemplate;

impl Template for ClassicPdfTemplate {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn builder(&self) -> Result<Box<dyn DocBuilder>, RenderError> {
        let canvas = PdfCanvas::new(
            "Curriculum",
            INCH_MM,
            BuiltinFont::TimesRoman,
            BuiltinFont::TimesBold,
            TIMES_AVG_CHAR_EM,
        )?;
        Ok(Box::new(ClassicPdfBuilder { canvas }))
    }
}

struct ClassicPdfBuilder {
    canvas: PdfCanvas,
}

impl DocBuilder for ClassicPdfBuilder {
    fn title_block(&mut self, contact: &ContactBlock) {
        self.canvas.text(&contact.name, TextStyle::new(22.0));
        self.canvas.space(2.5);

        let mut parts = Vec::new();
        if !contact.email.is_empty() {
            parts.push(format!("Email: {}", contact.email));
        }
        if !contact.phone.is_empty() {
            parts.push(format!("Tel: {}", contact.phone));
        }
        if !contact.linkedin.is_empty() {
            parts.push(format!("LinkedIn: {}", contact.linkedin));
        }
        if !parts.is_empty() {
            self.canvas.text(&parts.join("   "), TextStyle::new(11.0));
        }

        self.canvas.text(&"_".repeat(70), TextStyle::new(8.0));
        self.canvas.space(2.5);
    }

    fn section_title(&mut self, title: &str) {
        self.canvas.space(5.0);
        self.canvas
            .heading(title, TextStyle::new(14.0), Some(BLUE));
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
            &format!("{name}:"),
            level,
            TextStyle::new(11.0),
            3.8,
            90.0,
            BLUE,
            None,
            BLUE,
        );
        self.canvas.space(2.0);
    }

    fn page_break(&mut self) {
        self.canvas.page_break();
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        self.canvas.finish()
    }
}
