//! Cursor-based drawing layer over `printpdf`.
//!
//! `printpdf` positions everything in absolute page coordinates with the
//! origin at the bottom-left; the templates want a top-down flow of wrapped
//! text lines, rules and boxes with automatic page breaks. The canvas owns
//! the cursor and the builtin fonts and translates between the two worlds.
//!
//! Line wrapping uses an average-glyph-width approximation per font family
//! instead of real metrics. That is accurate enough for résumé prose: a line
//! that is a character or two off the true wrap point still reads fine, and
//! builtin PDF fonts ship no metric tables we could consult at runtime.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocumentReference, PdfLayerReference, Point,
    Polygon, Rgb,
};

use crate::render::RenderError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const PT_TO_MM: f32 = 0.3528;
/// Line height multiplier, matching the 11pt/14pt leading of the styles.
const LEADING: f32 = 1.3;

pub const INCH_MM: f32 = 25.4;

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size_pt: f32,
    pub bold: bool,
    pub color: Option<(f32, f32, f32)>,
    pub indent_mm: f32,
    pub centered: bool,
}

impl TextStyle {
    pub fn new(size_pt: f32) -> Self {
        TextStyle {
            size_pt,
            bold: false,
            color: None,
            indent_mm: 0.0,
            centered: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, rgb: (f32, f32, f32)) -> Self {
        self.color = Some(rgb);
        self
    }

    pub fn indent(mut self, mm: f32) -> Self {
        self.indent_mm = mm;
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    margin_mm: f32,
    /// Distance from the top edge to the next free position.
    cursor_mm: f32,
    /// Average glyph width in em for the regular font family.
    avg_char_em: f32,
}

impl PdfCanvas {
    pub fn new(
        title: &str,
        margin_mm: f32,
        regular: BuiltinFont,
        bold: BuiltinFont,
        avg_char_em: f32,
    ) -> Result<Self, RenderError> {
        let (doc, page, layer) = printpdf::PdfDocument::new(
            title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(regular)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(bold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(PdfCanvas {
            doc,
            layer,
            regular,
            bold,
            margin_mm,
            cursor_mm: margin_mm,
            avg_char_em,
        })
    }

    pub fn usable_width_mm(&self) -> f32 {
        PAGE_WIDTH_MM - 2.0 * self.margin_mm
    }

    pub fn page_break(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor_mm = self.margin_mm;
    }

    /// Vertical gap between elements.
    pub fn space(&mut self, mm: f32) {
        self.cursor_mm += mm;
    }

    fn ensure_room(&mut self, needed_mm: f32) {
        if self.cursor_mm + needed_mm > PAGE_HEIGHT_MM - self.margin_mm {
            self.page_break();
        }
    }

    fn estimated_width_mm(&self, text: &str, size_pt: f32) -> f32 {
        text.chars().count() as f32 * self.avg_char_em * size_pt * PT_TO_MM
    }

    /// Writes a block of text, wrapping at the usable width and breaking
    /// pages as needed.
    pub fn text(&mut self, text: &str, style: TextStyle) {
        let line_height = style.size_pt * LEADING * PT_TO_MM;
        let usable = self.usable_width_mm() - style.indent_mm;
        let char_width = self.avg_char_em * style.size_pt * PT_TO_MM;
        let max_chars = (usable / char_width).max(1.0) as usize;

        let font = if style.bold {
            self.bold.clone()
        } else {
            self.regular.clone()
        };

        if let Some((r, g, b)) = style.color {
            self.layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
        }

        for line in wrap_text(text, max_chars) {
            self.ensure_room(line_height);
            self.cursor_mm += line_height;
            let x = if style.centered {
                ((PAGE_WIDTH_MM - self.estimated_width_mm(&line, style.size_pt)) / 2.0)
                    .max(self.margin_mm)
            } else {
                self.margin_mm + style.indent_mm
            };
            self.layer.use_text(
                line,
                style.size_pt,
                Mm(x),
                Mm(PAGE_HEIGHT_MM - self.cursor_mm),
                &font,
            );
        }

        if style.color.is_some() {
            self.layer
                .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        }
    }

    /// Full-width filled band (the modern header block).
    pub fn band(&mut self, height_mm: f32, color: (f32, f32, f32)) {
        self.ensure_room(height_mm);
        let top = PAGE_HEIGHT_MM - self.cursor_mm;
        self.filled_rect(self.margin_mm, top - height_mm, self.usable_width_mm(), height_mm, color);
        self.cursor_mm += height_mm;
    }

    /// Thin horizontal rule across the text width.
    pub fn rule(&mut self, thickness_pt: f32, color: (f32, f32, f32)) {
        let height_mm = thickness_pt * PT_TO_MM;
        self.ensure_room(height_mm + 1.0);
        self.cursor_mm += 1.0;
        let y = PAGE_HEIGHT_MM - self.cursor_mm;
        let (r, g, b) = color;
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(r, g, b, None)));
        self.layer.set_outline_thickness(thickness_pt);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(self.margin_mm), Mm(y)), false),
                (Point::new(Mm(PAGE_WIDTH_MM - self.margin_mm), Mm(y)), false),
            ],
            is_closed: false,
        });
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.layer.set_outline_thickness(1.0);
        self.cursor_mm += height_mm;
    }

    /// Section heading, optionally preceded by a small filled marker square
    /// sitting on the same baseline.
    pub fn heading(&mut self, text: &str, style: TextStyle, marker: Option<(f32, f32, f32)>) {
        let Some(color) = marker else {
            self.text(text, style);
            return;
        };
        let line_height = style.size_pt * LEADING * PT_TO_MM;
        let square = style.size_pt * 0.5 * PT_TO_MM;
        self.ensure_room(line_height);
        let baseline = PAGE_HEIGHT_MM - (self.cursor_mm + line_height);
        self.filled_rect(self.margin_mm, baseline, square, square, color);
        let mut style = style;
        style.indent_mm = square + 2.0;
        self.text(text, style);
    }

    /// Skill label with a row of five proficiency squares on the same
    /// baseline, `level` of them filled.
    #[allow(clippy::too_many_arguments)]
    pub fn skill_row(
        &mut self,
        label: &str,
        level: u8,
        style: TextStyle,
        square_mm: f32,
        x_offset_mm: f32,
        filled: (f32, f32, f32),
        empty: Option<(f32, f32, f32)>,
        border: (f32, f32, f32),
    ) {
        const MAX_LEVEL: u8 = 5;
        let line_height = style.size_pt * LEADING * PT_TO_MM;
        self.ensure_room(line_height.max(square_mm));
        self.cursor_mm += line_height.max(square_mm);
        let baseline = PAGE_HEIGHT_MM - self.cursor_mm;

        let font = if style.bold {
            self.bold.clone()
        } else {
            self.regular.clone()
        };
        self.layer
            .use_text(label, style.size_pt, Mm(self.margin_mm), Mm(baseline), &font);

        let gap = square_mm * 0.3;
        for slot in 0..MAX_LEVEL {
            let x = self.margin_mm + x_offset_mm + slot as f32 * (square_mm + gap);
            if slot < level {
                self.filled_rect(x, baseline, square_mm, square_mm, filled);
            } else {
                if let Some(fill) = empty {
                    self.filled_rect(x, baseline, square_mm, square_mm, fill);
                }
                self.outlined_rect(x, baseline, square_mm, square_mm, border);
            }
        }
    }

    fn rect_points(x: f32, y: f32, w: f32, h: f32) -> Vec<(Point, bool)> {
        vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x), Mm(y + h)), false),
        ]
    }

    fn filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: (f32, f32, f32)) {
        let (r, g, b) = color;
        self.layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
        self.layer.add_polygon(Polygon {
            rings: vec![Self::rect_points(x, y, w, h)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    }

    fn outlined_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: (f32, f32, f32)) {
        let (r, g, b) = color;
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(r, g, b, None)));
        self.layer.set_outline_thickness(0.5);
        self.layer.add_polygon(Polygon {
            rings: vec![Self::rect_points(x, y, w, h)],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        });
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.layer.set_outline_thickness(1.0);
    }

    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}

/// Greedy word wrap by character count. A single word longer than the line
/// gets a line of its own and may overflow; résumé data does not contain
/// such words in practice.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_max_chars() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn wrap_keeps_overlong_words_whole() {
        let lines = wrap_text("short supercalifragilistic word", 10);
        assert_eq!(lines, vec!["short", "supercalifragilistic", "word"]);
    }

    #[test]
    fn wrap_preserves_explicit_newlines() {
        let lines = wrap_text("first\nsecond", 40);
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn canvas_produces_nonempty_pdf_bytes() {
        let mut canvas = PdfCanvas::new(
            "test",
            INCH_MM,
            BuiltinFont::TimesRoman,
            BuiltinFont::TimesBold,
            0.5,
        )
        .unwrap();
        canvas.text("Hello", TextStyle::new(11.0));
        canvas.rule(1.0, (0.5, 0.5, 0.5));
        canvas.heading("Section", TextStyle::new(14.0).bold(), Some((0.2, 0.4, 0.7)));
        canvas.skill_row(
            "Rust:",
            3,
            TextStyle::new(11.0),
            4.0,
            60.0,
            (0.2, 0.4, 0.7),
            None,
            (0.2, 0.4, 0.7),
        );
        canvas.page_break();
        canvas.text("Second page", TextStyle::new(11.0).bold().centered());
        let bytes = canvas.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
