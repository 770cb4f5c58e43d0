mod encoding;
mod font;
mod metrics;

pub use encoding::{encode_win_ansi, escape_literal};
pub use font::{Font, FontFamily};
pub use metrics::{cap_height, measure_text};

use crate::error::{CalendarError, Result};
use crate::graphics::Color;
use std::collections::BTreeSet;

/// Text operators for a page content stream.
///
/// Each `write` produces a self-contained `BT ... ET` block with the font,
/// fill colour and position current at the time of the call.
#[derive(Debug, Clone)]
pub struct TextContext {
    operations: String,
    current_font: Font,
    font_size: f64,
    fill_color: Color,
    position: (f64, f64),
    used_fonts: BTreeSet<Font>,
}

impl Default for TextContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TextContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            current_font: Font::Helvetica,
            font_size: 12.0,
            fill_color: Color::black(),
            position: (0.0, 0.0),
            used_fonts: BTreeSet::new(),
        }
    }

    pub fn set_font(&mut self, font: Font, size: f64) -> &mut Self {
        self.current_font = font;
        self.font_size = size;
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.fill_color = color;
        self
    }

    pub fn at(&mut self, x: f64, y: f64) -> &mut Self {
        self.position = (x, y);
        self
    }

    pub fn write(&mut self, text: &str) -> Result<&mut Self> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(CalendarError::FontError(format!(
                "invalid size {} for {}",
                self.font_size,
                self.current_font.pdf_name()
            )));
        }
        self.used_fonts.insert(self.current_font);

        let (x, y) = self.position;
        self.operations.push_str("BT\n");
        self.operations.push_str(&format!(
            "/{} {:.2} Tf\n",
            self.current_font.pdf_name(),
            self.font_size
        ));
        self.operations.push_str(&self.fill_color.fill_operator());
        self.operations.push('\n');
        self.operations.push_str(&format!("{x:.2} {y:.2} Td\n"));
        self.operations
            .push_str(&escape_literal(&encode_win_ansi(text)));
        self.operations.push_str(" Tj\nET\n");

        Ok(self)
    }

    /// Writes `text` horizontally centred on `center_x` with its baseline at
    /// `baseline_y`.
    pub fn write_centered(&mut self, text: &str, center_x: f64, baseline_y: f64) -> Result<&mut Self> {
        let width = measure_text(text, self.current_font, self.font_size);
        self.at(center_x - width / 2.0, baseline_y);
        self.write(text)
    }

    pub fn current_font(&self) -> Font {
        self.current_font
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn used_fonts(&self) -> impl Iterator<Item = Font> + '_ {
        self.used_fonts.iter().copied()
    }

    pub fn operations(&self) -> &str {
        &self.operations
    }

    pub(crate) fn generate_operations(&self) -> Result<Vec<u8>> {
        Ok(self.operations.as_bytes().to_vec())
    }
}
