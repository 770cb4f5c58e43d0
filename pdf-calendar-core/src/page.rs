use crate::error::{CalendarError, Result};
use crate::geometry::{mm, Rectangle};
use crate::graphics::GraphicsContext;
use crate::text::{Font, TextContext};

/// A single page in a PDF document.
///
/// Pages have a size (width and height in points) and carry a graphics and
/// a text context. Graphics are emitted before text, so text always lands on
/// top of filled shapes.
///
/// # Example
///
/// ```rust
/// use pdf_calendar::{Color, Font, Page};
///
/// let mut page = Page::new(368.5, 255.1);
///
/// page.graphics()
///     .set_fill_color(Color::red())
///     .rect(10.0, 10.0, 100.0, 50.0)
///     .fill();
///
/// page.text()
///     .set_font(Font::HelveticaBold, 12.0)
///     .at(20.0, 30.0)
///     .write("January 2027")?;
/// # Ok::<(), pdf_calendar::CalendarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Page {
    width: f64,
    height: f64,
    graphics_context: GraphicsContext,
    text_context: TextContext,
}

impl Page {
    /// Creates a new page with the specified width and height in points.
    ///
    /// Points are 1/72 of an inch.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            graphics_context: GraphicsContext::new(),
            text_context: TextContext::new(),
        }
    }

    /// Creates a page sized in millimetres, rejecting non-positive sizes.
    pub fn from_mm(width_mm: f64, height_mm: f64) -> Result<Self> {
        let (width, height) = (mm(width_mm), mm(height_mm));
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CalendarError::InvalidPageSize { width, height });
        }
        Ok(Self::new(width, height))
    }

    /// Creates a new A4 page (595 x 842 points).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Returns a mutable reference to the graphics context for drawing shapes.
    pub fn graphics(&mut self) -> &mut GraphicsContext {
        &mut self.graphics_context
    }

    /// Returns a mutable reference to the text context for adding text.
    pub fn text(&mut self) -> &mut TextContext {
        &mut self.text_context
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The full page as a rectangle anchored at the origin.
    pub fn media_box(&self) -> Rectangle {
        Rectangle::from_position_and_size(0.0, 0.0, self.width, self.height)
    }

    /// Fonts referenced by text on this page.
    pub fn used_fonts(&self) -> Vec<Font> {
        self.text_context.used_fonts().collect()
    }

    pub(crate) fn generate_content(&self) -> Result<Vec<u8>> {
        let mut content = self.graphics_context.generate_operations()?;
        content.extend_from_slice(&self.text_context.generate_operations()?);
        Ok(content)
    }
}
