//! # pdf-calendar
//!
//! Printable monthly calendar pages written as PDF, with a small native PDF
//! writer and no external PDF dependencies.
//!
//! ## Features
//!
//! - **Target year**: chosen from a reference date and a look-ahead window, or set explicitly
//! - **Month grids**: any first weekday, leap years, 4 to 6 week rows
//! - **Fixed layout**: title bar, weekday headers and six week rows on every page
//! - **Colour schemes**: one hue per month or one for the year, HLS based
//! - **Pluggable cells**: swap the [`CellRenderer`] to change how cells are drawn
//! - **Reproducible output**: pinned dates give byte-identical files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_calendar::{CalendarConfig, CalendarGenerator, Result};
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<()> {
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let config = CalendarConfig::default().with_output_dir("calendars");
//!
//! // Writes calendars/cal-2027-1.pdf ... calendars/cal-2027-12.pdf
//! let report = CalendarGenerator::new(config, today)?.generate_year()?;
//! println!("{} pages for {}", report.files.len(), report.year);
//! # Ok(())
//! # }
//! ```
//!
//! ## Building pages by hand
//!
//! ```rust
//! use pdf_calendar::{Color, Document, Font, Page, Result};
//!
//! # fn main() -> Result<()> {
//! let mut page = Page::from_mm(130.0, 90.0)?;
//!
//! page.graphics()
//!     .set_fill_color(Color::from_hls(0.6, 0.9, 1.0))
//!     .rect(10.0, 10.0, 100.0, 40.0)
//!     .fill_stroke();
//!
//! page.text()
//!     .set_font(Font::HelveticaBold, 14.0)
//!     .write_centered("March 2027", 60.0, 25.0)?;
//!
//! let mut doc = Document::new();
//! doc.add_page(page);
//!
//! let mut buffer = Vec::new();
//! doc.write(&mut buffer)?;
//! assert!(buffer.starts_with(b"%PDF-1.7"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] - Target year, month grids, layout, palettes and generation
//! - [`config`] - Run options
//! - [`document`] - PDF document and metadata
//! - [`page`] - Pages with graphics and text contexts
//! - [`graphics`] - Paths, colours and painting operators
//! - [`text`] - Standard fonts, metrics and text operators
//! - [`writer`] - Low-level PDF writing

pub mod calendar;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod objects;
pub mod page;
pub mod text;
pub mod writer;

// Re-export main types
pub use calendar::{
    CalendarGenerator, CellRenderer, DefaultCellRenderer, GeneratedFile, GenerationReport,
    HeaderStyle, HueScheme, MonthGrid, MonthLayout, Palette, TargetYearPolicy,
};
pub use config::CalendarConfig;
pub use document::{Document, DocumentMetadata};
pub use error::{CalendarError, Result};
pub use geometry::{Point, Rectangle};
pub use graphics::{Color, GraphicsContext};
pub use page::Page;
pub use text::{Font, FontFamily, TextContext};

/// Current version of pdf-calendar
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// PDF version written in every file header
pub const PDF_VERSION: &str = "1.7";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_document() {
        let doc = Document::new();
        assert_eq!(doc.pages.len(), 0);
    }

    #[test]
    fn test_create_page() {
        let page = Page::new(595.0, 842.0);
        assert_eq!(page.width(), 595.0);
        assert_eq!(page.height(), 842.0);
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(PDF_VERSION, "1.7");
    }
}
