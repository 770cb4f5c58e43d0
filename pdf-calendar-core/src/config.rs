//! Options for a calendar run.

use crate::calendar::{validate_year, HeaderStyle, HueScheme, TargetYearPolicy, DEFAULT_LOOKAHEAD_DAYS};
use crate::error::{CalendarError, Result};
use crate::geometry::mm;
use crate::text::FontFamily;
use chrono::{DateTime, Utc, Weekday};
use std::path::PathBuf;

pub const DEFAULT_PAGE_WIDTH_MM: f64 = 130.0;
pub const DEFAULT_PAGE_HEIGHT_MM: f64 = 90.0;
pub const DEFAULT_FILE_PREFIX: &str = "cal";

/// Everything that shapes the generated pages.
///
/// # Example
///
/// ```rust
/// use pdf_calendar::CalendarConfig;
/// use chrono::Weekday;
///
/// let config = CalendarConfig::default()
///     .with_year(2027)
///     .with_first_weekday(Weekday::Sun)
///     .with_hues(vec![210.0])
///     .with_ordinals(true);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.file_name(2027, 3), "cal-2027-3.pdf");
/// ```
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    /// Explicit year; when `None` the year comes from the look-ahead policy.
    pub year: Option<i32>,
    pub lookahead_days: u32,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub first_weekday: Weekday,
    /// One hue, or twelve (January first). Degrees or fractions of a turn.
    pub hues: Vec<f64>,
    pub header_style: HeaderStyle,
    pub font_family: FontFamily,
    pub ordinals: bool,
    pub compress: bool,
    /// Fixed creation date for reproducible output.
    pub pinned_date: Option<DateTime<Utc>>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: None,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            output_dir: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            page_width_mm: DEFAULT_PAGE_WIDTH_MM,
            page_height_mm: DEFAULT_PAGE_HEIGHT_MM,
            first_weekday: Weekday::Mon,
            hues: HueScheme::default().hues(),
            header_style: HeaderStyle::Initial,
            font_family: FontFamily::Helvetica,
            ordinals: false,
            compress: true,
            pinned_date: None,
        }
    }
}

impl CalendarConfig {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_lookahead_days(mut self, days: u32) -> Self {
        self.lookahead_days = days;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_page_size_mm(mut self, width: f64, height: f64) -> Self {
        self.page_width_mm = width;
        self.page_height_mm = height;
        self
    }

    pub fn with_first_weekday(mut self, weekday: Weekday) -> Self {
        self.first_weekday = weekday;
        self
    }

    pub fn with_hues(mut self, hues: Vec<f64>) -> Self {
        self.hues = hues;
        self
    }

    pub fn with_header_style(mut self, style: HeaderStyle) -> Self {
        self.header_style = style;
        self
    }

    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    pub fn with_ordinals(mut self, ordinals: bool) -> Self {
        self.ordinals = ordinals;
        self
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_pinned_date(mut self, date: DateTime<Utc>) -> Self {
        self.pinned_date = Some(date);
        self
    }

    /// Checks every option that can be checked before anything is written.
    pub fn validate(&self) -> Result<()> {
        if let Some(year) = self.year {
            validate_year(year)?;
        }
        self.target_year_policy()?;
        self.hue_scheme()?;
        self.page_size()?;
        Ok(())
    }

    pub fn target_year_policy(&self) -> Result<TargetYearPolicy> {
        TargetYearPolicy::new(self.lookahead_days)
    }

    pub fn hue_scheme(&self) -> Result<HueScheme> {
        HueScheme::from_hues(&self.hues)
    }

    /// Page size in points.
    pub fn page_size(&self) -> Result<(f64, f64)> {
        let (width, height) = (mm(self.page_width_mm), mm(self.page_height_mm));
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok((width, height))
        } else {
            Err(CalendarError::InvalidPageSize { width, height })
        }
    }

    /// `<prefix>-<year>-<month>.pdf`, month without zero padding.
    pub fn file_name(&self, year: i32, month: u32) -> String {
        format!("{}-{}-{}.pdf", self.file_prefix, year, month)
    }

    pub fn output_path(&self, year: i32, month: u32) -> PathBuf {
        self.output_dir.join(self.file_name(year, month))
    }
}
