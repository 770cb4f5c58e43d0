//! Turning a configuration into twelve PDF files.

use crate::calendar::grid::{validate_month, validate_year, MonthGrid};
use crate::calendar::layout::{CellContent, LayoutOptions, MonthLayout};
use crate::calendar::palette::HueScheme;
use crate::calendar::render::{render_month, CellRenderer, DefaultCellRenderer};
use crate::calendar::target_year::TargetYearPolicy;
use crate::config::CalendarConfig;
use crate::document::Document;
use crate::error::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// One written month.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratedFile {
    pub month: u32,
    pub title: String,
    pub path: PathBuf,
    pub weeks: usize,
}

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenerationReport {
    pub year: i32,
    pub reference_date: NaiveDate,
    pub output_dir: PathBuf,
    pub files: Vec<GeneratedFile>,
}

/// Generates calendar pages from a validated [`CalendarConfig`].
///
/// The reference date decides the target year when the configuration does
/// not name one. Nothing is cached between months: every call recomputes the
/// grid, layout and page from scratch.
///
/// # Example
///
/// ```rust,no_run
/// use pdf_calendar::{CalendarConfig, CalendarGenerator};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let generator = CalendarGenerator::new(CalendarConfig::default(), today)?;
/// let report = generator.generate_year()?;
///
/// assert_eq!(report.year, 2027);
/// assert_eq!(report.files.len(), 12);
/// # Ok::<(), pdf_calendar::CalendarError>(())
/// ```
pub struct CalendarGenerator {
    config: CalendarConfig,
    reference_date: NaiveDate,
    policy: TargetYearPolicy,
    hues: HueScheme,
    page_size: (f64, f64),
    renderer: Box<dyn CellRenderer>,
}

impl CalendarGenerator {
    pub fn new(config: CalendarConfig, reference_date: NaiveDate) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            policy: config.target_year_policy()?,
            hues: config.hue_scheme()?,
            page_size: config.page_size()?,
            renderer: Box::new(DefaultCellRenderer::new(config.ordinals)),
            config,
            reference_date,
        })
    }

    /// Replaces the default cell renderer.
    pub fn with_renderer(mut self, renderer: impl CellRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Explicit year if configured, otherwise the look-ahead year.
    pub fn target_year(&self) -> Result<i32> {
        self.policy.resolve(self.config.year, self.reference_date)
    }

    pub fn layout_month(&self, year: i32, month: u32) -> Result<MonthLayout> {
        let grid = MonthGrid::new(year, month, self.config.first_weekday)?;
        let options = LayoutOptions {
            header_style: self.config.header_style,
            font_family: self.config.font_family,
            ordinals: self.config.ordinals,
        };
        let (width, height) = self.page_size;
        let layout = MonthLayout::compute(&grid, width, height, &options)?;

        debug!(
            year,
            month,
            weeks = grid.week_count(),
            first_column = grid.first_day_column(),
            scale = layout.scale,
            "Laid out month"
        );
        Ok(layout)
    }

    /// Builds the single-page document for a month without writing it.
    pub fn render_month(&self, year: i32, month: u32) -> Result<Document> {
        self.build_document(year, month)
            .map_err(|e| e.for_month(year, month))
    }

    /// Writes one month to `<output_dir>/<prefix>-<year>-<month>.pdf`,
    /// replacing any existing file.
    pub fn generate_month(&self, year: i32, month: u32) -> Result<PathBuf> {
        self.write_month(year, month).map(|file| file.path)
    }

    /// Writes all twelve months of the target year.
    ///
    /// # Errors
    ///
    /// Stops at the first month that fails; earlier months stay on disk.
    pub fn generate_year(&self) -> Result<GenerationReport> {
        let year = self.target_year()?;
        self.generate_for_year(year)
    }

    pub fn generate_for_year(&self, year: i32) -> Result<GenerationReport> {
        info!(
            year,
            reference_date = %self.reference_date,
            output_dir = %self.config.output_dir.display(),
            "Generating calendar"
        );
        validate_year(year)?;
        fs::create_dir_all(&self.config.output_dir)?;

        let files = (1..=12)
            .map(|month| self.write_month(year, month))
            .collect::<Result<Vec<_>>>()?;

        info!(year, files = files.len(), "Calendar complete");
        Ok(GenerationReport {
            year,
            reference_date: self.reference_date,
            output_dir: self.config.output_dir.clone(),
            files,
        })
    }

    fn write_month(&self, year: i32, month: u32) -> Result<GeneratedFile> {
        let path = self.config.output_path(year, month);
        let result = self.build_document(year, month).and_then(|mut document| {
            document.save(&path)?;
            let grid = MonthGrid::new(year, month, self.config.first_weekday)?;
            Ok(GeneratedFile {
                month,
                title: grid.title(),
                path: path.clone(),
                weeks: grid.week_count(),
            })
        });

        let file = result.map_err(|e| e.for_month(year, month))?;
        info!(year, month, path = %file.path.display(), "Wrote calendar page");
        Ok(file)
    }

    fn build_document(&self, year: i32, month: u32) -> Result<Document> {
        validate_month(month)?;
        let layout = self.layout_month(year, month)?;
        let palette = self.hues.palette_for(month);
        let page = render_month(&layout, &palette, self.renderer.as_ref())?;

        let mut document = Document::new();
        if let CellContent::Title(title) = &layout.title.content {
            document.set_title(title.clone());
        }
        document.set_subject("Monthly calendar");
        document.set_compress(self.config.compress);
        if let Some(date) = self.config.pinned_date {
            document.pin_dates(date);
        }
        document.add_page(page);
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::layout::LayoutCell;
    use crate::calendar::render::CellStyle;
    use crate::error::CalendarError;
    use crate::page::Page;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn generator(dir: &TempDir) -> CalendarGenerator {
        let config = CalendarConfig::default().with_output_dir(dir.path());
        CalendarGenerator::new(config, today()).unwrap()
    }

    #[test]
    fn test_new_validates_config() {
        let config = CalendarConfig::default().with_hues(vec![0.1, 0.2]);
        assert!(matches!(
            CalendarGenerator::new(config, today()),
            Err(CalendarError::InvalidHues(2))
        ));
    }

    #[test]
    fn test_target_year() {
        let dir = TempDir::new().unwrap();
        assert_eq!(generator(&dir).target_year().unwrap(), 2027);

        let config = CalendarConfig::default().with_year(2031);
        let explicit = CalendarGenerator::new(config, today()).unwrap();
        assert_eq!(explicit.target_year().unwrap(), 2031);
    }

    #[test]
    fn test_render_month_builds_single_page() {
        let dir = TempDir::new().unwrap();
        let document = generator(&dir).render_month(2027, 2).unwrap();

        assert_eq!(document.page_count(), 1);
        assert_eq!(document.metadata().title.as_deref(), Some("February 2027"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_render_month_tags_invalid_month() {
        let dir = TempDir::new().unwrap();
        let error = generator(&dir).render_month(2027, 13).unwrap_err();

        assert_eq!(error.month(), Some(13));
        assert!(matches!(
            error,
            CalendarError::Month { ref source, .. } if matches!(**source, CalendarError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_generate_month_writes_named_file() {
        let dir = TempDir::new().unwrap();
        let path = generator(&dir).generate_month(2027, 3).unwrap();

        assert_eq!(path, dir.path().join("cal-2027-3.pdf"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_pinned_output_is_reproducible() {
        let dir = TempDir::new().unwrap();
        let pinned = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let config = CalendarConfig::default()
            .with_output_dir(dir.path())
            .with_pinned_date(pinned);
        let generator = CalendarGenerator::new(config, today()).unwrap();

        let first = std::fs::read(generator.generate_month(2027, 6).unwrap()).unwrap();
        let second = std::fs::read(generator.generate_month(2027, 6).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_year_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("nested").join("calendars");
        let generator = CalendarGenerator::new(
            CalendarConfig::default().with_output_dir(&output_dir),
            today(),
        )
        .unwrap();

        let error = generator.generate_for_year(0).unwrap_err();

        assert!(matches!(error, CalendarError::InvalidYear(0)));
        assert_eq!(error.month(), None);
        assert!(!output_dir.exists());
    }

    #[test]
    fn test_ordinal_layout_shrinks_day_font() {
        let dir = TempDir::new().unwrap();
        let plain = generator(&dir).layout_month(2027, 1).unwrap();
        let ordinal = CalendarGenerator::new(
            CalendarConfig::default()
                .with_output_dir(dir.path())
                .with_ordinals(true),
            today(),
        )
        .unwrap()
        .layout_month(2027, 1)
        .unwrap();

        assert!(ordinal.day_font.size < plain.day_font.size);
    }

    #[test]
    fn test_custom_renderer() {
        struct Outline;

        impl CellRenderer for Outline {
            fn render_cell(&self, page: &mut Page, cell: &LayoutCell, _style: &CellStyle) -> Result<()> {
                if let CellContent::Day(_) = cell.content {
                    let r = cell.rect;
                    page.graphics().rect(r.x(), r.y(), r.width(), r.height()).stroke();
                }
                Ok(())
            }
        }

        let dir = TempDir::new().unwrap();
        let mut document = generator(&dir).with_renderer(Outline).render_month(2027, 1).unwrap();
        document.set_compress(false);

        let mut buffer = Vec::new();
        document.write(&mut buffer).unwrap();
        let content = String::from_utf8_lossy(&buffer);
        assert_eq!(content.matches(" re\n").count(), 31);
        assert!(!content.contains("/BaseFont"));
    }
}
