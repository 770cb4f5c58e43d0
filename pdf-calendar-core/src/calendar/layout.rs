//! Page geometry for one month.
//!
//! The drawable area is split into a 7-column by 8-row table: a title bar
//! spanning the top row, one row of weekday headers, then six week rows.
//! Months that need fewer than six weeks keep the trailing rows blank so
//! every page has the same shape.

use crate::calendar::grid::{HeaderStyle, MonthGrid, DAYS_PER_WEEK};
use crate::calendar::render::day_label;
use crate::error::{CalendarError, Result};
use crate::geometry::Rectangle;
use crate::text::{measure_text, Font, FontFamily};

/// Title row, header row and six week rows.
pub const LAYOUT_ROWS: usize = 8;
/// Week rows on every page.
pub const BODY_WEEKS: usize = 6;

/// Margins are this fraction of the page size on each side.
pub const MARGIN_RATIO: f64 = 1.0 / 50.0;
/// Line width relative to the shorter content edge.
pub const LINE_WIDTH_RATIO: f64 = 0.0025;
pub const TITLE_FONT_RATIO: f64 = 0.06;
pub const HEADER_FONT_RATIO: f64 = 0.05;
pub const DAY_FONT_RATIO: f64 = 0.09;
/// Widest day label may take at most this share of a cell's width.
pub const DAY_LABEL_MAX_FILL: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub font: Font,
    pub size: f64,
}

/// What goes into a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Title(String),
    Weekday(&'static str),
    Day(u32),
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCell {
    pub rect: Rectangle,
    pub content: CellContent,
}

impl LayoutCell {
    pub fn is_title(&self) -> bool {
        matches!(self.content, CellContent::Title(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub header_style: HeaderStyle,
    pub font_family: FontFamily,
    /// Day labels carry `st`/`nd`/`rd`/`th`.
    pub ordinals: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            header_style: HeaderStyle::Initial,
            font_family: FontFamily::Helvetica,
            ordinals: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonthLayout {
    pub page_width: f64,
    pub page_height: f64,
    /// Area the table is drawn into, already inset by the line width.
    pub frame: Rectangle,
    pub scale: f64,
    pub line_width: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub title: LayoutCell,
    pub headers: Vec<LayoutCell>,
    /// Six full weeks, row-major from the top.
    pub days: Vec<LayoutCell>,
    pub title_font: FontSpec,
    pub header_font: FontSpec,
    pub day_font: FontSpec,
}

impl MonthLayout {
    /// Lays out `grid` on a page of `page_width` x `page_height` points.
    pub fn compute(
        grid: &MonthGrid,
        page_width: f64,
        page_height: f64,
        options: &LayoutOptions,
    ) -> Result<Self> {
        if !(page_width.is_finite() && page_height.is_finite() && page_width > 0.0 && page_height > 0.0)
        {
            return Err(CalendarError::InvalidPageSize {
                width: page_width,
                height: page_height,
            });
        }

        let margin_x = page_width * MARGIN_RATIO;
        let margin_y = page_height * MARGIN_RATIO;
        let content = Rectangle::from_position_and_size(
            margin_x,
            margin_y,
            page_width - 2.0 * margin_x,
            page_height - 2.0 * margin_y,
        );

        let scale = content.width().min(content.height());
        let line_width = scale * LINE_WIDTH_RATIO;
        let frame = content.inset(line_width, line_width);

        let cell_width = frame.width() / DAYS_PER_WEEK as f64;
        let cell_height = frame.height() / LAYOUT_ROWS as f64;

        // Row 0 is the bottom of the page.
        let cell_at = |row_from_bottom: usize, column: usize| {
            Rectangle::from_position_and_size(
                frame.x() + column as f64 * cell_width,
                frame.y() + row_from_bottom as f64 * cell_height,
                cell_width,
                cell_height,
            )
        };

        let title = LayoutCell {
            rect: Rectangle::from_position_and_size(
                frame.x(),
                frame.y() + (LAYOUT_ROWS - 1) as f64 * cell_height,
                frame.width(),
                cell_height,
            ),
            content: CellContent::Title(grid.title()),
        };

        let headers = grid
            .header_labels(options.header_style)
            .into_iter()
            .enumerate()
            .map(|(column, label)| LayoutCell {
                rect: cell_at(LAYOUT_ROWS - 2, column),
                content: CellContent::Weekday(label),
            })
            .collect();

        let mut days = Vec::with_capacity(BODY_WEEKS * DAYS_PER_WEEK);
        for week in 0..BODY_WEEKS {
            let row = grid.weeks().get(week);
            for column in 0..DAYS_PER_WEEK {
                let content = match row.and_then(|week_days| week_days[column]) {
                    Some(day) => CellContent::Day(day),
                    None => CellContent::Blank,
                };
                days.push(LayoutCell {
                    rect: cell_at(BODY_WEEKS - 1 - week, column),
                    content,
                });
            }
        }

        let bold = options.font_family.bold();
        let day_font_size = fit_day_font(grid, bold, scale * DAY_FONT_RATIO, cell_width, options.ordinals);
        Ok(Self {
            page_width,
            page_height,
            frame,
            scale,
            line_width,
            cell_width,
            cell_height,
            title,
            headers,
            days,
            title_font: FontSpec {
                font: bold,
                size: scale * TITLE_FONT_RATIO,
            },
            header_font: FontSpec {
                font: bold,
                size: scale * HEADER_FONT_RATIO,
            },
            day_font: FontSpec {
                font: bold,
                size: day_font_size,
            },
        })
    }

    /// Title, headers and days in drawing order.
    pub fn cells(&self) -> impl Iterator<Item = &LayoutCell> {
        std::iter::once(&self.title)
            .chain(self.headers.iter())
            .chain(self.days.iter())
    }

    pub fn day_cell(&self, day: u32) -> Option<&LayoutCell> {
        self.days
            .iter()
            .find(|cell| cell.content == CellContent::Day(day))
    }

    /// Font used for a cell's text.
    pub fn font_for(&self, content: &CellContent) -> FontSpec {
        match content {
            CellContent::Title(_) => self.title_font,
            CellContent::Weekday(_) => self.header_font,
            CellContent::Day(_) | CellContent::Blank => self.day_font,
        }
    }
}

/// Shrinks `size` until the widest day label fits its cell.
fn fit_day_font(grid: &MonthGrid, font: Font, size: f64, cell_width: f64, ordinals: bool) -> f64 {
    let widest = (1..=grid.days_in_month())
        .map(|day| measure_text(&day_label(day, ordinals), font, 1.0))
        .fold(0.0, f64::max);
    if widest <= 0.0 {
        return size;
    }
    size.min(cell_width * DAY_LABEL_MAX_FILL / widest)
}
