//! Calendar pages: from a reference date to rendered months.
//!
//! Each stage is usable on its own:
//!
//! - [`TargetYearPolicy`] picks the year to print
//! - [`MonthGrid`] places days under their weekdays
//! - [`MonthLayout`] turns a grid into cell rectangles and font sizes
//! - [`Palette`] and [`HueScheme`] colour each month
//! - [`render_month`] draws a layout through a [`CellRenderer`]
//! - [`CalendarGenerator`] ties them together and writes the files

mod generator;
mod grid;
mod layout;
mod palette;
mod render;
mod target_year;

pub use generator::{CalendarGenerator, GeneratedFile, GenerationReport};
pub use grid::{
    days_in_month, month_name, validate_month, validate_year, HeaderStyle, MonthGrid, Week,
    DAYS_PER_WEEK, MAX_YEAR, MIN_YEAR,
};
pub use layout::{
    CellContent, FontSpec, LayoutCell, LayoutOptions, MonthLayout, BODY_WEEKS, DAY_LABEL_MAX_FILL,
    LAYOUT_ROWS,
};
pub use palette::{normalize_hue, HueScheme, Palette};
pub use render::{day_label, ordinal_suffix, render_month, CellRenderer, CellStyle, DefaultCellRenderer};
pub use target_year::{TargetYearPolicy, DEFAULT_LOOKAHEAD_DAYS, MAX_LOOKAHEAD_DAYS};
