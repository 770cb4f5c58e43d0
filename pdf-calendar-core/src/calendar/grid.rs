//! Weekday arithmetic for a single month.
//!
//! A [`MonthGrid`] is the 7-column arrangement of a month's days: every day
//! sits under its weekday, with blank cells before the 1st and after the
//! last day.

use crate::error::{CalendarError, Result};
use chrono::{Datelike, Month, NaiveDate, Weekday};

/// Number of columns in every grid.
pub const DAYS_PER_WEEK: usize = 7;

/// Earliest and latest years accepted for generation.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// One row of the grid; `None` marks a blank cell.
pub type Week = [Option<u32>; DAYS_PER_WEEK];

/// How weekday headers are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    /// Single letter: `M T W T F S S`
    #[default]
    Initial,
    /// Three letters: `Mon Tue Wed ...`
    Abbreviated,
}

impl HeaderStyle {
    pub fn label(self, weekday: Weekday) -> &'static str {
        match self {
            HeaderStyle::Initial => match weekday {
                Weekday::Mon => "M",
                Weekday::Tue => "T",
                Weekday::Wed => "W",
                Weekday::Thu => "T",
                Weekday::Fri => "F",
                Weekday::Sat => "S",
                Weekday::Sun => "S",
            },
            HeaderStyle::Abbreviated => match weekday {
                Weekday::Mon => "Mon",
                Weekday::Tue => "Tue",
                Weekday::Wed => "Wed",
                Weekday::Thu => "Thu",
                Weekday::Fri => "Fri",
                Weekday::Sat => "Sat",
                Weekday::Sun => "Sun",
            },
        }
    }
}

pub fn validate_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::InvalidYear(year))
    }
}

pub fn validate_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth(month))
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    validate_year(year)?;
    validate_month(month)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear(year))
}

/// Number of days in `month` of `year`, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let start = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(CalendarError::InvalidYear(year))?;

    Ok(next.signed_duration_since(start).num_days() as u32)
}

/// English month name, e.g. `"February"`.
pub fn month_name(month: u32) -> Result<&'static str> {
    let month = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(CalendarError::InvalidMonth(month))?;
    Ok(month.name())
}

/// Columns between `first_weekday` and `weekday`, counting forward.
fn column_of(weekday: Weekday, first_weekday: Weekday) -> usize {
    (weekday.num_days_from_monday() as usize + DAYS_PER_WEEK
        - first_weekday.num_days_from_monday() as usize)
        % DAYS_PER_WEEK
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    first_weekday: Weekday,
    days_in_month: u32,
    first_day_column: usize,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32, first_weekday: Weekday) -> Result<Self> {
        let first = first_of_month(year, month)?;
        let days_in_month = days_in_month(year, month)?;
        let first_day_column = column_of(first.weekday(), first_weekday);

        let cell_count = first_day_column + days_in_month as usize;
        let week_count = cell_count.div_ceil(DAYS_PER_WEEK);

        let mut weeks = vec![[None; DAYS_PER_WEEK]; week_count];
        for day in 1..=days_in_month {
            let index = first_day_column + (day - 1) as usize;
            weeks[index / DAYS_PER_WEEK][index % DAYS_PER_WEEK] = Some(day);
        }

        Ok(Self {
            year,
            month,
            first_weekday,
            days_in_month,
            first_day_column,
            weeks,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Column (0-based) holding the 1st of the month.
    pub fn first_day_column(&self) -> usize {
        self.first_day_column
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Weekdays in column order.
    pub fn weekday_order(&self) -> [Weekday; DAYS_PER_WEEK] {
        let mut order = [self.first_weekday; DAYS_PER_WEEK];
        for column in 1..DAYS_PER_WEEK {
            order[column] = order[column - 1].succ();
        }
        order
    }

    /// Header row labels, one per column.
    pub fn header_labels(&self, style: HeaderStyle) -> [&'static str; DAYS_PER_WEEK] {
        self.weekday_order().map(|weekday| style.label(weekday))
    }

    /// Every cell as `(week, column, day)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<u32>)> + '_ {
        self.weeks.iter().enumerate().flat_map(|(row, week)| {
            week.iter()
                .enumerate()
                .map(move |(column, day)| (row, column, *day))
        })
    }

    /// Number of non-blank cells.
    pub fn day_count(&self) -> usize {
        self.cells().filter(|(_, _, day)| day.is_some()).count()
    }

    /// `(week, column)` of `day`, if it belongs to this month.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        if day == 0 || day > self.days_in_month {
            return None;
        }
        let index = self.first_day_column + (day - 1) as usize;
        Some((index / DAYS_PER_WEEK, index % DAYS_PER_WEEK))
    }

    pub fn month_name(&self) -> &'static str {
        // The month was validated on construction.
        month_name(self.month).unwrap_or("")
    }

    /// Page title, e.g. `"February 2024"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}
