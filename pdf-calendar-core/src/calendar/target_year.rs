//! Choosing which year to print.
//!
//! Calendars are usually printed ahead of time, so the year is chosen by
//! looking a fixed number of days past the reference date: late in the year
//! the next year is selected, earlier on the current one.

use crate::calendar::grid::validate_year;
use crate::error::{CalendarError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Default look-ahead, roughly six months.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 180;

/// Upper bound for the look-ahead window.
pub const MAX_LOOKAHEAD_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetYearPolicy {
    lookahead_days: u32,
}

impl Default for TargetYearPolicy {
    fn default() -> Self {
        Self {
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
        }
    }
}

impl TargetYearPolicy {
    pub fn new(lookahead_days: u32) -> Result<Self> {
        if lookahead_days > MAX_LOOKAHEAD_DAYS {
            return Err(CalendarError::InvalidLookahead(lookahead_days));
        }
        Ok(Self { lookahead_days })
    }

    pub fn lookahead_days(&self) -> u32 {
        self.lookahead_days
    }

    /// Year of `reference` shifted forward by the look-ahead window.
    pub fn target_year(&self, reference: NaiveDate) -> i32 {
        reference
            .checked_add_days(Days::new(u64::from(self.lookahead_days)))
            .map(|date| date.year())
            .unwrap_or_else(|| reference.year())
    }

    /// True when the look-ahead crosses into the following year.
    pub fn rolls_over(&self, reference: NaiveDate) -> bool {
        self.target_year(reference) > reference.year()
    }

    /// An explicit year wins over the policy; either way the result is
    /// checked against the supported range.
    pub fn resolve(&self, explicit: Option<i32>, reference: NaiveDate) -> Result<i32> {
        let year = explicit.unwrap_or_else(|| self.target_year(reference));
        validate_year(year)?;
        Ok(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_lookahead() {
        assert_eq!(TargetYearPolicy::default().lookahead_days(), 180);
    }

    #[test]
    fn test_rollover_boundary() {
        let policy = TargetYearPolicy::default();

        // 4 July + 180 days is 31 December; 5 July crosses into January.
        assert_eq!(policy.target_year(date(2024, 7, 4)), 2024);
        assert_eq!(policy.target_year(date(2024, 7, 5)), 2025);
        assert!(!policy.rolls_over(date(2024, 7, 4)));
        assert!(policy.rolls_over(date(2024, 7, 5)));
    }

    #[test]
    fn test_early_and_late_in_year() {
        let policy = TargetYearPolicy::default();
        assert_eq!(policy.target_year(date(2026, 1, 1)), 2026);
        assert_eq!(policy.target_year(date(2026, 10, 19)), 2027);
        assert_eq!(policy.target_year(date(2026, 12, 31)), 2027);
    }

    #[test]
    fn test_zero_lookahead_is_current_year() {
        let policy = TargetYearPolicy::new(0).unwrap();
        assert_eq!(policy.target_year(date(2026, 12, 31)), 2026);
    }

    #[test]
    fn test_lookahead_bounds() {
        assert!(TargetYearPolicy::new(365).is_ok());
        assert!(matches!(
            TargetYearPolicy::new(366),
            Err(CalendarError::InvalidLookahead(366))
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit_year() {
        let policy = TargetYearPolicy::default();
        let today = date(2026, 10, 19);

        assert_eq!(policy.resolve(Some(2030), today).unwrap(), 2030);
        assert_eq!(policy.resolve(None, today).unwrap(), 2027);
        assert!(matches!(
            policy.resolve(Some(0), today),
            Err(CalendarError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_resolve_rejects_year_past_range() {
        let policy = TargetYearPolicy::default();
        assert!(matches!(
            policy.resolve(None, date(9999, 12, 1)),
            Err(CalendarError::InvalidYear(10_000))
        ));
    }
}
