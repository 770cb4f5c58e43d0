use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid year: {0} (expected 1..=9999)")]
    InvalidYear(i32),

    #[error("Invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),

    #[error("Invalid look-ahead: {0} days (at most 365)")]
    InvalidLookahead(u32),

    #[error("Invalid hue scheme: expected 1 or 12 hues, got {0}")]
    InvalidHues(usize),

    #[error("Invalid page size: {width} x {height} points")]
    InvalidPageSize { width: f64, height: f64 },

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Failed to generate {year}-{month:02}")]
    Month {
        year: i32,
        month: u32,
        #[source]
        source: Box<CalendarError>,
    },
}

impl CalendarError {
    /// Tags an error with the month it was raised for.
    pub fn for_month(self, year: i32, month: u32) -> Self {
        match self {
            already @ CalendarError::Month { .. } => already,
            other => CalendarError::Month {
                year,
                month,
                source: Box::new(other),
            },
        }
    }

    /// The month a per-month failure belongs to, if any.
    pub fn month(&self) -> Option<u32> {
        match self {
            CalendarError::Month { month, .. } => Some(*month),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
