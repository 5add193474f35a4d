use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Format accepted for dates entered in the dashboard filters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while validating dashboard filter inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The value could not be parsed with [`DATE_FORMAT`].
    #[error("`{0}` is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),
    /// The end of the range precedes its start.
    #[error("date range ends on {end} before it starts on {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate, FilterError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| FilterError::InvalidDate(trimmed.to_string()))
}

/// Closed calendar range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting one that ends before it starts.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FilterError> {
        if end < start {
            return Err(FilterError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` lies within the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Validated selection applied to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardFilter {
    /// Customer locations to include. Empty means nothing is selected.
    pub locations: BTreeSet<String>,
    /// Inclusive range of sale dates to include.
    pub date_range: DateRange,
}

impl DashboardFilter {
    pub fn new<I, S>(locations: I, date_range: DateRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
            date_range,
        }
    }
}
