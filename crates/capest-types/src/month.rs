//! Calendar month iteration and labels.

use chrono::{Datelike, NaiveDate};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::InputError;

/// Display label of a projected month, e.g. `"October 2026"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthLabel(String);

impl MonthLabel {
    /// Formats the month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self(date.format("%B %Y").to_string())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Parses a `YYYY-MM` month into the first day of that month.
///
/// A full `YYYY-MM-DD` date is accepted as well and truncated to its month.
///
/// # Errors
///
/// Returns [`InputError::UnknownChoice`] if the text is not a valid month.
pub fn parse_month(raw: &str) -> Result<NaiveDate, InputError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map(first_of_month)
        .map_err(|_| InputError::UnknownChoice {
            field: "start month",
            value: raw.to_string(),
            expected: "a YYYY-MM month",
        })
}

/// Iterator over consecutive calendar months.
///
/// Yields the first day of each month, starting with the month containing
/// the start date and rolling over into the next year after December.
#[derive(Debug, Clone)]
pub struct MonthIterator {
    year: i32,
    month0: u32,
}

impl MonthIterator {
    /// Creates an iterator starting at the month containing `start`.
    #[must_use]
    pub fn new(start: NaiveDate) -> Self {
        Self {
            year: start.year(),
            month0: start.month0(),
        }
    }
}

impl Iterator for MonthIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)?;
        self.month0 += 1;
        if self.month0 > 11 {
            self.month0 = 0;
            self.year += 1;
        }
        Some(current)
    }
}
