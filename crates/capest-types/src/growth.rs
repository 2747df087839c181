//! Month-by-month compounding growth.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MonthIterator;

/// Default number of projected months.
pub const DEFAULT_PROJECTION_MONTHS: usize = 7;

/// Default monthly growth rate (10%).
pub const DEFAULT_MONTHLY_GROWTH_RATE: f64 = 0.10;

/// Parameters of a forward projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSettings {
    /// Number of months to project, including the start month.
    pub months: usize,
    /// Fractional growth applied between consecutive months (0.10 = 10%).
    pub monthly_growth_rate: f64,
}

impl ProjectionSettings {
    /// Creates projection settings.
    #[must_use]
    pub const fn new(months: usize, monthly_growth_rate: f64) -> Self {
        Self {
            months,
            monthly_growth_rate,
        }
    }

    /// Returns the factor applied to the primary value each month.
    #[must_use]
    pub fn growth_multiplier(&self) -> f64 {
        1.0 + self.monthly_growth_rate
    }

    /// Returns the compounding series of `start` over the projected months.
    #[must_use]
    pub fn series(&self, start: f64) -> GrowthSeries {
        GrowthSeries::new(start, self.growth_multiplier(), self.months)
    }

    /// Pairs each projected month, starting at `start_month`, with the
    /// compounded value for that month.
    pub fn steps(
        self,
        start_value: f64,
        start_month: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, f64)> {
        MonthIterator::new(start_month).zip(self.series(start_value))
    }
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECTION_MONTHS, DEFAULT_MONTHLY_GROWTH_RATE)
    }
}

/// Iterator over a value compounded by a fixed multiplier.
///
/// Each item is the previous item multiplied by the multiplier, so item
/// `i + 1` equals item `i * multiplier` exactly.
#[derive(Debug, Clone)]
pub struct GrowthSeries {
    current: f64,
    multiplier: f64,
    remaining: usize,
}

impl GrowthSeries {
    /// Creates a series of `len` values starting at `start`.
    #[must_use]
    pub const fn new(start: f64, multiplier: f64, len: usize) -> Self {
        Self {
            current: start,
            multiplier,
            remaining: len,
        }
    }
}

impl Iterator for GrowthSeries {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.current;
        self.current *= self.multiplier;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GrowthSeries {}
