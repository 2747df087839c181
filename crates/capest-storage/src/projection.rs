//! Month-by-month projection of storage account needs.

use capest_types::MonthLabel;
use chrono::NaiveDate;
use serde::Serialize;

use crate::estimator::{StorageEstimate, StorageEstimator, StorageInputs};

/// One projected month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageProjectionRow {
    /// First day of the projected month.
    pub month: NaiveDate,
    /// Display label of the month.
    pub label: MonthLabel,
    /// Estimate at the projected daily volume.
    pub estimate: StorageEstimate,
}

impl StorageProjectionRow {
    /// Returns the projected daily volume in TB/day.
    #[must_use]
    pub const fn daily_volume_tb(&self) -> f64 {
        self.estimate.daily_volume_tb
    }
}

impl StorageEstimator {
    /// Projects storage needs forward from the month of `start_month`.
    #[must_use]
    pub fn project(&self, inputs: &StorageInputs, start_month: NaiveDate) -> Vec<StorageProjectionRow> {
        self.projection_settings()
            .steps(inputs.daily_volume_tb, start_month)
            .map(|(month, volume)| StorageProjectionRow {
                month,
                label: MonthLabel::of(month),
                estimate: self.estimate(&StorageInputs {
                    daily_volume_tb: volume,
                }),
            })
            .collect()
    }
}
