//! Complete storage sizing report.

use std::fmt;

use capest_types::{Result, ShareQuery};
use chrono::NaiveDate;
use serde::Serialize;

use crate::estimator::{ConfigRow, StorageEstimate, StorageEstimator, StorageInputs};
use crate::projection::StorageProjectionRow;

/// Everything one storage calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageReport {
    /// The validated inputs.
    pub inputs: StorageInputs,
    /// Per-account ingress limit used, in GB/sec.
    pub max_ingress_gb_per_sec: f64,
    /// The estimate at the current volume.
    pub estimate: StorageEstimate,
    /// Configuration table rows.
    pub config: Vec<ConfigRow>,
    /// Month-by-month projection.
    pub projection: Vec<StorageProjectionRow>,
    /// Share query string reproducing the inputs.
    pub share_query: String,
}

impl StorageEstimator {
    /// Runs the estimate and projection for validated inputs.
    #[must_use]
    pub fn report(&self, inputs: &StorageInputs, start_month: NaiveDate) -> StorageReport {
        let estimate = self.estimate(inputs);
        StorageReport {
            inputs: *inputs,
            max_ingress_gb_per_sec: self.limits().max_ingress_gb_per_sec,
            config: self.config_rows(&estimate),
            projection: self.project(inputs, start_month),
            share_query: inputs.to_query().to_string(),
            estimate,
        }
    }

    /// Parses the raw field and builds the full report.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the field is invalid.
    pub fn report_raw(&self, daily_volume_tb: &str, start_month: NaiveDate) -> Result<StorageReport> {
        let inputs = StorageInputs::parse(daily_volume_tb)?;
        Ok(self.report(&inputs, start_month))
    }
}

impl fmt::Display for StorageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.estimate;
        writeln!(f, "Storage Account Analysis:")?;
        writeln!(f, "Daily Volume: {} TB/day", e.daily_volume_tb)?;
        writeln!(f, "Peak Ingress Rate: {:.2} GB/sec", e.peak_ingress_gb_per_sec)?;
        writeln!(f, "Required Storage Accounts: {}", e.required_accounts)?;
        writeln!(f, "Utilization per Account: {:.1}%", e.utilization_percent)?;
        write!(
            f,
            "Based on maximum ingress throughput of {} GB/sec per storage account",
            self.max_ingress_gb_per_sec
        )
    }
}
