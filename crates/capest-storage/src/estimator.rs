//! Storage account sizing.

use capest_types::{
    CapacityStatus, DEFAULT_PROJECTION_MONTHS, ProjectionSettings, QueryParams, Result,
    ShareQuery, input,
};
use serde::Serialize;

use crate::limits::{
    GB_PER_TB, SECONDS_PER_DAY, StorageLimits, UTILIZATION_BAD_PERCENT,
    UTILIZATION_WARNING_PERCENT,
};

const VOLUME_FIELD: &str = "daily volume in TB/day";

/// Query key of the daily volume.
pub const QUERY_DAILY_VOLUME: &str = "dailyVolumeTB";

/// Validated daily ingestion volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StorageInputs {
    pub(crate) daily_volume_tb: f64,
}

impl StorageInputs {
    /// Creates validated inputs.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the volume is not strictly
    /// positive or its peak rate overflows.
    pub fn new(daily_volume_tb: f64) -> Result<Self> {
        Self::checked(input::positive(VOLUME_FIELD, daily_volume_tb)?)
    }

    /// Parses the daily volume from a raw text field.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the text is non-numeric, not
    /// strictly positive or too large to convert to a peak rate.
    pub fn parse(daily_volume_tb: &str) -> Result<Self> {
        Self::checked(input::parse_positive(VOLUME_FIELD, daily_volume_tb)?)
    }

    fn checked(daily_volume_tb: f64) -> Result<Self> {
        let peak = peak_gb_per_sec(daily_volume_tb);
        Ok(Self {
            daily_volume_tb: input::finite_derived(VOLUME_FIELD, daily_volume_tb, peak)?,
        })
    }

    /// Returns the daily volume in TB/day.
    #[must_use]
    pub const fn daily_volume_tb(&self) -> f64 {
        self.daily_volume_tb
    }
}

impl ShareQuery for StorageInputs {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set(QUERY_DAILY_VOLUME, self.daily_volume_tb);
        params
    }

    fn from_query(params: &QueryParams) -> Result<Self> {
        Self::new(params.positive(QUERY_DAILY_VOLUME, VOLUME_FIELD)?)
    }
}

/// Storage account requirements for a daily volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StorageEstimate {
    /// Daily volume in TB/day.
    pub daily_volume_tb: f64,
    /// Peak ingress rate in GB/sec.
    pub peak_ingress_gb_per_sec: f64,
    /// Number of storage accounts needed to stay within the per-account limit.
    pub required_accounts: u64,
    /// Average ingress load per account, in percent of the limit.
    pub utilization_percent: f64,
    /// Maximum theoretical throughput of the required accounts, in GB/sec.
    pub total_capacity_gb_per_sec: f64,
    /// Utilization classification.
    pub status: CapacityStatus,
}

/// One row of the storage configuration table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigRow {
    /// Metric name.
    pub metric: &'static str,
    /// Formatted value.
    pub value: String,
    /// Explanation of the value.
    pub details: String,
    /// Status, set only on the utilization row.
    pub status: Option<CapacityStatus>,
}

const fn peak_gb_per_sec(daily_volume_tb: f64) -> f64 {
    daily_volume_tb * GB_PER_TB / SECONDS_PER_DAY
}

/// Classifies per-account utilization.
#[must_use]
pub fn utilization_status(utilization_percent: f64) -> CapacityStatus {
    CapacityStatus::from_breakpoints(
        utilization_percent,
        UTILIZATION_WARNING_PERCENT,
        UTILIZATION_BAD_PERCENT,
    )
}

/// Storage account sizing estimator.
#[derive(Debug, Clone)]
pub struct StorageEstimator {
    limits: StorageLimits,
    months: usize,
}

impl StorageEstimator {
    /// Creates an estimator projecting `months` months ahead.
    #[must_use]
    pub const fn new(limits: StorageLimits, months: usize) -> Self {
        Self { limits, months }
    }

    /// Returns the account limits.
    #[must_use]
    pub const fn limits(&self) -> &StorageLimits {
        &self.limits
    }

    /// Returns the projection settings derived from the limits.
    #[must_use]
    pub const fn projection_settings(&self) -> ProjectionSettings {
        ProjectionSettings::new(self.months, self.limits.monthly_growth_rate)
    }

    /// Sizes storage accounts for validated inputs.
    #[must_use]
    pub fn estimate(&self, inputs: &StorageInputs) -> StorageEstimate {
        let max = self.limits.max_ingress_gb_per_sec;
        // Projected volumes can outgrow the checked input; clamp to stay finite.
        let peak = peak_gb_per_sec(inputs.daily_volume_tb).min(f64::MAX);
        let accounts = (peak / max).ceil();
        let utilization_percent = (peak / accounts / max) * 100.0;

        let estimate = StorageEstimate {
            daily_volume_tb: inputs.daily_volume_tb,
            peak_ingress_gb_per_sec: peak,
            required_accounts: accounts as u64,
            utilization_percent,
            total_capacity_gb_per_sec: accounts * max,
            status: utilization_status(utilization_percent),
        };
        tracing::debug!(
            daily_volume_tb = inputs.daily_volume_tb,
            accounts = estimate.required_accounts,
            utilization = estimate.utilization_percent,
            "computed storage estimate"
        );
        estimate
    }

    /// Parses the raw field and sizes storage accounts.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the field is invalid.
    pub fn estimate_raw(&self, daily_volume_tb: &str) -> Result<StorageEstimate> {
        Ok(self.estimate(&StorageInputs::parse(daily_volume_tb)?))
    }

    /// Builds the configuration table rows for an estimate.
    #[must_use]
    pub fn config_rows(&self, estimate: &StorageEstimate) -> Vec<ConfigRow> {
        let max = self.limits.max_ingress_gb_per_sec;
        vec![
            ConfigRow {
                metric: "Daily Ingress Volume",
                value: format!("{} TB/day", estimate.daily_volume_tb),
                details: "Input volume".to_string(),
                status: None,
            },
            ConfigRow {
                metric: "Peak Ingress Rate",
                value: format!("{:.2} GB/sec", estimate.peak_ingress_gb_per_sec),
                details: "Calculated from daily volume".to_string(),
                status: None,
            },
            ConfigRow {
                metric: "Required Storage Accounts",
                value: estimate.required_accounts.to_string(),
                details: format!("To stay below {max} GB/sec limit"),
                status: None,
            },
            ConfigRow {
                metric: "Utilization per Account",
                value: format!("{:.1}%", estimate.utilization_percent),
                details: "Average ingress load per account".to_string(),
                status: Some(estimate.status),
            },
            ConfigRow {
                metric: "Total Capacity",
                value: format!("{} GB/sec", estimate.total_capacity_gb_per_sec),
                details: "Maximum theoretical throughput".to_string(),
                status: None,
            },
        ]
    }
}

impl Default for StorageEstimator {
    fn default() -> Self {
        Self::new(StorageLimits::DEFAULT, DEFAULT_PROJECTION_MONTHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use capest_types::{CapestError, InputError};

    #[test]
    fn test_exact_account_boundary() {
        let estimator = StorageEstimator::default();
        let est = estimator.estimate(&StorageInputs::new(5184.0).unwrap());

        assert_eq!(est.peak_ingress_gb_per_sec, 60.0);
        assert_eq!(est.required_accounts, 1);
        assert_eq!(est.utilization_percent, 100.0);
        assert_eq!(est.status, CapacityStatus::Bad);
    }

    #[test]
    fn test_just_over_boundary_needs_two_accounts() {
        let estimator = StorageEstimator::default();
        let est = estimator.estimate(&StorageInputs::new(5184.1).unwrap());

        assert_eq!(est.required_accounts, 2);
        assert_relative_eq!(est.utilization_percent, 50.0, epsilon = 0.01);
        assert_eq!(est.status, CapacityStatus::Ok);
        assert_eq!(est.total_capacity_gb_per_sec, 120.0);
    }

    #[test]
    fn test_small_volume() {
        let estimator = StorageEstimator::default();
        let est = estimator.estimate(&StorageInputs::new(100.0).unwrap());

        assert_relative_eq!(est.peak_ingress_gb_per_sec, 1.157407, epsilon = 1e-6);
        assert_eq!(est.required_accounts, 1);
        assert_relative_eq!(est.utilization_percent, 1.929, epsilon = 1e-3);
    }

    #[test]
    fn test_utilization_bands() {
        assert_eq!(utilization_status(59.9), CapacityStatus::Ok);
        assert_eq!(utilization_status(60.0), CapacityStatus::Warning);
        assert_eq!(utilization_status(79.9), CapacityStatus::Warning);
        assert_eq!(utilization_status(80.0), CapacityStatus::Bad);
    }

    #[test]
    fn test_invalid_volume() {
        let estimator = StorageEstimator::default();
        assert!(estimator.estimate_raw("0").unwrap_err().is_invalid_input());
        assert!(estimator.estimate_raw("-5").is_err());
        assert!(estimator.estimate_raw("lots").is_err());
        assert!(StorageInputs::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_volume_too_large_for_peak_rate() {
        assert!(matches!(
            StorageInputs::new(1e306),
            Err(CapestError::InvalidInput(InputError::TooLarge { .. }))
        ));
        assert!(StorageInputs::new(f64::MAX).is_err());
        assert!(StorageEstimator::default().estimate_raw("2e305").is_err());
        assert!(StorageInputs::new(1e305).is_ok());
    }

    #[test]
    fn test_estimate_stays_finite_for_overgrown_volume() {
        let estimator = StorageEstimator::default();
        let est = estimator.estimate(&StorageInputs {
            daily_volume_tb: f64::MAX,
        });
        assert!(est.peak_ingress_gb_per_sec.is_finite());
        assert!(est.utilization_percent.is_finite());
        assert_eq!(est.required_accounts, u64::MAX);
    }

    #[test]
    fn test_config_rows() {
        let estimator = StorageEstimator::default();
        let est = estimator.estimate(&StorageInputs::new(5184.0).unwrap());
        let rows = estimator.config_rows(&est);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].value, "5184 TB/day");
        assert_eq!(rows[1].value, "60.00 GB/sec");
        assert_eq!(rows[2].details, "To stay below 60 GB/sec limit");
        assert_eq!(rows[3].value, "100.0%");
        assert_eq!(rows[3].status, Some(CapacityStatus::Bad));
        assert_eq!(rows[4].value, "60 GB/sec");
        assert!(rows.iter().filter(|r| r.status.is_some()).count() == 1);
    }

    #[test]
    fn test_query_round_trip() {
        let inputs = StorageInputs::new(42.5).unwrap();
        assert_eq!(inputs.to_query().to_string(), "dailyVolumeTB=42.5");
        assert_eq!(StorageInputs::from_query(&inputs.to_query()).unwrap(), inputs);
    }
}
