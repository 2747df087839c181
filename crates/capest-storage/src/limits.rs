//! Storage account limits.

use capest_types::DEFAULT_MONTHLY_GROWTH_RATE;
use serde::{Deserialize, Serialize};

/// Decimal gigabytes per terabyte.
pub const GB_PER_TB: f64 = 1000.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Utilization at which a storage account is flagged as a warning, in percent.
pub const UTILIZATION_WARNING_PERCENT: f64 = 60.0;

/// Utilization at which a storage account is flagged as bad, in percent.
pub const UTILIZATION_BAD_PERCENT: f64 = 80.0;

/// Throughput limits of a single storage account.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageLimits {
    /// Maximum ingress throughput per storage account, in GB/sec.
    pub max_ingress_gb_per_sec: f64,
    /// Fractional monthly growth of the daily volume (0.10 = 10%).
    pub monthly_growth_rate: f64,
}

impl StorageLimits {
    /// Default limits: 60 GB/sec per account, 10% monthly growth.
    pub const DEFAULT: Self = Self {
        max_ingress_gb_per_sec: 60.0,
        monthly_growth_rate: DEFAULT_MONTHLY_GROWTH_RATE,
    };
}

impl Default for StorageLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
