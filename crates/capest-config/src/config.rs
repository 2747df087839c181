//! The effective configuration and its validation.

use capest_adx::{AdxBaseline, AdxEstimator};
use capest_messaging::{MessagingEstimator, MessagingLimits, TierLimits};
use capest_storage::{StorageEstimator, StorageLimits};
use capest_types::ProjectionSettings;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Longest projection window accepted, in months.
pub const MAX_PROJECTION_MONTHS: usize = 120;

/// Baselines, limits and projection settings of all estimators.
///
/// Every section defaults to the reference constants, so a configuration
/// file only needs the values it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapestConfig {
    /// Reference measurement the ADX estimator scales from.
    pub adx: AdxBaseline,
    /// Storage account limits and storage growth rate.
    pub storage: StorageLimits,
    /// Messaging throughput constants and tier ceilings.
    pub messaging: MessagingLimits,
    /// Projection window, and the growth rate of the ADX and messaging
    /// projections.
    pub projection: ProjectionSettings,
}

impl CapestConfig {
    /// Builds the ADX estimator.
    #[must_use]
    pub const fn adx_estimator(&self) -> AdxEstimator {
        AdxEstimator::new(self.adx, self.projection)
    }

    /// Builds the storage estimator.
    ///
    /// Storage volume grows at its own rate over the shared window.
    #[must_use]
    pub const fn storage_estimator(&self) -> StorageEstimator {
        StorageEstimator::new(self.storage, self.projection.months)
    }

    /// Builds the messaging estimator.
    #[must_use]
    pub const fn messaging_estimator(&self) -> MessagingEstimator {
        MessagingEstimator::new(self.messaging, self.projection)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let adx = &self.adx;
        positive("adx.ingest_tb_per_day", adx.ingest_tb_per_day)?;
        positive("adx.avg_latency_minutes", adx.avg_latency_minutes)?;
        positive("adx.max_latency_minutes", adx.max_latency_minutes)?;
        positive("adx.cpu_percent", adx.cpu_percent)?;
        positive("adx.cache_utilization_percent", adx.cache_utilization_percent)?;
        at_least_one("adx.instance_count", adx.instance_count)?;

        positive(
            "storage.max_ingress_gb_per_sec",
            self.storage.max_ingress_gb_per_sec,
        )?;
        growth_rate(
            "storage.monthly_growth_rate",
            self.storage.monthly_growth_rate,
        )?;

        let messaging = &self.messaging;
        positive(
            "messaging.partition_throughput_bytes_per_sec",
            messaging.partition_throughput_bytes_per_sec,
        )?;
        at_least_one(
            "messaging.partitions_per_capacity_unit",
            messaging.partitions_per_capacity_unit,
        )?;
        tier(
            "messaging.dedicated.max_partitions_per_topic",
            "messaging.dedicated.max_capacity_units_per_cluster",
            messaging.dedicated,
        )?;
        tier(
            "messaging.custom.max_partitions_per_topic",
            "messaging.custom.max_capacity_units_per_cluster",
            messaging.custom,
        )?;

        if !(1..=MAX_PROJECTION_MONTHS).contains(&self.projection.months) {
            return Err(ConfigError::Invalid {
                key: "projection.months",
                message: format!(
                    "must be between 1 and {MAX_PROJECTION_MONTHS}, got {}",
                    self.projection.months
                ),
            });
        }
        growth_rate(
            "projection.monthly_growth_rate",
            self.projection.monthly_growth_rate,
        )
    }
}

fn positive(key: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            message: format!("must be greater than 0, got {value}"),
        })
    }
}

fn at_least_one(key: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            message: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn growth_rate(key: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            message: format!("must be 0 or greater, got {value}"),
        })
    }
}

fn tier(partitions_key: &'static str, units_key: &'static str, limits: TierLimits) -> Result<()> {
    at_least_one(partitions_key, limits.max_partitions_per_topic)?;
    at_least_one(units_key, limits.max_capacity_units_per_cluster)
}
