//! Month-by-month projection of partitions and capacity units.

use capest_types::{CapacityStatus, MonthLabel, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::config::MessagingConfig;
use crate::estimator::{MessagingEstimator, PartitionEstimate};

/// One projected month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagingProjectionRow {
    /// First day of the projected month.
    pub month: NaiveDate,
    /// Display label of the month.
    pub label: MonthLabel,
    /// Compounded partitions per topic before rounding.
    pub projected_partitions: f64,
    /// Partitions per topic, rounded up.
    pub partitions_per_topic: u64,
    /// Capacity units needed across all topics.
    pub required_capacity_units: u64,
    /// Partitions per topic against the ceiling of all clusters.
    pub partition_status: CapacityStatus,
    /// Capacity units against the configured capacity.
    pub capacity_status: CapacityStatus,
    /// Unused share of the configured capacity units, negative when over.
    pub headroom_percent: f64,
}

/// A projection of a partition estimate on a fixed configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagingProjection {
    /// Capacity units the configuration provides.
    pub configured_capacity_units: u64,
    /// Partitions per topic all clusters can hold.
    pub max_partitions_per_topic: u64,
    /// Projected months.
    pub rows: Vec<MessagingProjectionRow>,
}

impl MessagingProjection {
    /// Returns the index of the first month needing more capacity units
    /// than configured.
    #[must_use]
    pub fn first_over_capacity(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.required_capacity_units > self.configured_capacity_units)
    }

    /// Names the month capacity runs out, or the whole projected window
    /// when it never does.
    #[must_use]
    pub fn over_capacity_label(&self) -> String {
        match self.first_over_capacity() {
            Some(index) => self.rows[index].label.to_string(),
            None => format!("the next {} months", self.rows.len()),
        }
    }
}

impl MessagingEstimator {
    /// Projects a partition estimate forward from the month of `start_month`
    /// with the cluster configuration held fixed.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the configuration is invalid
    /// for these limits.
    pub fn project(
        &self,
        partitions: &PartitionEstimate,
        config: &MessagingConfig,
        start_month: NaiveDate,
    ) -> Result<MessagingProjection> {
        config.validate(self.limits())?;

        let configured = config.configured_capacity_units();
        let max_per_topic = u64::from(config.max_partitions_per_topic(self.limits()))
            * u64::from(config.cluster_count());
        let topics = u64::from(partitions.topic_count);

        let rows = self
            .projection_settings()
            .steps(partitions.partitions_per_topic as f64, start_month)
            .map(|(month, projected)| {
                // Growth can carry the count past u64; saturate instead.
                let per_topic = projected.ceil() as u64;
                let units = self
                    .limits()
                    .capacity_units_for(per_topic.saturating_mul(topics));
                MessagingProjectionRow {
                    month,
                    label: MonthLabel::of(month),
                    projected_partitions: projected,
                    partitions_per_topic: per_topic,
                    required_capacity_units: units,
                    partition_status: CapacityStatus::within(per_topic <= max_per_topic),
                    capacity_status: CapacityStatus::within(units <= configured),
                    headroom_percent: (configured as f64 - units as f64) / configured as f64
                        * 100.0,
                }
            })
            .collect();

        Ok(MessagingProjection {
            configured_capacity_units: configured,
            max_partitions_per_topic: max_per_topic,
            rows,
        })
    }
}
