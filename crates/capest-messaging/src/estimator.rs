//! Partition and capacity unit sizing.

use capest_types::{
    CapacityStatus, InputError, ProjectionSettings, QueryParams, Result, ShareQuery, input,
};
use serde::Serialize;

use crate::config::MessagingConfig;
use crate::ingress::{Ingress, IngressUnit};
use crate::tier::MessagingLimits;

pub(crate) const TOPICS_FIELD: &str = "number of topics";

/// Query key of the ingress value.
pub const QUERY_INGRESS: &str = "ingress";
/// Query key of the ingress unit.
pub const QUERY_INGRESS_UNIT: &str = "ingressUnit";
/// Query key of the topic count.
pub const QUERY_TOPICS: &str = "numTopics";

/// Validated ingress rate and topic count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MessagingInputs {
    pub(crate) ingress: Ingress,
    pub(crate) topic_count: u32,
}

impl MessagingInputs {
    /// Creates validated inputs.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the topic count is zero.
    pub fn new(ingress: Ingress, topic_count: u32) -> Result<Self> {
        Ok(Self {
            ingress,
            topic_count: input::positive_count(TOPICS_FIELD, topic_count)?,
        })
    }

    /// Parses the ingress value and topic count from raw text fields.
    ///
    /// The ingress is checked first. An empty topic field means one topic.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if either field is invalid.
    pub fn parse(ingress: &str, unit: IngressUnit, topic_count: &str) -> Result<Self> {
        let ingress = Ingress::parse(ingress, unit)?;
        let topic_count = match topic_count.trim() {
            "" => 1,
            raw => input::parse_count(TOPICS_FIELD, raw)?,
        };
        Ok(Self {
            ingress,
            topic_count,
        })
    }

    /// Returns the ingress rate.
    #[must_use]
    pub const fn ingress(&self) -> Ingress {
        self.ingress
    }

    /// Returns the number of topics.
    #[must_use]
    pub const fn topic_count(&self) -> u32 {
        self.topic_count
    }
}

impl ShareQuery for MessagingInputs {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set(QUERY_INGRESS, self.ingress.value());
        params.set(QUERY_INGRESS_UNIT, self.ingress.unit());
        params.set(QUERY_TOPICS, self.topic_count);
        params
    }

    fn from_query(params: &QueryParams) -> Result<Self> {
        let unit = match params.get(QUERY_INGRESS_UNIT) {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<IngressUnit>()?,
            _ => IngressUnit::default(),
        };
        Self::parse(
            params.get(QUERY_INGRESS).unwrap_or_default(),
            unit,
            params.get(QUERY_TOPICS).unwrap_or_default(),
        )
    }
}

/// Partitions and capacity units needed for an ingress rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartitionEstimate {
    /// Ingress the estimate was computed for.
    pub ingress: Ingress,
    /// Ingress in bytes/sec.
    pub bytes_per_sec: f64,
    /// Number of topics the ingress is spread across.
    pub topic_count: u32,
    /// Partitions needed in each topic.
    pub partitions_per_topic: u64,
    /// Partitions needed across all topics.
    pub total_required_partitions: u64,
    /// Capacity units needed to serve all partitions.
    pub required_capacity_units: u64,
}

impl PartitionEstimate {
    /// Returns the summary sentence of the estimate.
    #[must_use]
    pub fn summary(&self) -> String {
        let plural = if self.topic_count > 1 { "s" } else { "" };
        format!(
            "Required number of partitions per topic: {} (across {} topic{plural})",
            self.partitions_per_topic, self.topic_count
        )
    }
}

/// A partition estimate checked against a cluster configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MessagingEstimate {
    /// The partition estimate.
    pub partitions: PartitionEstimate,
    /// The configuration checked.
    pub config: MessagingConfig,
    /// Effective partitions-per-topic ceiling of one cluster.
    pub max_partitions_per_topic: u32,
    /// Partitions all clusters can hold across all topics.
    pub overall_max_partitions: u64,
    /// Capacity units the configuration provides.
    pub cluster_config_capacity_units: u64,
    /// Capacity units the clusters could provide at the tier ceiling.
    pub tier_max_capacity_units: u64,
    /// Whether the partitions fit.
    pub partition_status: CapacityStatus,
    /// Whether the capacity units fit.
    pub capacity_status: CapacityStatus,
}

impl MessagingEstimate {
    /// Returns the partitions-per-topic ceiling across all clusters.
    #[must_use]
    pub const fn max_partitions_per_topic_overall(&self) -> u64 {
        self.max_partitions_per_topic as u64 * self.config.cluster_count as u64
    }

    /// Returns the summary lines of the capacity check.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Number of CUs needed today (based on partition count): {}",
                self.partitions.required_capacity_units
            ),
            format!(
                "Your cluster config supports: {} CUs",
                self.cluster_config_capacity_units
            ),
            format!(
                "Max partitions supported: {} ({} per topic, per cluster)",
                self.overall_max_partitions, self.max_partitions_per_topic
            ),
        ]
    }
}

/// Messaging partition and capacity unit estimator.
#[derive(Debug, Clone, Default)]
pub struct MessagingEstimator {
    limits: MessagingLimits,
    projection: ProjectionSettings,
}

impl MessagingEstimator {
    /// Creates an estimator.
    #[must_use]
    pub const fn new(limits: MessagingLimits, projection: ProjectionSettings) -> Self {
        Self { limits, projection }
    }

    /// Returns the limits.
    #[must_use]
    pub const fn limits(&self) -> &MessagingLimits {
        &self.limits
    }

    /// Returns the projection settings.
    #[must_use]
    pub const fn projection_settings(&self) -> ProjectionSettings {
        self.projection
    }

    /// Computes the partitions and capacity units for validated inputs.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the ingress needs more
    /// partitions than a `u64` can count.
    pub fn estimate_partitions(&self, inputs: &MessagingInputs) -> Result<PartitionEstimate> {
        let bytes_per_sec = inputs.ingress.bytes_per_sec();
        let topics = u64::from(inputs.topic_count);
        let per_topic = (bytes_per_sec
            / self.limits.partition_throughput_bytes_per_sec
            / f64::from(inputs.topic_count))
        .ceil();
        let (per_topic, total) = partition_counts(per_topic, topics).ok_or_else(|| {
            tracing::warn!(ingress = %inputs.ingress, topics, "partition count overflows");
            InputError::TooLarge {
                field: inputs.ingress.unit().field(),
                value: inputs.ingress.value(),
            }
        })?;

        let estimate = PartitionEstimate {
            ingress: inputs.ingress,
            bytes_per_sec,
            topic_count: inputs.topic_count,
            partitions_per_topic: per_topic,
            total_required_partitions: total,
            required_capacity_units: self.limits.capacity_units_for(total),
        };
        tracing::debug!(
            ingress = %inputs.ingress,
            topics = inputs.topic_count,
            partitions_per_topic = per_topic,
            capacity_units = estimate.required_capacity_units,
            "estimated partitions"
        );
        Ok(estimate)
    }

    /// Parses raw fields and computes the partition estimate.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if a field is invalid.
    pub fn estimate_partitions_raw(
        &self,
        ingress: &str,
        unit: IngressUnit,
        topic_count: &str,
    ) -> Result<PartitionEstimate> {
        let inputs = MessagingInputs::parse(ingress, unit, topic_count)?;
        self.estimate_partitions(&inputs)
    }

    /// Checks a partition estimate against a cluster configuration.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the configuration is invalid
    /// for these limits.
    pub fn check_capacity(
        &self,
        partitions: &PartitionEstimate,
        config: &MessagingConfig,
    ) -> Result<MessagingEstimate> {
        config.validate(&self.limits)?;

        let clusters = u64::from(config.cluster_count);
        let max_per_topic = config.max_partitions_per_topic(&self.limits);
        let overall_max_partitions = u64::from(max_per_topic)
            .saturating_mul(clusters)
            .saturating_mul(u64::from(partitions.topic_count));
        let configured = config.configured_capacity_units();
        let tier_max =
            u64::from(self.limits.tier(config.tier).max_capacity_units_per_cluster) * clusters;

        let estimate = MessagingEstimate {
            partitions: *partitions,
            config: *config,
            max_partitions_per_topic: max_per_topic,
            overall_max_partitions,
            cluster_config_capacity_units: configured,
            tier_max_capacity_units: tier_max,
            partition_status: CapacityStatus::within(
                partitions.total_required_partitions <= overall_max_partitions,
            ),
            capacity_status: CapacityStatus::within(
                partitions.required_capacity_units <= configured,
            ),
        };
        tracing::debug!(
            tier = %config.tier,
            clusters = config.cluster_count,
            configured_units = configured,
            partitions = %estimate.partition_status,
            capacity = %estimate.capacity_status,
            "checked messaging capacity"
        );
        Ok(estimate)
    }
}

/// Rounds partitions per topic to a count and multiplies by the topic count,
/// or `None` when either does not fit in a `u64`.
fn partition_counts(per_topic: f64, topics: u64) -> Option<(u64, u64)> {
    // 2^64, the first float above every u64.
    let per_topic = (per_topic < 18_446_744_073_709_551_616.0).then(|| per_topic as u64)?;
    per_topic.checked_mul(topics).map(|total| (per_topic, total))
}
