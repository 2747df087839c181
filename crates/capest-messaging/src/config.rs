//! Cluster configuration the estimate is checked against.

use capest_types::{QueryParams, Result, ShareQuery, input};
use serde::Serialize;

use crate::tier::{MessagingLimits, Tier};

pub(crate) const CLUSTERS_FIELD: &str = "number of clusters";
pub(crate) const CAPACITY_UNITS_FIELD: &str = "number of CUs per cluster";
const MAX_PARTITIONS_FIELD: &str = "maximum partitions per topic";

/// Query key of the cluster count.
pub const QUERY_CLUSTERS: &str = "numClusters";
/// Query key of the tier.
pub const QUERY_TIER: &str = "tier";
/// Query key of the capacity units per cluster.
pub const QUERY_CAPACITY_UNITS: &str = "cusPerCluster";
/// Query key of the partitions-per-topic override.
pub const QUERY_MAX_PARTITIONS: &str = "maxPartitionsPerTopic";

/// Tier, cluster count and capacity units of a messaging deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessagingConfig {
    pub(crate) tier: Tier,
    pub(crate) cluster_count: u32,
    pub(crate) capacity_units_per_cluster: u32,
    pub(crate) max_partitions_per_topic: Option<u32>,
}

impl MessagingConfig {
    /// Creates a single-cluster configuration running at the tier ceiling.
    #[must_use]
    pub const fn for_tier(tier: Tier, limits: &MessagingLimits) -> Self {
        Self {
            tier,
            cluster_count: 1,
            capacity_units_per_cluster: limits.tier(tier).max_capacity_units_per_cluster,
            max_partitions_per_topic: None,
        }
    }

    /// Creates a configuration after checking it against `limits`.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if a count is zero or the capacity
    /// units per cluster exceed the tier ceiling.
    pub fn new(
        tier: Tier,
        cluster_count: u32,
        capacity_units_per_cluster: u32,
        limits: &MessagingLimits,
    ) -> Result<Self> {
        let config = Self {
            tier,
            cluster_count,
            capacity_units_per_cluster,
            max_partitions_per_topic: None,
        };
        config.validate(limits)?;
        Ok(config)
    }

    /// Parses the cluster and capacity unit counts from raw text fields.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if either count is not a whole
    /// number of at least one or exceeds the tier ceiling.
    pub fn parse(
        tier: Tier,
        cluster_count: &str,
        capacity_units_per_cluster: &str,
        limits: &MessagingLimits,
    ) -> Result<Self> {
        let cluster_count = input::parse_count(CLUSTERS_FIELD, cluster_count)?;
        let capacity_units = input::parse_count(CAPACITY_UNITS_FIELD, capacity_units_per_cluster)?;
        Self::new(tier, cluster_count, capacity_units, limits)
    }

    /// Replaces the tier-wide partitions-per-topic ceiling.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if `max` is zero.
    pub fn with_max_partitions_per_topic(mut self, max: u32) -> Result<Self> {
        self.max_partitions_per_topic = Some(input::positive_count(MAX_PARTITIONS_FIELD, max)?);
        Ok(self)
    }

    /// Checks counts and the capacity unit ceiling of the tier.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` on the first failing field.
    pub fn validate(&self, limits: &MessagingLimits) -> Result<()> {
        input::positive_count(CLUSTERS_FIELD, self.cluster_count)?;
        input::positive_count(CAPACITY_UNITS_FIELD, self.capacity_units_per_cluster)?;
        input::at_most(
            CAPACITY_UNITS_FIELD,
            self.capacity_units_per_cluster,
            limits.tier(self.tier).max_capacity_units_per_cluster,
        )?;
        if let Some(max) = self.max_partitions_per_topic {
            input::positive_count(MAX_PARTITIONS_FIELD, max)?;
        }
        Ok(())
    }

    /// Returns the tier.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Returns the number of clusters.
    #[must_use]
    pub const fn cluster_count(&self) -> u32 {
        self.cluster_count
    }

    /// Returns the configured capacity units per cluster.
    #[must_use]
    pub const fn capacity_units_per_cluster(&self) -> u32 {
        self.capacity_units_per_cluster
    }

    /// Returns the partitions-per-topic override, if any.
    #[must_use]
    pub const fn max_partitions_override(&self) -> Option<u32> {
        self.max_partitions_per_topic
    }

    /// Returns the effective partitions-per-topic ceiling of one cluster.
    #[must_use]
    pub const fn max_partitions_per_topic(&self, limits: &MessagingLimits) -> u32 {
        match self.max_partitions_per_topic {
            Some(max) => max,
            None => limits.tier(self.tier).max_partitions_per_topic,
        }
    }

    /// Returns the capacity units the whole configuration provides.
    #[must_use]
    pub const fn configured_capacity_units(&self) -> u64 {
        self.cluster_count as u64 * self.capacity_units_per_cluster as u64
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self::for_tier(Tier::default(), &MessagingLimits::DEFAULT)
    }
}

impl ShareQuery for MessagingConfig {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set(QUERY_CLUSTERS, self.cluster_count);
        params.set(QUERY_TIER, self.tier);
        params.set(QUERY_CAPACITY_UNITS, self.capacity_units_per_cluster);
        if let Some(max) = self.max_partitions_per_topic {
            params.set(QUERY_MAX_PARTITIONS, max);
        }
        params
    }

    /// Missing keys fall back to one cluster of the dedicated tier at its
    /// default capacity unit ceiling.
    fn from_query(params: &QueryParams) -> Result<Self> {
        Self::from_query_with(params, &MessagingLimits::DEFAULT)
    }
}

impl MessagingConfig {
    /// Reads a configuration from query parameters, checking it against
    /// `limits`.
    ///
    /// Missing keys fall back to one cluster at the tier's capacity unit
    /// ceiling.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if a present value is invalid.
    pub fn from_query_with(params: &QueryParams, limits: &MessagingLimits) -> Result<Self> {
        let tier = match params.get(QUERY_TIER) {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<Tier>()?,
            _ => Tier::default(),
        };
        let mut config = Self::for_tier(tier, limits);
        if let Some(clusters) = params.optional_count(QUERY_CLUSTERS, CLUSTERS_FIELD)? {
            config.cluster_count = clusters;
        }
        if let Some(units) = params.optional_count(QUERY_CAPACITY_UNITS, CAPACITY_UNITS_FIELD)? {
            config.capacity_units_per_cluster = units;
        }
        config.max_partitions_per_topic =
            params.optional_count(QUERY_MAX_PARTITIONS, MAX_PARTITIONS_FIELD)?;
        config.validate(limits)?;
        Ok(config)
    }
}
