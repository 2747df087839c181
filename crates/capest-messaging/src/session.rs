//! Interactive messaging state.
//!
//! A [`MessagingSession`] remembers the last partition estimate and the
//! cluster configuration, so each step (estimating, switching tier,
//! resizing clusters) recomputes only what depends on it.

use capest_types::{CapestError, Result, input};
use chrono::NaiveDate;

use crate::config::{CAPACITY_UNITS_FIELD, CLUSTERS_FIELD, MessagingConfig};
use crate::estimator::{
    MessagingEstimate, MessagingEstimator, MessagingInputs, PartitionEstimate, TOPICS_FIELD,
};
use crate::ingress::IngressUnit;
use crate::projection::MessagingProjection;
use crate::tier::Tier;

const ESTIMATE_STEP: &str = "estimate partition count";

/// Last computed messaging values.
#[derive(Debug, Clone)]
pub struct MessagingSession {
    estimator: MessagingEstimator,
    estimate: Option<PartitionEstimate>,
    topic_count: u32,
    config: MessagingConfig,
}

impl MessagingSession {
    /// Creates a session with no estimate and one cluster of the default tier.
    #[must_use]
    pub fn new(estimator: MessagingEstimator) -> Self {
        let config = MessagingConfig::for_tier(Tier::default(), estimator.limits());
        Self {
            estimator,
            estimate: None,
            topic_count: 1,
            config,
        }
    }

    /// Returns the estimator.
    #[must_use]
    pub const fn estimator(&self) -> &MessagingEstimator {
        &self.estimator
    }

    /// Returns the last valid partition estimate.
    #[must_use]
    pub const fn estimate(&self) -> Option<&PartitionEstimate> {
        self.estimate.as_ref()
    }

    /// Returns the last topic count entered.
    #[must_use]
    pub const fn topic_count(&self) -> u32 {
        self.topic_count
    }

    /// Returns the current cluster configuration.
    #[must_use]
    pub const fn config(&self) -> &MessagingConfig {
        &self.config
    }

    /// Estimates partitions from raw fields and stores the result.
    ///
    /// An invalid field clears the stored estimate.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if a field is invalid.
    pub fn estimate_partitions(
        &mut self,
        ingress: &str,
        unit: IngressUnit,
        topic_count: &str,
    ) -> Result<PartitionEstimate> {
        match MessagingInputs::parse(ingress, unit, topic_count) {
            Ok(inputs) => self.estimate_inputs(&inputs),
            Err(err) => {
                self.estimate = None;
                if let Ok(topics) = input::parse_count(TOPICS_FIELD, topic_count) {
                    self.topic_count = topics;
                }
                Err(err)
            }
        }
    }

    /// Estimates partitions for validated inputs and stores the result.
    ///
    /// The topic count is recorded even when the estimate fails, which
    /// clears the stored estimate.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the partition count overflows.
    pub fn estimate_inputs(&mut self, inputs: &MessagingInputs) -> Result<PartitionEstimate> {
        self.topic_count = inputs.topic_count();
        let estimate = self.estimator.estimate_partitions(inputs);
        self.estimate = estimate.as_ref().ok().copied();
        estimate
    }

    /// Switches tier and resets the capacity units per cluster to its ceiling.
    pub fn set_tier(&mut self, tier: Tier) {
        self.config.tier = tier;
        self.config.capacity_units_per_cluster =
            self.estimator.limits().tier(tier).max_capacity_units_per_cluster;
        tracing::debug!(
            %tier,
            capacity_units = self.config.capacity_units_per_cluster,
            "switched tier"
        );
    }

    /// Sets the number of clusters.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` for zero.
    pub fn set_cluster_count(&mut self, cluster_count: u32) -> Result<()> {
        self.config.cluster_count = input::positive_count(CLUSTERS_FIELD, cluster_count)?;
        Ok(())
    }

    /// Sets the capacity units per cluster.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` for zero or a value above the tier
    /// ceiling.
    pub fn set_capacity_units_per_cluster(&mut self, units: u32) -> Result<()> {
        let max = self
            .estimator
            .limits()
            .tier(self.config.tier)
            .max_capacity_units_per_cluster;
        let units = input::positive_count(CAPACITY_UNITS_FIELD, units)?;
        self.config.capacity_units_per_cluster = input::at_most(CAPACITY_UNITS_FIELD, units, max)?;
        Ok(())
    }

    /// Replaces the whole cluster configuration.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the configuration is invalid
    /// for the estimator's limits.
    pub fn set_config(&mut self, config: MessagingConfig) -> Result<()> {
        config.validate(self.estimator.limits())?;
        self.config = config;
        Ok(())
    }

    fn require_estimate(&self) -> Result<&PartitionEstimate> {
        self.estimate
            .as_ref()
            .ok_or(CapestError::MissingPrerequisite {
                step: ESTIMATE_STEP,
            })
    }

    /// Checks the stored estimate against the current configuration.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::MissingPrerequisite` if no valid estimate is
    /// stored.
    pub fn check_capacity(&self) -> Result<MessagingEstimate> {
        let estimate = self.require_estimate()?;
        self.estimator.check_capacity(estimate, &self.config)
    }

    /// Projects the stored estimate on the current configuration.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::MissingPrerequisite` if no valid estimate is
    /// stored.
    pub fn projection(&self, start_month: NaiveDate) -> Result<MessagingProjection> {
        let estimate = self.require_estimate()?;
        self.estimator.project(estimate, &self.config, start_month)
    }
}

impl Default for MessagingSession {
    fn default() -> Self {
        Self::new(MessagingEstimator::default())
    }
}
