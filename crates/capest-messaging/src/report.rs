//! Complete messaging sizing report.

use std::fmt;

use capest_types::{QueryParams, Result, ShareQuery};
use chrono::NaiveDate;
use serde::Serialize;

use crate::config::MessagingConfig;
use crate::estimator::{MessagingEstimate, MessagingEstimator, MessagingInputs};
use crate::projection::MessagingProjection;
use crate::tier::MessagingLimits;

/// Inputs and cluster configuration of one messaging calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MessagingRequest {
    /// Ingress and topic count.
    pub inputs: MessagingInputs,
    /// Cluster configuration.
    pub config: MessagingConfig,
}

impl ShareQuery for MessagingRequest {
    fn to_query(&self) -> QueryParams {
        let mut params = self.inputs.to_query();
        for (key, value) in self.config.to_query().iter() {
            params.set(key, value);
        }
        params
    }

    fn from_query(params: &QueryParams) -> Result<Self> {
        Self::from_query_with(params, &MessagingLimits::DEFAULT)
    }
}

impl MessagingRequest {
    /// Reads a request from query parameters, checking the configuration
    /// against `limits`.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if a value is missing or invalid.
    pub fn from_query_with(params: &QueryParams, limits: &MessagingLimits) -> Result<Self> {
        Ok(Self {
            inputs: MessagingInputs::from_query(params)?,
            config: MessagingConfig::from_query_with(params, limits)?,
        })
    }
}

/// Everything one messaging calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagingReport {
    /// The request the report was computed for.
    pub request: MessagingRequest,
    /// Partition estimate checked against the configuration.
    pub capacity: MessagingEstimate,
    /// Month-by-month projection.
    pub projection: MessagingProjection,
    /// Month capacity runs out, or the projected window.
    pub over_capacity: String,
    /// Share query string reproducing the request.
    pub share_query: String,
}

impl MessagingEstimator {
    /// Runs the estimate, capacity check and projection for a request.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the partition count overflows
    /// or the configuration is invalid for these limits.
    pub fn report(
        &self,
        request: &MessagingRequest,
        start_month: NaiveDate,
    ) -> Result<MessagingReport> {
        let partitions = self.estimate_partitions(&request.inputs)?;
        let capacity = self.check_capacity(&partitions, &request.config)?;
        let projection = self.project(&partitions, &request.config, start_month)?;
        Ok(MessagingReport {
            request: *request,
            over_capacity: projection.over_capacity_label(),
            share_query: request.to_query().to_string(),
            capacity,
            projection,
        })
    }
}

impl fmt::Display for MessagingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.capacity.partitions.summary())?;
        for line in self.capacity.summary_lines() {
            writeln!(f, "{line}")?;
        }
        match self.projection.first_over_capacity() {
            Some(_) => write!(
                f,
                "Projected CUs exceed the cluster config in {}",
                self.over_capacity
            ),
            None => write!(f, "Cluster config covers {}", self.over_capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingress::Ingress;
    use crate::tier::Tier;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    #[test]
    fn test_report() {
        let estimator = MessagingEstimator::default();
        let request = MessagingRequest {
            inputs: MessagingInputs::new(Ingress::gib_per_sec(1.0).unwrap(), 1).unwrap(),
            config: MessagingConfig::default(),
        };
        let report = estimator.report(&request, start()).unwrap();

        assert_eq!(report.capacity.partitions.partitions_per_topic, 18);
        assert_eq!(report.projection.rows.len(), 7);
        assert_eq!(report.over_capacity, "the next 7 months");
        assert_eq!(
            report.share_query,
            "ingress=1&ingressUnit=gib-per-sec&numTopics=1&numClusters=1&tier=dedicated&cusPerCluster=10"
        );

        let text = report.to_string();
        assert!(text.starts_with("Required number of partitions per topic: 18 (across 1 topic)"));
        assert!(text.contains("Your cluster config supports: 10 CUs"));
        assert!(text.ends_with("Cluster config covers the next 7 months"));
    }

    #[test]
    fn test_request_from_query() {
        let params = QueryParams::parse(
            "?ingress=5&ingressUnit=tb-per-day&numTopics=2&numClusters=3&tier=custom&cusPerCluster=12",
        );
        let request = MessagingRequest::from_query(&params).unwrap();
        assert_eq!(request.inputs.topic_count(), 2);
        assert_eq!(request.config.tier(), Tier::Custom);
        assert_eq!(request.config.configured_capacity_units(), 36);
        assert_eq!(request.to_query().to_string(), params.to_string());
    }

    #[test]
    fn test_report_rejects_invalid_config() {
        let estimator = MessagingEstimator::default();
        let mut config = MessagingConfig::for_tier(Tier::Custom, estimator.limits());
        config.tier = Tier::Dedicated;
        let request = MessagingRequest {
            inputs: MessagingInputs::new(Ingress::gib_per_sec(1.0).unwrap(), 1).unwrap(),
            config,
        };
        assert!(estimator.report(&request, start()).is_err());
    }
}
