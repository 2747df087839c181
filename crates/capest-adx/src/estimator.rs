//! ADX performance estimation.

use capest_types::{ProjectionSettings, QueryParams, Result, ShareQuery, input};
use serde::Serialize;

use crate::baseline::{
    AdxBaseline, MAX_AVG_LATENCY_MINUTES, MAX_MAX_LATENCY_MINUTES, MAX_PERCENT,
};

const INGEST_FIELD: &str = "TB/day ingestion amount";
const CLUSTER_FIELD: &str = "cluster count";

/// Query key of the ingestion rate.
pub const QUERY_INGEST: &str = "ingestTBPerDay";

/// Query key of the cluster count.
pub const QUERY_CLUSTERS: &str = "clusterCount";

/// Validated inputs of an ADX estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdxInputs {
    pub(crate) ingest_tb_per_day: f64,
    pub(crate) cluster_count: u32,
}

impl AdxInputs {
    /// Creates validated inputs.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the ingestion rate is not
    /// strictly positive or the cluster count is zero.
    pub fn new(ingest_tb_per_day: f64, cluster_count: u32) -> Result<Self> {
        Ok(Self {
            ingest_tb_per_day: input::positive(INGEST_FIELD, ingest_tb_per_day)?,
            cluster_count: input::positive_count(CLUSTER_FIELD, cluster_count)?,
        })
    }

    /// Parses inputs from raw text fields.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if either field is non-numeric
    /// or out of range. The ingestion rate is checked first.
    pub fn parse(ingest_tb_per_day: &str, cluster_count: &str) -> Result<Self> {
        let ingest = input::parse_positive(INGEST_FIELD, ingest_tb_per_day)?;
        let clusters = input::parse_count(CLUSTER_FIELD, cluster_count)?;
        Ok(Self {
            ingest_tb_per_day: ingest,
            cluster_count: clusters,
        })
    }

    /// Returns the ingestion rate in TB/day.
    #[must_use]
    pub const fn ingest_tb_per_day(&self) -> f64 {
        self.ingest_tb_per_day
    }

    /// Returns the cluster count.
    #[must_use]
    pub const fn cluster_count(&self) -> u32 {
        self.cluster_count
    }

    /// Returns a copy with a different ingestion rate, keeping the cluster count.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the rate is not strictly positive.
    pub fn with_ingest(self, ingest_tb_per_day: f64) -> Result<Self> {
        Self::new(ingest_tb_per_day, self.cluster_count)
    }
}

impl ShareQuery for AdxInputs {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.set(QUERY_INGEST, self.ingest_tb_per_day);
        params.set(QUERY_CLUSTERS, self.cluster_count);
        params
    }

    fn from_query(params: &QueryParams) -> Result<Self> {
        let ingest = params.positive(QUERY_INGEST, INGEST_FIELD)?;
        let clusters = params.count(QUERY_CLUSTERS, CLUSTER_FIELD)?;
        Self::new(ingest, clusters)
    }
}

/// Estimated ADX performance at a given load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdxEstimate {
    /// Ingestion rate relative to the baseline.
    pub ingest_scaling_factor: f64,
    /// Baseline instance count divided by the cluster count.
    pub cluster_scaling_factor: f64,
    /// Average ingestion latency in minutes, capped at 30.
    pub avg_latency_minutes: f64,
    /// Maximum ingestion latency in minutes, capped at 120.
    pub max_latency_minutes: f64,
    /// CPU utilization per cluster in percent, capped at 100.
    pub cpu_percent: f64,
    /// Cache utilization in percent, capped at 100.
    pub cache_utilization_percent: f64,
    /// Minimum number of instances per cluster.
    pub min_instances_per_cluster: u64,
}

/// One row of the estimate-versus-baseline comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineComparison {
    /// Metric name.
    pub metric: &'static str,
    /// Formatted baseline value.
    pub baseline: String,
    /// Formatted estimated value.
    pub estimated: String,
}

/// ADX estimator scaling a fixed baseline to arbitrary loads.
#[derive(Debug, Clone, Default)]
pub struct AdxEstimator {
    baseline: AdxBaseline,
    projection: ProjectionSettings,
}

impl AdxEstimator {
    /// Creates an estimator from a baseline and projection settings.
    #[must_use]
    pub const fn new(baseline: AdxBaseline, projection: ProjectionSettings) -> Self {
        Self {
            baseline,
            projection,
        }
    }

    /// Returns the baseline the estimates are scaled from.
    #[must_use]
    pub const fn baseline(&self) -> &AdxBaseline {
        &self.baseline
    }

    /// Returns the projection settings.
    #[must_use]
    pub const fn projection_settings(&self) -> ProjectionSettings {
        self.projection
    }

    /// Estimates performance metrics for validated inputs.
    #[must_use]
    pub fn estimate(&self, inputs: &AdxInputs) -> AdxEstimate {
        let b = &self.baseline;
        let clusters = f64::from(inputs.cluster_count);

        let ingest_scaling_factor = inputs.ingest_tb_per_day / b.ingest_tb_per_day;
        let cluster_scaling_factor = f64::from(b.instance_count) / clusters;
        let sqrt_clusters = clusters.sqrt();

        let avg_latency = b.avg_latency_minutes * ingest_scaling_factor / sqrt_clusters;
        let max_latency = b.max_latency_minutes * ingest_scaling_factor / sqrt_clusters;
        let cpu = b.cpu_percent * ingest_scaling_factor / clusters;
        let cache = b.cache_utilization_percent * ingest_scaling_factor;

        let estimate = AdxEstimate {
            ingest_scaling_factor,
            cluster_scaling_factor,
            avg_latency_minutes: avg_latency.min(MAX_AVG_LATENCY_MINUTES),
            max_latency_minutes: max_latency.min(MAX_MAX_LATENCY_MINUTES),
            cpu_percent: cpu.min(MAX_PERCENT),
            cache_utilization_percent: cache.min(MAX_PERCENT),
            min_instances_per_cluster: cluster_scaling_factor.ceil() as u64,
        };
        tracing::debug!(
            ingest_tb_per_day = inputs.ingest_tb_per_day,
            cluster_count = inputs.cluster_count,
            avg_latency = estimate.avg_latency_minutes,
            cpu = estimate.cpu_percent,
            "computed ADX estimate"
        );
        estimate
    }

    /// Parses raw fields and estimates in one step.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the fields are invalid; no
    /// estimate is produced in that case.
    pub fn estimate_raw(&self, ingest_tb_per_day: &str, cluster_count: &str) -> Result<AdxEstimate> {
        let inputs = AdxInputs::parse(ingest_tb_per_day, cluster_count)?;
        Ok(self.estimate(&inputs))
    }

    /// Builds the estimate-versus-baseline comparison rows.
    #[must_use]
    pub fn compare(&self, estimate: &AdxEstimate) -> Vec<BaselineComparison> {
        let b = &self.baseline;
        vec![
            BaselineComparison {
                metric: "Average Latency",
                baseline: format!("{} min", b.avg_latency_minutes),
                estimated: format!("{:.2} min", estimate.avg_latency_minutes),
            },
            BaselineComparison {
                metric: "Maximum Latency",
                baseline: format!("{} min", b.max_latency_minutes),
                estimated: format!("{:.2} min", estimate.max_latency_minutes),
            },
            BaselineComparison {
                metric: "CPU Utilization",
                baseline: format!("{}%", b.cpu_percent),
                estimated: format!("{:.1}%", estimate.cpu_percent),
            },
            BaselineComparison {
                metric: "Cache Utilization",
                baseline: format!("{}%", b.cache_utilization_percent),
                estimated: format!("{:.1}%", estimate.cache_utilization_percent),
            },
            BaselineComparison {
                metric: "Min Instance Count per Cluster",
                baseline: b.instance_count.to_string(),
                estimated: estimate.min_instances_per_cluster.to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use capest_types::CapestError;

    #[test]
    fn test_baseline_load() {
        let estimator = AdxEstimator::default();
        let inputs = AdxInputs::new(195.0, 300).unwrap();
        let est = estimator.estimate(&inputs);

        assert_relative_eq!(est.ingest_scaling_factor, 1.0);
        assert_relative_eq!(est.avg_latency_minutes, 1.18 / 300f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(est.avg_latency_minutes, 0.0681, epsilon = 1e-4);
        assert_relative_eq!(est.max_latency_minutes, 14.02 / 300f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(est.cpu_percent, 0.05, epsilon = 1e-12);
        assert_relative_eq!(est.cache_utilization_percent, 30.0);
        assert_eq!(est.min_instances_per_cluster, 1);
    }

    #[test]
    fn test_single_cluster() {
        let estimator = AdxEstimator::default();
        let est = estimator.estimate(&AdxInputs::new(97.5, 1).unwrap());

        assert_relative_eq!(est.ingest_scaling_factor, 0.5);
        assert_relative_eq!(est.avg_latency_minutes, 0.59, epsilon = 1e-12);
        assert_relative_eq!(est.cpu_percent, 7.5, epsilon = 1e-12);
        assert_relative_eq!(est.cache_utilization_percent, 15.0, epsilon = 1e-12);
        assert_eq!(est.min_instances_per_cluster, 300);
    }

    #[test]
    fn test_values_are_capped() {
        let estimator = AdxEstimator::default();
        for (ingest, clusters) in [(1e6, 1), (1e12, 2), (f64::MAX, 1), (5000.0, 7)] {
            let est = estimator.estimate(&AdxInputs::new(ingest, clusters).unwrap());
            assert!(est.avg_latency_minutes <= 30.0);
            assert!(est.max_latency_minutes <= 120.0);
            assert!(est.cpu_percent <= 100.0);
            assert!(est.cache_utilization_percent <= 100.0);
        }
        let est = estimator.estimate(&AdxInputs::new(1e6, 1).unwrap());
        assert_eq!(est.avg_latency_minutes, 30.0);
        assert_eq!(est.max_latency_minutes, 120.0);
        assert_eq!(est.cpu_percent, 100.0);
        assert_eq!(est.cache_utilization_percent, 100.0);
    }

    #[test]
    fn test_min_instances_rounds_up() {
        let estimator = AdxEstimator::default();
        let est = estimator.estimate(&AdxInputs::new(10.0, 7).unwrap());
        // 300 / 7 = 42.86
        assert_eq!(est.min_instances_per_cluster, 43);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let estimator = AdxEstimator::default();
        let inputs = AdxInputs::new(412.7, 13).unwrap();
        assert_eq!(estimator.estimate(&inputs), estimator.estimate(&inputs));
    }

    #[test]
    fn test_invalid_inputs() {
        let estimator = AdxEstimator::default();
        assert!(estimator.estimate_raw("0", "3").unwrap_err().is_invalid_input());
        assert!(estimator.estimate_raw("-1", "3").is_err());
        assert!(estimator.estimate_raw("abc", "3").is_err());
        assert!(estimator.estimate_raw("10", "x").is_err());
        assert!(estimator.estimate_raw("10", "0").is_err());
        assert!(AdxInputs::new(f64::NAN, 1).is_err());
        assert!(AdxInputs::new(10.0, 0).is_err());
    }

    #[test]
    fn test_ingest_is_reported_before_clusters() {
        let err = AdxInputs::parse("", "").unwrap_err();
        let CapestError::InvalidInput(input) = err else {
            panic!("expected invalid input");
        };
        assert_eq!(input.field(), "TB/day ingestion amount");
    }

    #[test]
    fn test_query_round_trip() {
        let inputs = AdxInputs::new(250.5, 12).unwrap();
        let query = inputs.to_query();
        assert_eq!(query.to_string(), "ingestTBPerDay=250.5&clusterCount=12");
        assert_eq!(AdxInputs::from_query(&query).unwrap(), inputs);
        assert!(AdxInputs::from_query(&QueryParams::parse("clusterCount=3")).is_err());
    }

    #[test]
    fn test_query_from_browser_encoding() {
        let params = QueryParams::parse("ingestTBPerDay=1e%2B3&clusterCount=3");
        let inputs = AdxInputs::from_query(&params).unwrap();
        assert_eq!(inputs.ingest_tb_per_day(), 1000.0);
        assert_eq!(inputs.cluster_count(), 3);
    }

    #[test]
    fn test_comparison_rows() {
        let estimator = AdxEstimator::default();
        let est = estimator.estimate(&AdxInputs::new(195.0, 300).unwrap());
        let rows = estimator.compare(&est);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].baseline, "1.18 min");
        assert_eq!(rows[0].estimated, "0.07 min");
        assert_eq!(rows[3].estimated, "30.0%");
        assert_eq!(rows[4].baseline, "300");
        assert_eq!(rows[4].estimated, "1");
    }
}
