//! Complete ADX estimate report.

use std::fmt;

use capest_types::{Result, ShareQuery};
use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::PerformanceAnalysis;
use crate::estimator::{AdxEstimate, AdxEstimator, AdxInputs, BaselineComparison};
use crate::projection::AdxProjectionRow;

/// Everything one ADX calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdxReport {
    /// The validated inputs.
    pub inputs: AdxInputs,
    /// Baseline ingestion rate the estimate was scaled from, in TB/day.
    pub baseline_ingest_tb_per_day: f64,
    /// Baseline instance count the estimate was scaled from.
    pub baseline_instance_count: u32,
    /// The estimate at the current load.
    pub estimate: AdxEstimate,
    /// Estimate-versus-baseline rows.
    pub comparison: Vec<BaselineComparison>,
    /// CPU and latency analysis.
    pub analysis: PerformanceAnalysis,
    /// Month-by-month projection.
    pub projection: Vec<AdxProjectionRow>,
    /// Share query string reproducing the inputs.
    pub share_query: String,
}

impl AdxEstimator {
    /// Runs the estimate, analysis and projection for validated inputs.
    #[must_use]
    pub fn report(&self, inputs: &AdxInputs, start_month: NaiveDate) -> AdxReport {
        let estimate = self.estimate(inputs);
        AdxReport {
            inputs: *inputs,
            baseline_ingest_tb_per_day: self.baseline().ingest_tb_per_day,
            baseline_instance_count: self.baseline().instance_count,
            comparison: self.compare(&estimate),
            analysis: PerformanceAnalysis::analyze(self.baseline(), inputs, &estimate),
            projection: self.project(inputs, start_month),
            share_query: inputs.to_query().to_string(),
            estimate,
        }
    }

    /// Parses raw fields and builds the full report.
    ///
    /// # Errors
    ///
    /// Returns `CapestError::InvalidInput` if the fields are invalid; no
    /// partial report is produced.
    pub fn report_raw(
        &self,
        ingest_tb_per_day: &str,
        cluster_count: &str,
        start_month: NaiveDate,
    ) -> Result<AdxReport> {
        let inputs = AdxInputs::parse(ingest_tb_per_day, cluster_count)?;
        Ok(self.report(&inputs, start_month))
    }
}

impl fmt::Display for AdxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.estimate;
        writeln!(f, "Estimated ADX Performance Metrics:")?;
        writeln!(f, "Average Latency: {:.2} minutes", e.avg_latency_minutes)?;
        writeln!(f, "Maximum Latency: {:.2} minutes", e.max_latency_minutes)?;
        writeln!(f, "CPU Utilization: {:.1}%", e.cpu_percent)?;
        writeln!(f, "Cache Utilization: {:.1}%", e.cache_utilization_percent)?;
        writeln!(f, "Min Instance Count per Cluster: {}", e.min_instances_per_cluster)?;
        write!(
            f,
            "Based on scaling from baseline: {}TB/day with {} instances",
            self.baseline_ingest_tb_per_day, self.baseline_instance_count
        )
    }
}
