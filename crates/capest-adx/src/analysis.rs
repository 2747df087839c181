//! Performance analysis and scaling recommendations.

use capest_types::{AxisLevel, CapacityStatus};
use serde::Serialize;

use crate::baseline::{AdxBaseline, CPU_BREAKPOINTS, LATENCY_BREAKPOINTS};
use crate::estimator::{AdxEstimate, AdxInputs};

/// Classification of an estimate along the CPU and latency axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceAnalysis {
    /// CPU utilization level.
    pub cpu: AxisLevel,
    /// Average latency level.
    pub latency: AxisLevel,
    /// Cluster count to scale to, when the current count is too low.
    pub recommended_clusters: Option<u64>,
}

impl PerformanceAnalysis {
    /// Classifies an estimate and derives the scaling recommendation.
    ///
    /// A recommendation is only made when the load exceeds the baseline and
    /// the cluster count is below `ceil(ingest / baseline_ingest)`.
    #[must_use]
    pub fn analyze(baseline: &AdxBaseline, inputs: &AdxInputs, estimate: &AdxEstimate) -> Self {
        let cpu = AxisLevel::from_breakpoints(estimate.cpu_percent, CPU_BREAKPOINTS);
        let latency =
            AxisLevel::from_breakpoints(estimate.avg_latency_minutes, LATENCY_BREAKPOINTS);

        let recommended_clusters = (inputs.ingest_tb_per_day() > baseline.ingest_tb_per_day)
            .then(|| estimate.ingest_scaling_factor.ceil() as u64)
            .filter(|&needed| u64::from(inputs.cluster_count()) < needed);

        Self {
            cpu,
            latency,
            recommended_clusters,
        }
    }

    /// Returns the worse of the two axis statuses.
    #[must_use]
    pub fn overall_status(&self) -> CapacityStatus {
        self.cpu.capacity_status().max(self.latency.capacity_status())
    }

    /// Returns the plain-language CPU message.
    #[must_use]
    pub const fn cpu_message(&self) -> &'static str {
        match self.cpu {
            AxisLevel::Good => "CPU utilization is low - cluster has plenty of compute headroom",
            AxisLevel::Moderate => "CPU utilization is moderate - monitor for growth",
            AxisLevel::High => "CPU utilization is high - consider adding more clusters",
            AxisLevel::Critical => {
                "CPU utilization is very high - additional clusters strongly recommended"
            }
        }
    }

    /// Returns the plain-language latency message.
    #[must_use]
    pub const fn latency_message(&self) -> &'static str {
        match self.latency {
            AxisLevel::Good => "Latency is excellent",
            AxisLevel::Moderate => "Latency is acceptable but monitor for growth",
            AxisLevel::High => "Latency is high - consider optimizing or adding clusters",
            AxisLevel::Critical => "Latency is very high - cluster optimization needed",
        }
    }

    /// Returns the recommendation message, if any.
    #[must_use]
    pub fn recommendation(&self) -> Option<String> {
        self.recommended_clusters.map(|n| {
            format!("Recommendation: Consider scaling to {n} clusters for optimal performance")
        })
    }

    /// Returns every message with its status, in display order.
    #[must_use]
    pub fn messages(&self) -> Vec<(CapacityStatus, String)> {
        let mut out = vec![
            (self.cpu.capacity_status(), self.cpu_message().to_string()),
            (self.latency.capacity_status(), self.latency_message().to_string()),
        ];
        if let Some(rec) = self.recommendation() {
            out.push((CapacityStatus::Warning, rec));
        }
        out
    }
}
