//! Month-by-month projection of ADX performance under growth.

use capest_types::{MonthLabel, PerformanceStatus};
use chrono::NaiveDate;
use serde::Serialize;

use crate::baseline::{CPU_BREAKPOINTS, LATENCY_BREAKPOINTS};
use crate::estimator::{AdxEstimate, AdxEstimator, AdxInputs};

/// One projected month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdxProjectionRow {
    /// First day of the projected month.
    pub month: NaiveDate,
    /// Display label of the month.
    pub label: MonthLabel,
    /// Projected ingestion volume in TB/day.
    pub ingest_tb_per_day: f64,
    /// Estimate at the projected volume and the fixed cluster count.
    pub estimate: AdxEstimate,
    /// Joint CPU and latency rating.
    pub status: PerformanceStatus,
}

/// Rates CPU and average latency jointly.
///
/// Both metrics have to be under the same breakpoint for a rating to apply.
#[must_use]
pub fn performance_status(cpu_percent: f64, avg_latency_minutes: f64) -> PerformanceStatus {
    let [cpu_good, cpu_ok, cpu_max] = CPU_BREAKPOINTS;
    let [lat_good, lat_ok, lat_max] = LATENCY_BREAKPOINTS;
    if cpu_percent < cpu_good && avg_latency_minutes < lat_good {
        PerformanceStatus::Excellent
    } else if cpu_percent < cpu_ok && avg_latency_minutes < lat_ok {
        PerformanceStatus::Good
    } else if cpu_percent < cpu_max && avg_latency_minutes < lat_max {
        PerformanceStatus::Acceptable
    } else {
        PerformanceStatus::Poor
    }
}

impl AdxEstimator {
    /// Projects the estimate forward, starting at the month of `start_month`.
    ///
    /// The ingestion volume compounds by the configured growth rate each
    /// month while the cluster count stays fixed.
    #[must_use]
    pub fn project(&self, inputs: &AdxInputs, start_month: NaiveDate) -> Vec<AdxProjectionRow> {
        self.projection_settings()
            .steps(inputs.ingest_tb_per_day, start_month)
            .map(|(month, volume)| {
                let step = AdxInputs {
                    ingest_tb_per_day: volume,
                    cluster_count: inputs.cluster_count,
                };
                let estimate = self.estimate(&step);
                AdxProjectionRow {
                    month,
                    label: MonthLabel::of(month),
                    ingest_tb_per_day: volume,
                    status: performance_status(
                        estimate.cpu_percent,
                        estimate.avg_latency_minutes,
                    ),
                    estimate,
                }
            })
            .collect()
    }
}
