//! Reference measurement the ADX estimates are scaled from.

use serde::{Deserialize, Serialize};

/// Upper bound of the estimated average latency, in minutes.
pub const MAX_AVG_LATENCY_MINUTES: f64 = 30.0;

/// Upper bound of the estimated maximum latency, in minutes.
pub const MAX_MAX_LATENCY_MINUTES: f64 = 120.0;

/// Upper bound of any utilization percentage.
pub const MAX_PERCENT: f64 = 100.0;

/// CPU utilization breakpoints: moderate, high, critical.
pub const CPU_BREAKPOINTS: [f64; 3] = [20.0, 50.0, 80.0];

/// Average latency breakpoints in minutes: moderate, high, critical.
pub const LATENCY_BREAKPOINTS: [f64; 3] = [2.0, 5.0, 10.0];

/// Metrics measured on a reference deployment at a known ingestion load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdxBaseline {
    /// Ingestion rate at the reference load, in TB/day.
    pub ingest_tb_per_day: f64,
    /// Average ingestion latency at the reference load, in minutes.
    pub avg_latency_minutes: f64,
    /// Maximum ingestion latency at the reference load, in minutes.
    pub max_latency_minutes: f64,
    /// CPU utilization per cluster at the reference load, in percent.
    pub cpu_percent: f64,
    /// Cache utilization at the reference load, in percent.
    pub cache_utilization_percent: f64,
    /// Instance count at the reference load.
    pub instance_count: u32,
}

impl AdxBaseline {
    /// The reference measurement: 195 TB/day on 300 instances.
    pub const REFERENCE: Self = Self {
        ingest_tb_per_day: 195.0,
        avg_latency_minutes: 1.18,
        max_latency_minutes: 14.02,
        cpu_percent: 15.0,
        cache_utilization_percent: 30.0,
        instance_count: 300,
    };
}

impl Default for AdxBaseline {
    fn default() -> Self {
        Self::REFERENCE
    }
}
