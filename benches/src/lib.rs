//! Benchmark fixtures for capest.

use capest_lib::prelude::*;
use chrono::NaiveDate;

/// A named set of inputs for every estimator.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Label used in benchmark ids.
    pub name: &'static str,
    /// ADX ingestion in TB/day.
    pub ingest_tb_per_day: f64,
    /// ADX cluster count.
    pub cluster_count: u32,
    /// Storage volume in TB/day.
    pub daily_volume_tb: f64,
    /// Messaging ingress in GiB/sec.
    pub ingress_gib_per_sec: f64,
    /// Messaging topic count.
    pub topic_count: u32,
}

impl Scenario {
    /// ADX inputs of this scenario.
    pub fn adx_inputs(&self) -> AdxInputs {
        AdxInputs::new(self.ingest_tb_per_day, self.cluster_count)
            .unwrap_or_else(|e| panic!("invalid scenario {}: {e}", self.name))
    }

    /// Storage inputs of this scenario.
    pub fn storage_inputs(&self) -> StorageInputs {
        StorageInputs::new(self.daily_volume_tb)
            .unwrap_or_else(|e| panic!("invalid scenario {}: {e}", self.name))
    }

    /// Messaging request of this scenario on one dedicated cluster.
    pub fn messaging_request(&self, estimator: &MessagingEstimator) -> MessagingRequest {
        let inputs = Ingress::gib_per_sec(self.ingress_gib_per_sec)
            .map_err(CapestError::from)
            .and_then(|ingress| MessagingInputs::new(ingress, self.topic_count))
            .unwrap_or_else(|e| panic!("invalid scenario {}: {e}", self.name));
        MessagingRequest {
            inputs,
            config: MessagingConfig::for_tier(Tier::Dedicated, estimator.limits()),
        }
    }
}

/// Small, reference and large workloads.
pub const SCENARIOS: [Scenario; 3] = [
    Scenario {
        name: "small",
        ingest_tb_per_day: 10.0,
        cluster_count: 1,
        daily_volume_tb: 50.0,
        ingress_gib_per_sec: 1.0,
        topic_count: 1,
    },
    Scenario {
        name: "reference",
        ingest_tb_per_day: 195.0,
        cluster_count: 300,
        daily_volume_tb: 5184.0,
        ingress_gib_per_sec: 8.0,
        topic_count: 4,
    },
    Scenario {
        name: "large",
        ingest_tb_per_day: 5_000.0,
        cluster_count: 40,
        daily_volume_tb: 100_000.0,
        ingress_gib_per_sec: 200.0,
        topic_count: 32,
    },
];

/// First projected month used by every benchmark.
pub fn start_month() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default()
}
