//! Analytics-cluster (ADX) capacity estimator.
//!
//! Scales a fixed reference measurement to a given ingestion rate and
//! cluster count:
//!
//! - [`AdxBaseline`] - Reference load and the metrics measured at it
//! - [`AdxInputs`] - Validated ingestion rate and cluster count
//! - [`AdxEstimator`] - Computes [`AdxEstimate`]s, comparisons and projections
//! - [`PerformanceAnalysis`] - CPU and latency classification with recommendations
//! - [`AdxReport`] - Everything one calculation produces
//!
//! # Example
//!
//! ```
//! use capest_adx::{AdxEstimator, AdxInputs};
//!
//! let estimator = AdxEstimator::default();
//! let estimate = estimator.estimate(&AdxInputs::new(195.0, 300)?);
//! assert!((estimate.cpu_percent - 0.05).abs() < 1e-9);
//! # Ok::<(), capest_types::CapestError>(())
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/capest/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod baseline;
mod estimator;
mod projection;
mod report;

pub use analysis::PerformanceAnalysis;
pub use baseline::{
    AdxBaseline, CPU_BREAKPOINTS, LATENCY_BREAKPOINTS, MAX_AVG_LATENCY_MINUTES,
    MAX_MAX_LATENCY_MINUTES, MAX_PERCENT,
};
pub use estimator::{
    AdxEstimate, AdxEstimator, AdxInputs, BaselineComparison, QUERY_CLUSTERS, QUERY_INGEST,
};
pub use projection::{AdxProjectionRow, performance_status};
pub use report::AdxReport;
