//! Messaging-cluster partition and capacity unit estimator.
//!
//! Sizes topic partitions for an ingress rate, converts them to capacity
//! units and checks them against a tiered cluster configuration:
//!
//! - [`Ingress`] - Ingress rate in GiB/sec or TB/day
//! - [`Tier`] and [`MessagingLimits`] - Per-partition throughput and tier ceilings
//! - [`MessagingConfig`] - Tier, clusters and capacity units per cluster
//! - [`MessagingEstimator`] - Partition estimates, capacity checks and projections
//! - [`MessagingSession`] - Last computed values for step-by-step use
//! - [`MessagingReport`] - Everything one calculation produces
//!
//! # Example
//!
//! ```
//! use capest_messaging::{IngressUnit, MessagingEstimator};
//!
//! let estimator = MessagingEstimator::default();
//! let estimate = estimator.estimate_partitions_raw("1", IngressUnit::GibPerSec, "1")?;
//! assert_eq!(estimate.partitions_per_topic, 18);
//! assert_eq!(estimate.required_capacity_units, 1);
//! # Ok::<(), capest_types::CapestError>(())
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/capest/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod estimator;
mod ingress;
mod projection;
mod report;
mod session;
mod tier;

pub use config::{
    MessagingConfig, QUERY_CAPACITY_UNITS, QUERY_CLUSTERS, QUERY_MAX_PARTITIONS, QUERY_TIER,
};
pub use estimator::{
    MessagingEstimate, MessagingEstimator, MessagingInputs, PartitionEstimate, QUERY_INGRESS,
    QUERY_INGRESS_UNIT, QUERY_TOPICS,
};
pub use ingress::{BYTES_PER_GIB, BYTES_PER_TB, Ingress, IngressUnit, SECONDS_PER_DAY};
pub use projection::{MessagingProjection, MessagingProjectionRow};
pub use report::{MessagingReport, MessagingRequest};
pub use session::MessagingSession;
pub use tier::{MessagingLimits, Tier, TierLimits};
