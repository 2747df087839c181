//! Blob-storage account sizing estimator.
//!
//! Converts a daily ingestion volume into the number of storage accounts
//! needed to stay within the per-account ingress limit:
//!
//! - [`StorageLimits`] - Per-account ingress limit and growth rate
//! - [`StorageInputs`] - Validated daily volume
//! - [`StorageEstimator`] - Computes [`StorageEstimate`]s and projections
//! - [`StorageReport`] - Everything one calculation produces

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/capest/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod limits;
mod projection;
mod report;

pub use estimator::{
    ConfigRow, QUERY_DAILY_VOLUME, StorageEstimate, StorageEstimator, StorageInputs,
    utilization_status,
};
pub use limits::{
    GB_PER_TB, SECONDS_PER_DAY, StorageLimits, UTILIZATION_BAD_PERCENT,
    UTILIZATION_WARNING_PERCENT,
};
pub use projection::StorageProjectionRow;
pub use report::StorageReport;
