//! Capacity estimators for analytics clusters, blob storage accounts and
//! messaging clusters.
//!
//! This is a facade crate that re-exports functionality from the capest
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use capest_lib::prelude::*;
//!
//! let start = parse_month("2026-10")?;
//! let report = StorageEstimator::default().report_raw("5184", start)?;
//! assert_eq!(report.estimate.required_accounts, 1);
//! assert_eq!(report.projection.len(), 7);
//! # Ok::<(), CapestError>(())
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/capest/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use capest_types::*;

// Re-export estimators
pub use capest_adx as adx;
pub use capest_messaging as messaging;
pub use capest_storage as storage;

// Re-export configuration
#[cfg(feature = "config")]
pub use capest_config::{CapestConfig, ConfigError, ConfigLoader};

// Re-export formatters
#[cfg(feature = "format")]
pub use capest_format::{
    Cell, FormatError, Formatter, JsonFormatter, OutputFormat, Report, Table, TextFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use capest_lib::prelude::*;
/// ```
pub mod prelude {
    pub use capest_types::{
        CapacityStatus, CapestError, InputError, MonthLabel, PerformanceStatus,
        ProjectionSettings, QueryParams, Result, ShareQuery, parse_month,
    };

    pub use capest_adx::{AdxEstimate, AdxEstimator, AdxInputs, AdxReport};
    pub use capest_messaging::{
        Ingress, IngressUnit, MessagingConfig, MessagingEstimator, MessagingInputs,
        MessagingReport, MessagingRequest, MessagingSession, PartitionEstimate, Tier,
    };
    pub use capest_storage::{StorageEstimate, StorageEstimator, StorageInputs, StorageReport};

    #[cfg(feature = "config")]
    pub use capest_config::{CapestConfig, ConfigLoader};

    #[cfg(feature = "format")]
    pub use capest_format::{Formatter, JsonFormatter, OutputFormat, Report, TextFormatter};
}
