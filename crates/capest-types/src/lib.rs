//! Core types for the capest capacity estimators.
//!
//! This crate provides the vocabulary shared by the estimator crates:
//!
//! - [`CapestError`] / [`InputError`] - Validation and prerequisite errors
//! - [`input`] - Parsing and validation of raw numeric inputs
//! - [`CapacityStatus`], [`AxisLevel`], [`PerformanceStatus`] - Threshold classifications
//! - [`ProjectionSettings`] / [`GrowthSeries`] - Monthly compounding growth
//! - [`MonthIterator`] / [`MonthLabel`] - Calendar months of a projection
//! - [`QueryParams`] / [`ShareQuery`] - Share query strings for estimator inputs

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/capest/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod growth;
pub mod input;
mod month;
mod query;
mod status;

pub use error::{CapestError, InputError, Result};
pub use growth::{
    DEFAULT_MONTHLY_GROWTH_RATE, DEFAULT_PROJECTION_MONTHS, GrowthSeries, ProjectionSettings,
};
pub use month::{MonthIterator, MonthLabel, first_of_month, parse_month};
pub use query::{QueryParams, ShareQuery};
pub use status::{AxisLevel, CapacityStatus, PerformanceStatus};
