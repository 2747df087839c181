//! Output formatters for capest reports.
//!
//! This crate turns estimator reports into output:
//!
//! - [`Report`] - Any estimator output, with its summary and tables
//! - [`Table`] - Aligned text table with status-marked cells
//! - [`TextFormatter`] - Summary, tables and share query as plain text
//! - [`JsonFormatter`] - The full report as JSON

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/capest/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod formatter;
mod json;
mod report;
mod table;
mod text;

pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use report::Report;
pub use table::{Cell, Table};
pub use text::TextFormatter;
