//! Display utilities and input helpers for the capest CLI.

use anyhow::{Context, Result};
use capest_lib::prelude::*;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::io::Write;

/// Output format for reports.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

impl Format {
    /// Returns the library output format.
    pub(crate) const fn output_format(self) -> OutputFormat {
        match self {
            Self::Text => OutputFormat::Text,
            Self::Json => OutputFormat::Json,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.output_format())
    }
}

/// Write a report to stdout in the given format.
pub(crate) fn print_report(report: &Report, format: Format) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    format
        .output_format()
        .formatter()
        .write_report(report, &mut out)
        .with_context(|| format!("Failed to write {format} report"))?;
    out.flush()?;
    Ok(())
}

/// Resolve the first projected month, defaulting to the current one.
pub(crate) fn start_month(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => parse_month(raw).with_context(|| format!("Invalid start month: {raw}")),
        None => Ok(capest_lib::first_of_month(
            chrono::Local::now().date_naive(),
        )),
    }
}

/// Seed query parameters from a share query, then apply explicit arguments.
pub(crate) fn merge_inputs(query: Option<&str>, overrides: &[(&str, Option<&str>)]) -> QueryParams {
    let mut params = query.map(QueryParams::parse).unwrap_or_default();
    for (key, value) in overrides {
        if let Some(value) = value {
            params.set(*key, *value);
        }
    }
    params
}
