//! CLI command implementations.

pub(crate) mod adx;
pub(crate) mod config;
pub(crate) mod messaging;
pub(crate) mod storage;

use crate::display::{self, Format};
use anyhow::{Context as _, Result};
use capest_lib::prelude::*;
use chrono::NaiveDate;
use std::path::Path;

/// Settings shared by every estimator command.
pub(crate) struct Context {
    pub(crate) config: CapestConfig,
    pub(crate) start_month: NaiveDate,
    pub(crate) format: Format,
}

impl Context {
    /// Load the configuration and resolve the projection start.
    pub(crate) fn load(
        config_path: Option<&Path>,
        start_month: Option<&str>,
        format: Format,
    ) -> Result<Self> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = config_path {
            loader = loader.with_config_path(path);
        }
        let config = loader.load().context("Failed to load configuration")?;

        Ok(Self {
            config,
            start_month: display::start_month(start_month)?,
            format,
        })
    }
}
