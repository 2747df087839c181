//! Layered configuration loading.
//!
//! Sources are merged in this order, later sources overriding earlier ones:
//!
//! 1. [`CapestConfig::default()`]
//! 2. A TOML file: the explicit path if one was given, else `capest.toml` in
//!    the working directory, else `capest.toml` in the platform config
//!    directory
//! 3. Environment variables prefixed with `CAPEST_`, using `__` between
//!    nested keys (`CAPEST_PROJECTION__MONTHS=12`)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::CapestConfig;
use crate::error::{ConfigError, Result};

/// File name searched for in the working and platform config directories.
pub const CONFIG_FILE_NAME: &str = "capest.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "CAPEST_";

/// Returns the platform configuration file path, if a home directory exists.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "capest").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
    search_user_dir: bool,
}

impl ConfigLoader {
    /// Creates a loader with the default search order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: ENV_PREFIX.to_string(),
            search_user_dir: true,
        }
    }

    /// Uses this file instead of searching; it must exist.
    #[must_use]
    pub fn with_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the environment variable prefix.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Sets whether the platform config directory is searched.
    #[must_use]
    pub const fn with_user_dir(mut self, search: bool) -> Self {
        self.search_user_dir = search;
        self
    }

    /// Returns the file that [`load`](Self::load) would read, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if an explicit path does not exist.
    pub fn resolve_path(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.config_path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.clone()));
            }
            return Ok(Some(path.clone()));
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Ok(Some(local));
        }

        Ok(self
            .search_user_dir
            .then(user_config_path)
            .flatten()
            .filter(|path| path.is_file()))
    }

    /// Builds the merged figment without extracting it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if an explicit path does not exist.
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(CapestConfig::default()));

        match self.resolve_path()? {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading configuration file");
                figment = figment.merge(Toml::file(path));
            }
            None => tracing::debug!("no configuration file found, using defaults"),
        }

        Ok(figment.merge(Env::prefixed(&self.env_prefix).split("__")))
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, a value has the
    /// wrong type, or a value is out of range.
    pub fn load(&self) -> Result<CapestConfig> {
        let config: CapestConfig = self.figment()?.extract()?;
        config.validate()?;
        tracing::debug!(
            months = config.projection.months,
            growth = config.projection.monthly_growth_rate,
            "configuration loaded"
        );
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
