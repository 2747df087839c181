//! Layered configuration for the capest estimators.
//!
//! - [`CapestConfig`] - Baselines, limits and projection settings
//! - [`ConfigLoader`] - Merges defaults, a TOML file and `CAPEST_` environment
//!   variables with figment
//!
//! # Example
//!
//! ```
//! use capest_config::CapestConfig;
//!
//! let config = CapestConfig::default();
//! config.validate()?;
//! assert_eq!(config.storage_estimator().limits().max_ingress_gb_per_sec, 60.0);
//! # Ok::<(), capest_config::ConfigError>(())
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/capest/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;

pub use config::{CapestConfig, MAX_PROJECTION_MONTHS};
pub use error::{ConfigError, Result};
pub use loader::{CONFIG_FILE_NAME, ConfigLoader, ENV_PREFIX, user_config_path};
