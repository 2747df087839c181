//! Config command implementation.

use super::Context;
use crate::display::Format;
use anyhow::{Context as _, Result};
use capest_config::{CONFIG_FILE_NAME, ConfigLoader, user_config_path};
use std::path::Path;

/// Print the effective configuration.
pub(crate) fn show(ctx: &Context) -> Result<()> {
    match ctx.format {
        Format::Text => print!("{}", ctx.config.to_toml()?),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&ctx.config).context("Failed to serialize configuration")?
        ),
    }
    Ok(())
}

/// Print which configuration file would be loaded.
pub(crate) fn show_path(config_path: Option<&Path>) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }

    match loader.resolve_path()? {
        Some(path) => println!("{}", path.display()),
        None => {
            println!("No configuration file found, using defaults.");
            println!("Searched: ./{CONFIG_FILE_NAME}");
            if let Some(user) = user_config_path() {
                println!("          {}", user.display());
            }
        }
    }
    Ok(())
}
