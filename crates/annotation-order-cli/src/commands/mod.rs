//! Subcommand implementations.

use anyhow::{Context, Result};
use annotation_order_core::Config;

use crate::config_resolver::ConfigSource;

pub mod check;
pub mod init;
pub mod list_orders;
pub mod output;

/// Loads the resolved configuration, or defaults when none was found.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        tracing::debug!("No config file found, using builtin conventions");
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
