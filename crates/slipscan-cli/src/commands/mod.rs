//! Subcommands.

pub mod bill;
pub mod config;
pub mod ledger;
pub mod salary;

mod input;
mod output;

use std::path::Path;

use tracing::debug;

use slipscan_core::SlipscanConfig;

/// Load configuration from `--config`, else the default location, else defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<SlipscanConfig> {
    if let Some(path) = config_path {
        debug!("Loading configuration from {}", path);
        return Ok(SlipscanConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Loading configuration from {}", default_path.display());
        Ok(SlipscanConfig::from_file(&default_path)?)
    } else {
        Ok(SlipscanConfig::default())
    }
}
