//! Command handlers for the assetgen CLI.

pub mod generate;
pub mod info;
pub mod init;

use crate::cli::Cli;
use assetgen_core::{
    config::AssetgenConfig,
    error::Result,
    tooling::BuildConfig,
};
use tracing::{debug, error};

/// Loads the build configuration selected by `--config` (or the default
/// search) and applies the global `--output` override.
pub(crate) fn load_build_config(cli: &Cli) -> Result<BuildConfig> {
    let config_path = AssetgenConfig::locate(cli.config.as_deref())?;
    let mut config = BuildConfig::from_toml_path(&config_path).map_err(|e| {
        error!("Failed to load configuration from {:?}: {}", config_path, e);
        e
    })?;

    if let Some(output) = &cli.output {
        debug!("Output path overridden on the command line: {:?}", output);
        config.output_path = output.clone();
    }
    Ok(config)
}
