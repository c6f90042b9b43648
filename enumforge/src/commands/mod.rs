//! Command handlers for the enumforge CLI.

pub mod generate;
pub mod info;
pub mod init;

use crate::cli::Cli;
use enumforge_core::error::{EnumforgeError, Result};
use enumforge_core::tooling::Configuration;
use std::path::PathBuf;
use tracing::{debug, error};

/// Loads the configuration named by `--config`, or the nearest `enumforge.toml`.
pub(crate) fn load_config(cli: &Cli) -> Result<Configuration> {
    match Configuration::load(cli.config.as_deref()) {
        Ok(config) => {
            debug!("Configuration loaded successfully");
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

/// Command-line inputs, or the configured `filenames` when none were given.
pub(crate) fn resolve_inputs(files: &[PathBuf], config: &Configuration) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }
    if config.filenames.is_empty() {
        return Err(EnumforgeError::config(
            "no input files given and no `filenames` configured in enumforge.toml",
        ));
    }
    Ok(config.filenames.iter().map(PathBuf::from).collect())
}
