//! Subcommands.

pub mod batch;
pub mod config;
pub mod convert;
pub mod formats;

use std::path::{Path, PathBuf};

use tracing::debug;

use stmtx_core::StmtxConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stmtx")
        .join("config.json")
}

/// Load configuration from an explicit path, else from the default location
/// when it exists, else the defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<StmtxConfig> {
    if let Some(path) = path {
        return Ok(StmtxConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(StmtxConfig::from_file(&default_path)?)
    } else {
        Ok(StmtxConfig::default())
    }
}
