use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Resolve the settings file location: an explicit override wins, otherwise
/// the per-user default.
#[tracing::instrument(skip(runtime, override_path))]
pub fn resolve_settings_path<R: Runtime>(
    runtime: &R,
    override_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let path = match override_path {
        Some(path) => path,
        None => default_settings_path(runtime)?,
    };

    info!("Using settings file: {}", path.display());

    Ok(path)
}

/// Default settings location: `hapigen/settings.json` under the platform
/// config directory, or `.hapigen/settings.json` under the home directory
/// when no config directory exists.
#[tracing::instrument(skip(runtime))]
pub fn default_settings_path<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    if let Some(config_dir) = runtime.config_dir() {
        return Ok(config_dir.join("hapigen").join("settings.json"));
    }

    let home_dir = runtime
        .home_dir()
        .context("Could not find a config or home directory for settings")?;
    Ok(home_dir.join(".hapigen").join("settings.json"))
}
