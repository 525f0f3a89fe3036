//! Settings persistence (load, merge, snapshot write).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

use super::catalog::{default_catalog, dedupe_by_name};
use super::{Meta, PluginEntry};

/// Errors that make the settings file unusable.
#[derive(Debug)]
pub enum SettingsError {
    /// The file exists but does not parse as a settings document.
    Corrupt { path: PathBuf, reason: String },
    /// The file could not be written back.
    Write { path: PathBuf, reason: String },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Corrupt { path, reason } => {
                write!(
                    f,
                    "Settings file {} is corrupt: {}. Fix or delete it and run again.",
                    path.display(),
                    reason
                )
            }
            SettingsError::Write { path, reason } => {
                write!(
                    f,
                    "Failed to write settings file {}: {}",
                    path.display(),
                    reason
                )
            }
        }
    }
}

impl std::error::Error for SettingsError {}

/// On-disk shape of the settings document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct SettingsFile {
    meta: Meta,
    dependencies: Vec<PluginEntry>,
}

/// Store for the settings document backing interview defaults and the plugin
/// catalog.
///
/// The document is read once at construction. Every meta update rewrites the
/// whole document in a single write, so the file on disk is always a complete
/// snapshot rather than a partial edit.
pub struct SettingsStore<'a, R: Runtime> {
    runtime: &'a R,
    path: PathBuf,
    meta: Meta,
    dependencies: Vec<PluginEntry>,
}

impl<'a, R: Runtime> SettingsStore<'a, R> {
    /// Load the settings document at `path`, or start from built-in defaults
    /// when no file exists there yet.
    #[tracing::instrument(skip(runtime))]
    pub fn load(runtime: &'a R, path: PathBuf) -> Result<Self> {
        if !runtime.exists(&path) {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(SettingsStore {
                runtime,
                path,
                meta: Meta::default(),
                dependencies: default_catalog(),
            });
        }

        let content = runtime
            .read_to_string(&path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let file: SettingsFile =
            serde_json::from_str(&content).map_err(|e| SettingsError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        Ok(SettingsStore {
            runtime,
            path,
            meta: file.meta,
            dependencies: dedupe_by_name(file.dependencies),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn dependencies(&self) -> &[PluginEntry] {
        &self.dependencies
    }

    /// Merge `candidate` into the stored meta and persist the result. The
    /// catalog rides along unchanged.
    #[tracing::instrument(skip(self, candidate))]
    pub fn set_meta(&mut self, candidate: &Meta) -> Result<()> {
        self.meta = self.meta.merged_with(candidate);
        self.write_snapshot()
    }

    fn write_snapshot(&self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent()
            && !self.runtime.exists(parent)
        {
            self.runtime
                .create_dir_all(parent)
                .map_err(|e| SettingsError::Write {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })?;
        }

        let file = SettingsFile {
            meta: self.meta.clone(),
            dependencies: self.dependencies.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        self.runtime
            .write(&self.path, content.as_bytes())
            .map_err(|e| SettingsError::Write {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
