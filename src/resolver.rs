//! Concurrent resolution of selected plugins to their latest versions.

use futures_util::future::join_all;
use log::debug;

use crate::registry::LatestVersion;

/// Version recorded when a lookup fails or returns an unusable document.
/// npm resolves it to the newest published version at install time.
pub const PLACEHOLDER_VERSION: &str = "latest";

/// A plugin pinned to the version the manifest will carry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDependency {
    pub name: String,
    pub version: String,
}

/// The selected plugins in interview order, each carrying either a registry
/// version or [`PLACEHOLDER_VERSION`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedDependencies {
    entries: Vec<ResolvedDependency>,
}

impl ResolvedDependencies {
    pub fn new(entries: Vec<ResolvedDependency>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ResolvedDependency] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Render the entries as manifest lines: `"name": "version"` pairs joined
    /// by a comma, a newline and the manifest's four-space indent. No leading
    /// or trailing separator; an empty selection renders as an empty string.
    pub fn manifest_fragment(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("\"{}\": \"{}\"", entry.name, entry.version))
            .collect::<Vec<_>>()
            .join(",\n    ")
    }
}

/// Look up the latest published version of every selection.
///
/// All lookups start together and are joined as a group, so the wall-clock
/// cost is one lookup rather than one per selection. A failed or unusable
/// lookup leaves its entry at [`PLACEHOLDER_VERSION`] while the others keep
/// their results. Duplicate selections collapse to the first occurrence, and
/// an empty selection contacts the registry not at all.
#[tracing::instrument(skip(registry))]
pub async fn resolve_latest<C: LatestVersion>(
    registry: &C,
    selections: &[String],
) -> ResolvedDependencies {
    let mut names: Vec<String> = Vec::new();
    for name in selections {
        if !names.contains(name) {
            names.push(name.clone());
        }
    }
    if names.is_empty() {
        debug!("No plugins selected, skipping version lookups");
        return ResolvedDependencies::default();
    }

    let lookups = names
        .iter()
        .map(|name| async move { (name.as_str(), registry.latest(name).await) });
    let results = join_all(lookups).await;

    let mut entries: Vec<ResolvedDependency> = names
        .iter()
        .map(|name| ResolvedDependency {
            name: name.clone(),
            version: PLACEHOLDER_VERSION.to_string(),
        })
        .collect();

    for (requested, result) in results {
        match result {
            Ok(info) if info.is_complete() => {
                if let Some(entry) = entries.iter_mut().find(|e| e.name == info.name) {
                    entry.version = info.version;
                } else {
                    debug!(
                        "Registry answered {} with unrelated package {}, keeping placeholder",
                        requested, info.name
                    );
                }
            }
            Ok(_) => {
                debug!(
                    "Registry returned an incomplete document for {}, keeping placeholder",
                    requested
                );
            }
            Err(e) => {
                debug!(
                    "Version lookup for {} failed: {:#}, keeping placeholder",
                    requested, e
                );
            }
        }
    }

    ResolvedDependencies::new(entries)
}
