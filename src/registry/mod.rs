//! Version lookups against an npm-compatible package registry.

mod client;
mod types;

pub use client::{DEFAULT_REGISTRY_URL, LOOKUP_TIMEOUT, LatestVersion, NpmRegistry};
pub use types::PackageInfo;

#[cfg(test)]
pub use client::MockLatestVersion;
