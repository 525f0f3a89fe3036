use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::types::PackageInfo;

/// Public npm registry queried when no override is given.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// How long a single version lookup may take before the caller falls back to
/// a placeholder version.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_millis(1900);

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LatestVersion: Send + Sync {
    async fn latest(&self, package: &str) -> Result<PackageInfo>;
}

pub struct NpmRegistry {
    pub client: Client,
    pub registry_url: String,
    timeout: Duration,
}

impl NpmRegistry {
    #[tracing::instrument(skip(client, registry_url))]
    pub fn new(client: Client, registry_url: Option<String>) -> Self {
        let registry_url = registry_url.unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());
        Self {
            client,
            registry_url,
            timeout: LOOKUP_TIMEOUT,
        }
    }

    /// Replace the per-lookup timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl LatestVersion for NpmRegistry {
    #[tracing::instrument(skip(self))]
    async fn latest(&self, package: &str) -> Result<PackageInfo> {
        let url = format!("{}/{}/latest", self.registry_url, package);

        debug!("Fetching latest version from {}...", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .context("Failed to send request to the package registry")?;

        let info = response
            .error_for_status()
            .context("Package registry returned an error status")?
            .json::<PackageInfo>()
            .await
            .context("Failed to parse JSON response from the package registry")?;

        Ok(info)
    }
}
