use super::package_facts::PackageFacts;
use super::{downloads, http, registry};
use crate::Result;
use core::time::Duration;
use futures_util::future::join_all;

const LOG_TARGET: &str = " collector";

/// Collector for gathering the packages of a user and their download counts
#[derive(Debug, Clone)]
pub struct Collector {
    registry_provider: registry::Provider,
    downloads_provider: downloads::Provider,
}

impl Collector {
    /// Create a collector; `None` base URLs select the public npm endpoints.
    pub fn new(registry_base_url: Option<&str>, stats_base_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = http::build_client(timeout)?;

        Ok(Self {
            registry_provider: registry::Provider::new(client.clone(), registry_base_url),
            downloads_provider: downloads::Provider::new(client, stats_base_url),
        })
    }

    /// Address of a user's profile page
    #[must_use]
    pub fn profile_url(&self, user: &str) -> String {
        self.registry_provider.profile_url(user)
    }

    /// Collect facts for every package of a user.
    ///
    /// Returns `Ok(None)` when the user has no packages. The result keeps the order in
    /// which the profile page lists the packages, whatever order the download
    /// lookups complete in.
    pub async fn collect(&self, user: &str) -> Result<Option<Vec<PackageFacts>>> {
        let packages = self.registry_provider.get_packages(user).await?;
        if packages.is_empty() {
            log::info!(target: LOG_TARGET, "No packages found for {user}");
            return Ok(None);
        }

        log::info!(target: LOG_TARGET, "Querying download counts of {} package(s) of {user}", packages.len());

        let lookups = join_all(
            packages
                .iter()
                .map(|package| self.downloads_provider.get_download_counts(&package.name)),
        )
        .await;

        Ok(Some(
            packages
                .into_iter()
                .zip(lookups)
                .map(|(package, lookup)| PackageFacts {
                    package,
                    downloads: lookup.counts,
                    failed_windows: lookup.failures,
                })
                .collect(),
        ))
    }
}
