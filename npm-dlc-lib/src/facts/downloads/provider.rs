use super::{DownloadCounts, DownloadWindow};
use crate::Result;
use crate::facts::http;
use ohno::IntoAppError;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Value;
use std::sync::Arc;

pub(super) const LOG_TARGET: &str = " downloads";

/// Default base URL of the npm download-counts point API
pub const DEFAULT_STATS_BASE_URL: &str = "https://api.npmjs.org/downloads/point";

/// Characters escaped in a package name. `@` and `/` stay literal so scoped names
/// like `@scope/name` reach the API in the form it expects.
const PACKAGE_NAME: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A download window whose count could not be obtained
#[derive(Debug)]
pub struct WindowFailure {
    pub window: DownloadWindow,
    pub error: ohno::AppError,
}

/// The counts of one package, with the windows that were defaulted to zero
#[derive(Debug, Default)]
pub struct DownloadLookup {
    pub counts: DownloadCounts,
    pub failures: Vec<WindowFailure>,
}

/// Queries the npm download-counts API.
#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl Provider {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: Option<&str>) -> Self {
        Self {
            client,
            base_url: Arc::from(http::normalize_base_url(base_url.unwrap_or(DEFAULT_STATS_BASE_URL))),
        }
    }

    /// Address of the point value of one package over one window
    #[must_use]
    pub fn point_url(&self, package: &str, window: DownloadWindow) -> String {
        format!("{}/{}/{}", self.base_url, window.as_path(), encode_package_name(package))
    }

    /// Get the counts of all windows of a package.
    ///
    /// The three requests run concurrently. A window that fails is logged, counts as
    /// zero and is recorded in [`DownloadLookup::failures`]; it never affects the other
    /// windows.
    pub async fn get_download_counts(&self, package: &str) -> DownloadLookup {
        let (daily, weekly, monthly) = tokio::join!(
            self.fetch_window(package, DownloadWindow::LastDay),
            self.fetch_window(package, DownloadWindow::LastWeek),
            self.fetch_window(package, DownloadWindow::LastMonth),
        );

        let mut lookup = DownloadLookup::default();
        for (window, result) in [
            (DownloadWindow::LastDay, daily),
            (DownloadWindow::LastWeek, weekly),
            (DownloadWindow::LastMonth, monthly),
        ] {
            match result {
                Ok(count) => lookup.counts.set(window, count),
                Err(error) => {
                    log::warn!(target: LOG_TARGET, "Could not fetch {window} downloads of {package}, counting 0: {error:#}");
                    lookup.failures.push(WindowFailure { window, error });
                }
            }
        }

        lookup
    }

    async fn fetch_window(&self, package: &str, window: DownloadWindow) -> Result<u64> {
        let url = self.point_url(package, window);
        let body: Value = http::get(&self.client, &url)
            .await?
            .error_for_status()
            .into_app_err_with(|| format!("querying {window} downloads of '{package}'"))?
            .json()
            .await
            .into_app_err_with(|| format!("decoding {window} downloads of '{package}'"))?;

        let count = downloads_from_body(&body);
        log::debug!(target: LOG_TARGET, "{package}: {count} download(s) in {window}");

        Ok(count)
    }
}

/// Read the `downloads` field of a point response; absent or non-numeric values are 0.
#[must_use]
pub fn downloads_from_body(body: &Value) -> u64 {
    body.get("downloads").and_then(Value::as_u64).unwrap_or(0)
}

/// Make a package name safe to use as the last path segments of a URL.
#[must_use]
pub fn encode_package_name(name: &str) -> String {
    utf8_percent_encode(name, PACKAGE_NAME).to_string()
}
