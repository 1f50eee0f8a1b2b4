//! HTTP plumbing shared by the registry and downloads providers.

use core::time::Duration;
use ohno::IntoAppError;

const LOG_TARGET: &str = "      http";

/// User agent sent with every request
const USER_AGENT: &str = concat!("npm-dlc/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for all requests of one invocation.
pub fn build_client(timeout: Duration) -> crate::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .into_app_err("unable to create HTTP client")
}

/// Send a GET request, without any retry.
pub async fn get(client: &reqwest::Client, url: &str) -> crate::Result<reqwest::Response> {
    log::debug!(target: LOG_TARGET, "GET {url}");

    let resp = client.get(url).send().await.into_app_err_with(|| format!("requesting '{url}'"))?;

    log::debug!(target: LOG_TARGET, "GET {url} -> {}", resp.status());
    Ok(resp)
}

/// Strip trailing slashes so paths can be appended with a single `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
