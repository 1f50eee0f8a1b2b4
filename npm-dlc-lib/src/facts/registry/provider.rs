use super::PackageInfo;
use crate::Result;
use crate::facts::http;
use ohno::{IntoAppError, app_err, bail};
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;

pub(super) const LOG_TARGET: &str = "  registry";

/// Default base URL of the npm website
pub const DEFAULT_REGISTRY_BASE_URL: &str = "https://www.npmjs.com";

/// Each package on a profile page is rendered as its own section
const CARD_SELECTOR: &str = "section";
const NAME_SELECTOR: &str = "h3";
const INFO_SELECTOR: &str = "div span";

/// Discovers the packages a user has published by scraping their profile page.
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
            base_url: Arc::from(http::normalize_base_url(base_url.unwrap_or(DEFAULT_REGISTRY_BASE_URL))),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Address of a user's profile page
    #[must_use]
    pub fn profile_url(&self, user: &str) -> String {
        format!("{}/~{user}", self.base_url)
    }

    /// Get the packages listed on a user's profile page, in page order.
    ///
    /// An empty list means the user has no published packages. Failing to fetch or
    /// understand the page is an error.
    pub async fn get_packages(&self, user: &str) -> Result<Vec<PackageInfo>> {
        let url = self.profile_url(user);
        let resp = http::get(&self.client, &url).await?;

        if resp.status() == StatusCode::NOT_FOUND {
            bail!("npm user '{user}' was not found");
        }

        let body = resp
            .error_for_status()
            .into_app_err_with(|| format!("fetching the profile page of '{user}'"))?
            .text()
            .await
            .into_app_err_with(|| format!("reading the profile page of '{user}'"))?;

        let packages = parse_profile_page(&body, &self.base_url)?;
        log::debug!(target: LOG_TARGET, "Found {} package(s) published by {user}", packages.len());

        Ok(packages)
    }
}

/// Extract the package cards of a profile page.
///
/// Within a card the `h3` heading holds the package name and the first `div span`
/// holds a line such as `published 1.2.3 • 2 days ago`: the second word is the
/// version and everything from the fourth word on is the publish time.
pub fn parse_profile_page(html: &str, base_url: &str) -> Result<Vec<PackageInfo>> {
    let document = Html::parse_document(html);
    let card_selector = selector(CARD_SELECTOR)?;
    let name_selector = selector(NAME_SELECTOR)?;
    let info_selector = selector(INFO_SELECTOR)?;

    let mut packages = Vec::new();
    for card in document.select(&card_selector) {
        let Some(name) = card.select(&name_selector).next().map(element_text).filter(|name| !name.is_empty()) else {
            log::trace!(target: LOG_TARGET, "Skipping a section without a package name");
            continue;
        };

        let info = card
            .select(&info_selector)
            .next()
            .map(element_text)
            .ok_or_else(|| app_err!("malformed package card for '{name}': no publish information"))?;

        let words: Vec<&str> = info.split_whitespace().collect();
        let Some(version) = words.get(1) else {
            bail!("malformed package card for '{name}': unexpected publish information '{info}'");
        };
        let published = words.get(3..).map(|rest| rest.join(" ")).unwrap_or_default();

        packages.push(PackageInfo {
            url: format!("{base_url}/package/{name}"),
            version: (*version).to_string(),
            published,
            name,
        });
    }

    Ok(packages)
}

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| app_err!("invalid selector '{css}': {e}"))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
