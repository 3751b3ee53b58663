//! HTTP client for fetching the page under analysis.

mod origin;

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::extract::PageText;

use origin::extract_domain;
pub use origin::parse_target_url;

/// Fetches one page per call with a single GET. No retries.
///
/// Non-2xx responses are errors; the body of an error page is never
/// treated as site content.
#[derive(Debug, Clone)]
pub struct SiteClient {
    client: Client,
}

impl SiteClient {
    /// Creates a `SiteClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw HTML body of `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `url` is not an absolute http(s) URL.
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx response.
    /// - [`ScraperError::Http`] on network, TLS or body decoding failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let target = parse_target_url(url)?;
        let domain = extract_domain(target.as_str());
        tracing::debug!(%domain, "fetching site content");

        let response = self
            .client
            .get(target.clone())
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%domain, status = status.as_u16(), "site returned non-success status");
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: target.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(%domain, bytes = body.len(), "site content fetched");
        Ok(body)
    }

    /// Fetches `url` and extracts its visible text.
    ///
    /// # Errors
    ///
    /// Same as [`SiteClient::fetch_html`].
    pub async fn fetch_page_text(&self, url: &str) -> Result<PageText, ScraperError> {
        let html = self.fetch_html(url).await?;
        Ok(PageText::from_html(url.trim(), &html))
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
