//! HTTP fetcher that feeds downloaded pages to the field extractor.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::extract::extract;
use crate::types::ScrapedRecord;

/// Fetches a single page and runs the extraction cascade over it.
///
/// One GET per call: no redirects beyond reqwest's defaults, no retries, and
/// a fixed overall timeout.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with the given overall request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads `url` and extracts a [`ScrapedRecord`] from its HTML.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `url` is not an absolute http(s) URL.
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx response.
    /// - [`ScraperError::Http`] on DNS, connect, TLS, timeout or body-read failure.
    pub async fn scrape(&self, url: &str) -> Result<ScrapedRecord, ScraperError> {
        let html = self.fetch_html(url).await?;
        let record = extract(&html);
        tracing::debug!(
            url,
            has_title = !record.title.is_empty(),
            has_phone = !record.phone.is_empty(),
            has_email = !record.email.is_empty(),
            has_hours = !record.opening_hours.is_empty(),
            "page scraped"
        );
        Ok(record)
    }

    /// Downloads `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Same as [`PageClient::scrape`].
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = parse_page_url(url)?;

        let response = self
            .client
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "page fetch returned non-success status");
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Validates that `url` is an absolute `http`/`https` URL.
fn parse_page_url(url: &str) -> Result<Url, ScraperError> {
    let parsed = Url::parse(url.trim()).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: format!("unsupported scheme \"{other}\""),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_page_url_accepts_http_and_https() {
        assert!(parse_page_url("http://example.org/").is_ok());
        assert!(parse_page_url(" https://example.org/contact ").is_ok());
    }

    #[test]
    fn parse_page_url_rejects_relative_url() {
        let err = parse_page_url("example.org/contact").unwrap_err();
        assert!(matches!(err, ScraperError::InvalidUrl { .. }));
    }

    #[test]
    fn parse_page_url_rejects_other_schemes() {
        let err = parse_page_url("ftp://example.org/").unwrap_err();
        assert!(
            matches!(err, ScraperError::InvalidUrl { ref reason, .. } if reason.contains("ftp")),
            "unexpected error: {err}"
        );
    }
}
