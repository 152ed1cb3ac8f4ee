//! Bounded-time retrieval of a business's website.

use std::time::{Duration, Instant};

use reqwest::Client;

use crate::error::FetchError;

/// A successfully fetched page plus the facts observed while fetching it.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: String,
    /// URL after redirects; its scheme decides the SSL signal.
    pub final_url: String,
    pub status: u16,
    pub elapsed_ms: u64,
}

/// HTTP client for fetching business websites.
///
/// One bounded GET per site, no retries: a single slow or broken website must
/// never hold up pipeline progress for long. Non-2xx responses and
/// network-level failures come back as typed errors for the extractor to
/// degrade into default signals.
pub struct SiteFetcher {
    client: Client,
}

impl SiteFetcher {
    /// Creates a `SiteFetcher` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the markup of `url` with a single bounded GET.
    ///
    /// Scheme-less URLs get `https://` prepended before the request.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NoWebsite`] — `url` is empty; no request is made.
    /// - [`FetchError::InvalidUrl`] — `url` cannot be parsed.
    /// - [`FetchError::HttpStatus`] — response status outside 200–299.
    /// - [`FetchError::Http`] — timeout, DNS, connect, or TLS failure.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let url = normalize_url(url)?;
        let started = Instant::now();

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let final_url = response.url().to_string();
        let body = response.text().await?;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        Ok(FetchedPage {
            body,
            final_url,
            status: status.as_u16(),
            elapsed_ms,
        })
    }
}

/// Validates a raw website value and ensures it carries a scheme.
pub(crate) fn normalize_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FetchError::NoWebsite);
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    reqwest::Url::parse(&with_scheme).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    Ok(with_scheme)
}
