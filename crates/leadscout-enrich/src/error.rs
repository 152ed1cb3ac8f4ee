use thiserror::Error;

/// Failure modes of a single website fetch.
///
/// None of these abort a run; the extractor turns each into a fully
/// defaulted signal set for the affected business.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The record has no website to fetch; short-circuits before any request.
    #[error("no website listed")]
    NoWebsite,

    #[error("invalid website URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Network-level failure: DNS, connect, TLS, or timeout. No response was
    /// received, so no status code is available.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response arrived with a status outside 200–299.
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },
}
