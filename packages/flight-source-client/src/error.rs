//! Error types for the flight source client.

use thiserror::Error;

/// Result type for flight source client operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Flight source client errors.
///
/// `Timeout`, `Network`, `Status` and `Decode` describe a single attempt and
/// are absorbed by the retry loop. Callers of
/// [`FlightSourceClient::fetch_offers`](crate::FlightSourceClient::fetch_offers)
/// only ever see `Exhausted`.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Attempt did not complete within the per-attempt timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Connection failed or the body could not be read
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Source answered with a non-2xx status
    #[error("source returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not a valid flights payload
    #[error("invalid flights payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Every attempt failed
    #[error("source {url} failed after {attempts} attempts: {last_error}")]
    Exhausted {
        url: String,
        attempts: u32,
        #[source]
        last_error: Box<SourceError>,
    },

    /// Invalid client configuration (e.g. an unparseable retry delay)
    #[error("configuration error: {0}")]
    Config(String),
}

impl SourceError {
    /// URL of the source that was exhausted, if this is a terminal failure.
    pub fn exhausted_url(&self) -> Option<&str> {
        match self {
            SourceError::Exhausted { url, .. } => Some(url),
            _ => None,
        }
    }
}
