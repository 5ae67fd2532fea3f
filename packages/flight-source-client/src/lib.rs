//! HTTP client for upstream flight offer sources.
//!
//! Each source is a plain `GET` endpoint returning `{ "flights": [Offer, ...] }`.
//! Sources are unreliable, so every request runs under a [`RetryPolicy`]:
//! each attempt is bounded by a timeout and any failure is retried until the
//! retry budget is spent.
//!
//! # Example
//!
//! ```rust,ignore
//! use flight_source_client::{FlightSourceClient, RetryPolicy};
//!
//! let client = FlightSourceClient::new(RetryPolicy::default());
//! let payload = client.fetch_offers("https://example.com/flight/source1").await?;
//! println!("{} offers", payload.offer_count());
//! ```

pub mod error;
pub mod retry;
pub mod types;

pub use error::{Result, SourceError};
pub use retry::{RetryDelay, RetryPolicy};
pub use types::{Leg, Offer, OfferIdentity, SourcePayload};

use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct FlightSourceClient {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl FlightSourceClient {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            policy,
        }
    }

    /// Fetch one source, retrying any failure until the policy is exhausted.
    ///
    /// Returns [`SourceError::Exhausted`] carrying the last attempt's error
    /// once `max_retries + 1` attempts have failed.
    pub async fn fetch_offers(&self, url: &str) -> Result<SourcePayload> {
        let max_retries = self.policy.max_retries;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            match self.attempt(url).await {
                Ok(payload) => {
                    debug!(
                        url = %url,
                        attempt,
                        offers = payload.offer_count(),
                        "Fetched flights from source"
                    );
                    return Ok(payload);
                }
                Err(e) => {
                    warn!(url = %url, attempt, error = %e, "Error fetching flights");

                    if attempt >= self.policy.max_attempts() {
                        return Err(SourceError::Exhausted {
                            url: url.to_string(),
                            attempts: attempt,
                            last_error: Box::new(e),
                        });
                    }

                    info!(
                        url = %url,
                        attempt,
                        max_retries,
                        "Retrying request attempt {} out of {}",
                        attempt,
                        max_retries
                    );

                    let delay = self.policy.delay.delay_for(attempt);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }
    }

    /// A single attempt, bounded by the policy's attempt timeout.
    async fn attempt(&self, url: &str) -> Result<SourcePayload> {
        let request = async {
            let resp = self.client.get(url).send().await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(SourceError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = resp.bytes().await?;
            let payload: SourcePayload = serde_json::from_slice(&body)?;
            Ok(payload)
        };

        tokio::time::timeout(self.policy.attempt_timeout, request)
            .await
            .map_err(|_| SourceError::Timeout {
                url: url.to_string(),
            })?
    }
}
