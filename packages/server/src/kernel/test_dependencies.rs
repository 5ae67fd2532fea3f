// TestDependencies - mock implementations for testing
//
// Provides a scripted flight source that can be injected into ServerDeps.

use async_trait::async_trait;
use flight_source_client::{SourceError, SourcePayload};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::BaseFlightSource;

// =============================================================================
// Mock Flight Source
// =============================================================================

/// Scripted outcome for one source URL
#[derive(Debug, Clone)]
enum MockResponse {
    Payload(SourcePayload),
    Exhausted { attempts: u32, status: u16 },
}

/// Flight source returning canned payloads per URL and recording every call.
///
/// Unscripted URLs answer with an empty payload. A per-URL delay lets tests
/// make sources complete out of configuration order. Calls are recorded when
/// they start and again when they finish, so tests can tell a cancelled fetch
/// from one that ran to the end.
#[derive(Clone, Default)]
pub struct MockFlightSource {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<Mutex<Vec<String>>>,
    completed: Arc<Mutex<Vec<String>>>,
}

impl MockFlightSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with the given payload
    pub fn with_payload(self, url: &str, payload: SourcePayload) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), MockResponse::Payload(payload));
        self
    }

    /// Make `url` fail as if every retry had been spent
    pub fn with_exhausted(self, url: &str, attempts: u32) -> Self {
        self.responses.lock().unwrap().insert(
            url.to_string(),
            MockResponse::Exhausted {
                attempts,
                status: 503,
            },
        );
        self
    }

    /// Delay the answer for `url`
    pub fn with_delay(self, url: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(url.to_string(), delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of times a specific URL was fetched
    pub fn calls_for(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }

    /// Number of fetches of `url` that ran to completion
    pub fn completed_for(&self, url: &str) -> usize {
        self.completed.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl BaseFlightSource for MockFlightSource {
    async fn fetch_offers(&self, url: &str) -> Result<SourcePayload, SourceError> {
        // Record the call
        self.calls.lock().unwrap().push(url.to_string());

        let delay = self.delays.lock().unwrap().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.completed.lock().unwrap().push(url.to_string());

        let response = self.responses.lock().unwrap().get(url).cloned();
        match response {
            Some(MockResponse::Payload(payload)) => Ok(payload),
            Some(MockResponse::Exhausted { attempts, status }) => Err(SourceError::Exhausted {
                url: url.to_string(),
                attempts,
                last_error: Box::new(SourceError::Status {
                    status,
                    body: "mock source unavailable".to_string(),
                }),
            }),
            None => Ok(SourcePayload::default()),
        }
    }
}
