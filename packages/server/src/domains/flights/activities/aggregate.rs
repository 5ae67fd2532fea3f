use flight_source_client::SourcePayload;
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::domains::flights::error::{FlightsError, Result};
use crate::domains::flights::models::FanInPolicy;
use crate::kernel::BaseFlightSource;

/// A source that was left out of a best-effort aggregation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceFailure {
    pub url: String,
    pub reason: String,
}

/// Result of one fan-out over all configured sources
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Payloads of the sources that answered, in configured URL order
    pub payloads: Vec<SourcePayload>,
    /// Only populated under `FanInPolicy::BestEffort`
    pub failures: Vec<SourceFailure>,
}

/// Fetch every source concurrently and join the results in URL order.
///
/// Every fetch runs to success or exhaustion; nothing is cancelled when a
/// sibling fails. Under `RequireAll` the first failure in URL order fails the
/// whole aggregation and the other results are discarded. Under `BestEffort`
/// failed sources are reported next to the payloads; it only fails when no
/// source answered at all.
pub async fn aggregate(
    source: &dyn BaseFlightSource,
    urls: &[String],
    fan_in: FanInPolicy,
) -> Result<Aggregation> {
    info!(sources = urls.len(), fan_in = %fan_in, "Fetching flights from sources");

    let results = join_all(urls.iter().map(|url| source.fetch_offers(url))).await;

    let mut aggregation = Aggregation::default();
    for (url, result) in urls.iter().zip(results) {
        match result {
            Ok(payload) => aggregation.payloads.push(payload),
            Err(e) if fan_in == FanInPolicy::RequireAll => {
                warn!(url = %url, error = %e, "Failed to fetch flights");
                return Err(FlightsError::from(e));
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Skipping unavailable flight source");
                aggregation.failures.push(SourceFailure {
                    url: url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if aggregation.payloads.is_empty() && !aggregation.failures.is_empty() {
        return Err(FlightsError::NoSourcesAvailable {
            failed: aggregation.failures.len(),
        });
    }

    Ok(aggregation)
}
