use std::sync::Arc;
use std::time::Duration;

use flight_source_client::Offer;
use tracing::info;

use super::{aggregate, assign_identities, dedupe, merge, SourceFailure};
use crate::domains::flights::error::Result;
use crate::domains::flights::models::PipelineConfig;
use crate::kernel::{BaseFlightSource, CacheStatus, TtlCache};

/// One catalog build: the unique offers and the sources left out of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub offers: Vec<Offer>,
    /// Only populated under `FanInPolicy::BestEffort`
    pub failed_sources: Vec<SourceFailure>,
}

/// Run fetch → merge → identify → dedupe once, without caching.
pub async fn build_catalog(
    source: &dyn BaseFlightSource,
    config: &PipelineConfig,
) -> Result<CatalogSnapshot> {
    let aggregation = aggregate(source, &config.source_urls, config.fan_in).await?;
    let sources = aggregation.payloads.len();

    let merged = merge(aggregation.payloads);
    let merged_count = merged.len();

    let identified = assign_identities(merged)?;
    let unique = dedupe(identified, config.collapse);

    info!(
        sources,
        failed_sources = aggregation.failures.len(),
        merged = merged_count,
        unique = unique.len(),
        collapse = %config.collapse,
        "Flight catalog built"
    );

    Ok(CatalogSnapshot {
        offers: unique,
        failed_sources: aggregation.failures,
    })
}

/// Deduplicated offer catalog served from a short-lived cache.
pub struct FlightCatalog {
    source: Arc<dyn BaseFlightSource>,
    config: PipelineConfig,
    cache: TtlCache<CatalogSnapshot>,
}

impl FlightCatalog {
    pub fn new(source: Arc<dyn BaseFlightSource>, config: PipelineConfig, cache_ttl: Duration) -> Self {
        Self {
            source,
            config,
            cache: TtlCache::new(cache_ttl),
        }
    }

    /// Cached catalog, rebuilt when older than the cache TTL.
    ///
    /// Concurrent callers during a rebuild share that one rebuild.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
        self.cache
            .get_or_compute(|| build_catalog(self.source.as_ref(), &self.config))
            .await
    }

    /// Sources missing from the cached catalog; empty when nothing is cached.
    pub fn failed_sources(&self) -> Vec<SourceFailure> {
        self.cache
            .fresh()
            .map(|snapshot| snapshot.failed_sources.clone())
            .unwrap_or_default()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }

    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::flights::error::FlightsError;
    use crate::domains::flights::models::{CollapsePolicy, FanInPolicy};
    use crate::domains::flights::testing::offer;
    use crate::kernel::MockFlightSource;
    use flight_source_client::SourcePayload;

    const OUT: &str = "2019-08-08T04:30:00.000Z";
    const BACK: &str = "2019-08-10T05:35:00.000Z";
    const TTL: Duration = Duration::from_millis(5000);

    fn sources() -> (Vec<String>, MockFlightSource) {
        let urls = vec![
            "http://sources.test/1".to_string(),
            "http://sources.test/2".to_string(),
        ];
        let mock = MockFlightSource::new()
            .with_payload(
                &urls[0],
                SourcePayload::from_offers(vec![
                    offer("144", OUT, "8542", BACK, 129),
                    offer("1", OUT, "2", BACK, 10),
                ]),
            )
            .with_payload(
                &urls[1],
                SourcePayload::from_offers(vec![
                    offer("3", OUT, "4", BACK, 30),
                    offer("144", OUT, "8542", BACK, 119),
                ]),
            );
        (urls, mock)
    }

    #[tokio::test]
    async fn test_build_catalog_collapses_overlap() {
        let (urls, mock) = sources();
        let config = PipelineConfig::new(urls).with_collapse(CollapsePolicy::KeepFirst);

        let offers = build_catalog(&mock, &config).await.unwrap().offers;

        assert_eq!(offers.len(), 3);
        assert_eq!(offers[0].price, rust_decimal::Decimal::from(129));
        assert!(offers.iter().all(|o| o.id.is_some()));
    }

    #[tokio::test]
    async fn test_build_catalog_rejects_malformed_offer() {
        let url = "http://sources.test/bad".to_string();
        let mut one_way = offer("1", OUT, "2", BACK, 10);
        one_way.slices.pop();
        let mock = MockFlightSource::new()
            .with_payload(&url, SourcePayload::from_offers(vec![one_way]));

        let err = build_catalog(&mock, &PipelineConfig::new(vec![url]))
            .await
            .unwrap_err();

        assert!(matches!(err, FlightsError::MalformedOffer { index: 0, slices: 1 }));
    }

    #[tokio::test]
    async fn test_build_catalog_rejects_offer_without_slices_field() {
        let url = "http://sources.test/legless".to_string();
        let payload: SourcePayload =
            serde_json::from_str(r#"{"flights": [{"price": 99}]}"#).unwrap();
        let mock = MockFlightSource::new().with_payload(&url, payload);

        let err = build_catalog(&mock, &PipelineConfig::new(vec![url.clone()]))
            .await
            .unwrap_err();

        assert!(matches!(err, FlightsError::MalformedOffer { index: 0, slices: 0 }));
        assert_eq!(mock.calls_for(&url), 1);
    }

    #[tokio::test]
    async fn test_best_effort_failures_are_kept_with_the_cached_catalog() {
        let (mut urls, mock) = sources();
        urls.push("http://sources.test/down".to_string());
        let mock = mock.with_exhausted(&urls[2], 6);
        let catalog = FlightCatalog::new(
            Arc::new(mock),
            PipelineConfig::new(urls.clone()).with_fan_in(FanInPolicy::BestEffort),
            TTL,
        );
        assert!(catalog.failed_sources().is_empty());

        let snapshot = catalog.snapshot().await.unwrap();

        assert_eq!(snapshot.offers.len(), 3);
        assert_eq!(snapshot.failed_sources.len(), 1);
        assert_eq!(catalog.failed_sources(), snapshot.failed_sources);
        assert_eq!(catalog.failed_sources()[0].url, urls[2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_offers_served_from_cache_within_ttl() {
        let (urls, mock) = sources();
        let catalog = FlightCatalog::new(Arc::new(mock.clone()), PipelineConfig::new(urls), TTL);

        let first = catalog.snapshot().await.unwrap();
        tokio::time::advance(Duration::from_millis(1000)).await;
        let second = catalog.snapshot().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(mock.call_count(), 2);
        assert!(catalog.cache_status().cached);
    }

    #[tokio::test(start_paused = true)]
    async fn test_offers_refetched_after_ttl() {
        let (urls, mock) = sources();
        let catalog = FlightCatalog::new(Arc::new(mock.clone()), PipelineConfig::new(urls), TTL);

        catalog.snapshot().await.unwrap();
        tokio::time::advance(TTL + Duration::from_millis(1)).await;
        catalog.snapshot().await.unwrap();

        assert_eq!(mock.call_count(), 4);
    }

    #[tokio::test]
    async fn test_failed_build_is_propagated_and_not_cached() {
        let urls = vec!["http://sources.test/down".to_string()];
        let mock = MockFlightSource::new().with_exhausted(&urls[0], 6);
        let catalog = FlightCatalog::new(
            Arc::new(mock.clone()),
            PipelineConfig::new(urls).with_fan_in(FanInPolicy::RequireAll),
            TTL,
        );

        assert!(catalog.snapshot().await.is_err());
        assert!(catalog.snapshot().await.is_err());

        assert_eq!(mock.call_count(), 2);
        assert!(!catalog.cache_status().cached);
    }
}
