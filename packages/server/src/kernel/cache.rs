//! Single-slot TTL cache with single-flight recomputation.
//!
//! Holds one process-wide value (the flights endpoint takes no parameters).
//! Fresh reads only take the slot's lock for the duration of a clone. A miss
//! takes the async compute gate and runs the compute future while holding it,
//! so concurrent callers wait for that one computation and then read its
//! result instead of starting their own.
//!
//! # Usage
//!
//!   let cache = TtlCache::new(Duration::from_secs(5));
//!   let offers = cache.get_or_compute(|| build_offers()).await?;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

struct CacheEntry<V> {
    value: Arc<V>,
    computed_at: DateTime<Utc>,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Point-in-time view of the cache for health reporting.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CacheStatus {
    /// A fresh value is stored
    pub cached: bool,
    /// A computation is running
    pub refreshing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_ms: Option<u64>,
}

/// Clears the refreshing flag when a compute ends, including on cancellation.
struct Refreshing<'a>(&'a AtomicBool);

impl<'a> Refreshing<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for Refreshing<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct TtlCache<V> {
    ttl: Duration,
    slot: RwLock<Option<CacheEntry<V>>>,
    gate: Mutex<()>,
    refreshing: AtomicBool,
}

impl<V> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
            gate: Mutex::new(()),
            refreshing: AtomicBool::new(false),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The stored value, if it is younger than the TTL.
    pub fn fresh(&self) -> Option<Arc<V>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|entry| entry.is_fresh(Instant::now()))
            .map(|entry| entry.value.clone())
    }

    /// Return the cached value if it is younger than the TTL, otherwise run
    /// `compute`, store its result and return it.
    ///
    /// A failed compute stores nothing; the error goes to this caller only and
    /// the next caller computes again.
    pub async fn get_or_compute<F, Fut, E>(&self, compute: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.fresh() {
            debug!("Cache hit");
            return Ok(value);
        }

        let _gate = self.gate.lock().await;

        // Filled by the compute we waited on
        if let Some(value) = self.fresh() {
            debug!("Cache hit after waiting for refresh");
            return Ok(value);
        }

        debug!(ttl_ms = self.ttl.as_millis() as u64, "Cache miss, computing");

        let value = {
            let _refreshing = Refreshing::start(&self.refreshing);
            Arc::new(compute().await?)
        };

        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(CacheEntry {
            value: value.clone(),
            computed_at: Utc::now(),
            expires_at: Instant::now() + self.ttl,
        });

        Ok(value)
    }

    pub fn status(&self) -> CacheStatus {
        let refreshing = self.refreshing.load(Ordering::SeqCst);
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);

        let now = Instant::now();
        match slot.as_ref().filter(|entry| entry.is_fresh(now)) {
            Some(entry) => CacheStatus {
                cached: true,
                refreshing,
                computed_at: Some(entry.computed_at),
                expires_in_ms: Some(entry.expires_at.duration_since(now).as_millis() as u64),
            },
            None => CacheStatus {
                cached: false,
                refreshing,
                computed_at: None,
                expires_in_ms: None,
            },
        }
    }
}
