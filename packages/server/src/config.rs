use anyhow::{Context, Result};
use dotenvy::dotenv;
use flight_source_client::{RetryDelay, RetryPolicy};
use std::env;
use std::time::Duration;

use crate::domains::flights::{CollapsePolicy, FanInPolicy, PipelineConfig};

/// Sources queried when `FLIGHT_SOURCES` is not set
pub const DEFAULT_SOURCES: [&str; 2] = [
    "https://coding-challenge.powerus.de/flight/source1",
    "https://coding-challenge.powerus.de/flight/source2",
];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub source_urls: Vec<String>,
    /// Bound on each individual source request attempt
    pub request_timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: RetryDelay,
    pub cache_ttl: Duration,
    pub fan_in: FanInPolicy,
    pub collapse: CollapsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            source_urls: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            request_timeout: Duration::from_millis(200),
            max_retries: 5,
            retry_delay: RetryDelay::Immediate,
            cache_ttl: Duration::from_millis(5000),
            fan_in: FanInPolicy::default(),
            collapse: CollapsePolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let source_urls = match lookup("FLIGHT_SOURCES") {
            Some(raw) => {
                let urls: Vec<String> = raw
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if urls.is_empty() {
                    anyhow::bail!("FLIGHT_SOURCES must list at least one URL");
                }
                urls
            }
            None => defaults.source_urls,
        };

        Ok(Self {
            port: match lookup("PORT") {
                Some(v) => v.parse().context("PORT must be a valid number")?,
                None => defaults.port,
            },
            source_urls,
            request_timeout: match lookup("REQUEST_TIMEOUT_MS") {
                Some(v) => Duration::from_millis(
                    v.parse()
                        .context("REQUEST_TIMEOUT_MS must be a number of milliseconds")?,
                ),
                None => defaults.request_timeout,
            },
            max_retries: match lookup("MAX_RETRIES") {
                Some(v) => v.parse().context("MAX_RETRIES must be a valid number")?,
                None => defaults.max_retries,
            },
            retry_delay: match lookup("RETRY_DELAY") {
                Some(v) => v.parse().context(
                    "RETRY_DELAY must be immediate, constant:<ms> or exponential:<base_ms>:<max_ms>",
                )?,
                None => defaults.retry_delay,
            },
            cache_ttl: match lookup("CACHE_TTL_MS") {
                Some(v) => Duration::from_millis(
                    v.parse()
                        .context("CACHE_TTL_MS must be a number of milliseconds")?,
                ),
                None => defaults.cache_ttl,
            },
            fan_in: match lookup("FAN_IN_POLICY") {
                Some(v) => v.parse().context("FAN_IN_POLICY must be require-all or best-effort")?,
                None => defaults.fan_in,
            },
            collapse: match lookup("COLLAPSE_POLICY") {
                Some(v) => v.parse().context("COLLAPSE_POLICY must be keep-first or keep-last")?,
                None => defaults.collapse,
            },
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.request_timeout, self.max_retries).with_delay(self.retry_delay)
    }

    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig::new(self.source_urls.clone())
            .with_fan_in(self.fan_in)
            .with_collapse(self.collapse)
    }
}
