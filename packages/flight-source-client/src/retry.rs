//! Retry policy for source requests.

use std::str::FromStr;
use std::time::Duration;

use crate::error::SourceError;

/// Delay inserted before each retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryDelay {
    /// Retry as soon as the previous attempt fails
    #[default]
    Immediate,
    /// Same delay before every retry
    Constant(Duration),
    /// `base * 2^(retry - 1)`, capped at `max`
    Exponential { base: Duration, max: Duration },
}

impl RetryDelay {
    /// Delay before the given retry (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        match *self {
            RetryDelay::Immediate => Duration::ZERO,
            RetryDelay::Constant(delay) => delay,
            RetryDelay::Exponential { base, max } => {
                let factor = 2u32.saturating_pow(retry.saturating_sub(1));
                base.saturating_mul(factor).min(max)
            }
        }
    }
}

/// Parses `immediate`, `constant:<ms>` or `exponential:<base_ms>:<max_ms>`.
impl FromStr for RetryDelay {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SourceError::Config(format!("invalid retry delay: {s:?}"));
        let millis = |part: &str| {
            part.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| invalid())
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            ["immediate"] => Ok(RetryDelay::Immediate),
            ["constant", ms] => Ok(RetryDelay::Constant(millis(ms)?)),
            ["exponential", base, max] => Ok(RetryDelay::Exponential {
                base: millis(base)?,
                max: millis(max)?,
            }),
            _ => Err(invalid()),
        }
    }
}

/// How a single source request is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Bound on each individual attempt; resets for every retry
    pub attempt_timeout: Duration,
    /// Additional attempts after the first
    pub max_retries: u32,
    pub delay: RetryDelay,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempt_timeout: Duration::from_millis(200),
            max_retries: 5,
            delay: RetryDelay::Immediate,
        }
    }
}

impl RetryPolicy {
    pub fn new(attempt_timeout: Duration, max_retries: u32) -> Self {
        Self {
            attempt_timeout,
            max_retries,
            delay: RetryDelay::Immediate,
        }
    }

    pub fn with_delay(mut self, delay: RetryDelay) -> Self {
        self.delay = delay;
        self
    }

    /// Total attempts including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}
