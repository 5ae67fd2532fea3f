//! Typed errors for the flights pipeline.

use flight_source_client::SourceError;
use thiserror::Error;

/// Errors that abort a catalog build.
///
/// Per-attempt source failures never show up here; the source client absorbs
/// them and only reports a source once its retries are spent.
#[derive(Debug, Error)]
pub enum FlightsError {
    /// A source failed every attempt
    #[error("flight source unavailable: {0}")]
    SourceExhausted(#[from] SourceError),

    /// Best-effort fan-in where not a single source answered
    #[error("no flight source available ({failed} failed)")]
    NoSourcesAvailable { failed: usize },

    /// An offer without exactly two slices
    #[error("malformed offer at position {index}: expected 2 slices, found {slices}")]
    MalformedOffer { index: usize, slices: usize },
}

pub type Result<T> = std::result::Result<T, FlightsError>;
