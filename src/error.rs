//! Error types for rate lookup and reduction.

use thiserror::Error;

use crate::monetary::CurrencyPair;

/// No conversion rate is registered for a non-identity currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no conversion rate registered for {pair}")]
pub struct MissingRateError {
    /// The pair whose lookup failed.
    pub pair: CurrencyPair,
}

/// Result type for rate lookups and reductions.
pub type RateResult<T> = Result<T, MissingRateError>;
