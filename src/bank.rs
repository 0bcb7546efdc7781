//! Exchange-rate table and the reduction entry point.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{MissingRateError, RateResult};
use crate::expression::Expression;
use crate::monetary::{Currency, CurrencyPair, Money};

/// A table of directional exchange rates.
///
/// Each bank is independently owned by its caller; there is no process-wide
/// bank and no internal locking. If a bank is ever shared across threads,
/// [`add_rate`](Bank::add_rate) must be externally synchronized relative to
/// [`rate`](Bank::rate) and [`reduce`](Bank::reduce).
#[derive(Debug, Clone, Default)]
pub struct Bank {
    rates: HashMap<CurrencyPair, i64>,
}

impl Bank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Register the rate for converting one unit of `from` into `to`.
    ///
    /// Rates are directional: registering CHF/USD says nothing about
    /// USD/CHF. Registering the same pair again overwrites the earlier
    /// rate. Identity pairs are never stored; converting a currency to
    /// itself always uses the implicit rate of 1. `rate` must be positive.
    pub fn add_rate(&mut self, from: Currency, to: Currency, rate: i64) {
        debug_assert!(rate > 0, "exchange rates must be positive");

        let pair = CurrencyPair::new(from, to);
        if pair.is_identity() {
            debug!(pair = %pair, "Ignoring identity rate");
            return;
        }

        debug!(pair = %pair, rate, "Registered rate");
        self.rates.insert(pair, rate);
    }

    /// Get the rate for converting `from` into `to`.
    ///
    /// Identity conversions answer 1 without a table lookup; any other
    /// unregistered pair is a [`MissingRateError`].
    pub fn rate(&self, from: &Currency, to: &Currency) -> RateResult<i64> {
        if from == to {
            return Ok(1);
        }

        let pair = CurrencyPair::new(from.clone(), to.clone());
        match self.rates.get(&pair) {
            Some(rate) => Ok(*rate),
            None => Err(MissingRateError { pair }),
        }
    }

    /// Reduce an expression tree to a single [`Money`] in `target`.
    ///
    /// This is the entry point callers use; evaluation itself is delegated
    /// to [`Expression::reduce`].
    pub fn reduce(&self, expression: &Expression, target: &Currency) -> RateResult<Money> {
        debug!(expression = %expression, target = %target, "Reducing expression");
        expression.reduce(self, target)
    }

    /// Number of registered rates.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True if no rates have been registered.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
