//! Monetary types: currency codes, currency pairs, and the Money value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// An opaque currency code.
///
/// Codes are not validated against any ISO list and are compared exactly as
/// given: `"usd"` and `"USD"` are two different currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    /// Create a new currency from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the currency code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Common currencies
    pub fn usd() -> Self {
        Self::new("USD")
    }

    pub fn chf() -> Self {
        Self::new("CHF")
    }

    pub fn eur() -> Self {
        Self::new("EUR")
    }

    pub fn gbp() -> Self {
        Self::new("GBP")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A directional currency pair, used as the rate-table key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency being converted out of.
    pub from: Currency,
    /// Currency being converted into.
    pub to: Currency,
}

impl CurrencyPair {
    /// Create a new currency pair.
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// True if both sides name the same currency.
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// Get the inverse pair.
    ///
    /// Rates are directional, so the inverse pair's rate must be registered
    /// separately; this helper only swaps the sides.
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

/// An immutable integer amount in a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Create a new Money value. The amount is not validated.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Get the amount.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Get the currency.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Scale the amount by an integer multiplier, keeping the currency.
    pub fn times(&self, multiplier: i64) -> Money {
        Money {
            amount: self.amount * multiplier,
            currency: self.currency.clone(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, multiplier: i64) -> Self::Output {
        self.times(multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_multiplication() {
        let five = Money::new(5, Currency::usd());

        assert_eq!(five.times(2), Money::new(10, Currency::usd()));
        assert_eq!(five.times(3), Money::new(15, Currency::usd()));
    }

    #[test]
    fn test_multiplication_operator() {
        let five = Money::new(5, Currency::chf());

        assert_eq!(five * 4, Money::new(20, Currency::chf()));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Money::new(5, Currency::usd()), Money::new(5, Currency::usd()));
        assert_ne!(Money::new(5, Currency::usd()), Money::new(6, Currency::usd()));
        assert_ne!(Money::new(5, Currency::usd()), Money::new(5, Currency::chf()));
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::usd().code(), "USD");
        assert_eq!(Currency::chf().code(), "CHF");
        assert_eq!(Currency::eur().to_string(), "EUR");
        assert_eq!(Currency::gbp().to_string(), "GBP");
    }

    #[test]
    fn test_currency_codes_are_opaque() {
        // No case normalization and no validation.
        assert_ne!(Currency::new("usd"), Currency::usd());
        assert_eq!(Currency::new("WUZ"), Currency::from("WUZ"));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(5, Currency::usd()).to_string(), "5 USD");
        assert_eq!(Money::new(-3, Currency::chf()).to_string(), "-3 CHF");
    }

    #[test]
    fn test_pair_display_and_inverse() {
        let pair = CurrencyPair::new(Currency::chf(), Currency::usd());

        assert_eq!(pair.to_string(), "CHF/USD");
        assert_eq!(pair.inverse(), CurrencyPair::new(Currency::usd(), Currency::chf()));
        assert!(!pair.is_identity());
        assert!(CurrencyPair::new(Currency::usd(), Currency::usd()).is_identity());
    }

    #[test]
    fn test_money_hashes_by_value() {
        let mut set = HashSet::new();
        set.insert(Money::new(5, Currency::usd()));
        set.insert(Money::new(5, Currency::usd()));
        set.insert(Money::new(5, Currency::chf()));

        assert_eq!(set.len(), 2);
    }
}
