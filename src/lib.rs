//! Ratebank
//!
//! Currency-aware money arithmetic with deferred exchange. Amounts in mixed
//! currencies are composed into an immutable [`Expression`] tree with
//! [`plus`](Expression::plus) and [`times`](Expression::times); a [`Bank`]
//! holding directional exchange rates reduces the tree to a single [`Money`]
//! in a target currency, converting at the leaves.
//!
//! # Features
//!
//! - Integer amounts with opaque currency codes
//! - Two-variant expression tree (`Money`, `Sum`) of arbitrary depth
//! - Directional, last-write-wins rate table with an implicit identity rate
//! - Truncating integer division during reduction
//!
//! # Example
//!
//! ```rust
//! use ratebank::{Bank, Currency, Money};
//!
//! let mut bank = Bank::new();
//! bank.add_rate(Currency::chf(), Currency::usd(), 2);
//!
//! let five_usd = Money::new(5, Currency::usd());
//! let ten_chf = Money::new(10, Currency::chf());
//!
//! let total = bank.reduce(&five_usd.plus(ten_chf), &Currency::usd())?;
//! assert_eq!(total, Money::new(10, Currency::usd()));
//! # Ok::<(), ratebank::MissingRateError>(())
//! ```

pub mod bank;
pub mod error;
pub mod expression;
pub mod monetary;

pub use bank::Bank;
pub use error::{MissingRateError, RateResult};
pub use expression::Expression;
pub use monetary::{Currency, CurrencyPair, Money};
