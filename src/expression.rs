//! Deferred money arithmetic as an immutable expression tree.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bank::Bank;
use crate::error::RateResult;
use crate::monetary::{Currency, Money};

/// An unevaluated arithmetic term over [`Money`] values.
///
/// Composition never consults a conversion rate; rates are looked up only
/// when the tree is reduced to a concrete amount via [`Bank::reduce`].
/// Expressions are immutable: every composition returns a new node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// A single concrete amount.
    Money(Money),
    /// The deferred addition of two sub-expressions.
    Sum {
        augend: Box<Expression>,
        addend: Box<Expression>,
    },
}

impl Expression {
    /// Wrap `self` and `addend` in a new `Sum` node.
    ///
    /// Defined once for both variants; [`Money::plus`] delegates here.
    pub fn plus(self, addend: impl Into<Expression>) -> Expression {
        Expression::Sum {
            augend: Box::new(self),
            addend: Box::new(addend.into()),
        }
    }

    /// Scale the expression by an integer multiplier.
    ///
    /// A `Sum` distributes the multiplier over both children. The original
    /// tree is left untouched.
    pub fn times(&self, multiplier: i64) -> Expression {
        match self {
            Expression::Money(money) => Expression::Money(money.times(multiplier)),
            Expression::Sum { augend, addend } => Expression::Sum {
                augend: Box::new(augend.times(multiplier)),
                addend: Box::new(addend.times(multiplier)),
            },
        }
    }

    /// Collapse the tree to a single [`Money`] in `target`.
    ///
    /// Conversion happens at the leaves: every `Money` leaf is converted
    /// into `target` before amounts are summed, so a `Sum` never adds
    /// mismatched units. Leaf conversion divides the amount by the
    /// registered rate with truncating integer division; remainders are
    /// discarded.
    pub fn reduce(&self, bank: &Bank, target: &Currency) -> RateResult<Money> {
        match self {
            Expression::Money(money) => {
                let rate = bank.rate(money.currency(), target)?;
                Ok(Money::new(money.amount() / rate, target.clone()))
            }
            Expression::Sum { augend, addend } => {
                let augend = augend.reduce(bank, target)?;
                let addend = addend.reduce(bank, target)?;
                Ok(Money::new(augend.amount() + addend.amount(), target.clone()))
            }
        }
    }
}

impl Money {
    /// Defer the addition of `self` and `addend` into an [`Expression`].
    pub fn plus(self, addend: impl Into<Expression>) -> Expression {
        Expression::from(self).plus(addend)
    }
}

impl From<Money> for Expression {
    fn from(money: Money) -> Self {
        Expression::Money(money)
    }
}

/// A `Sum` is never equal to a plain [`Money`]; a leaf is equal iff the
/// wrapped value is.
impl PartialEq<Money> for Expression {
    fn eq(&self, other: &Money) -> bool {
        matches!(self, Expression::Money(money) if money == other)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Money(money) => write!(f, "{}", money),
            Expression::Sum { augend, addend } => write!(f, "({} + {})", augend, addend),
        }
    }
}
