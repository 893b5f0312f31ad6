//! Money type with precise decimal arithmetic
//!
//! Monetary values are represented with rust_decimal so that claim amounts
//! and settlement figures never suffer floating-point drift. Amounts are
//! stored with 2 decimal places, matching how the claims history file
//! records dollar figures.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Negative amount: {0}")]
    NegativeAmount(Decimal),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A monetary amount in the ledger currency
///
/// The claims history file stores amounts as plain JSON numbers, so Money
/// serializes as a number rather than rust_decimal's default string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounded to cents
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(2))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Creates Money from an integer amount in minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self::new(Decimal::new(minor_units, 2))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rejects negative amounts, returning the value unchanged otherwise
    pub fn ensure_non_negative(&self) -> Result<Self, MoneyError> {
        if self.is_negative() {
            return Err(MoneyError::NegativeAmount(self.0));
        }
        Ok(*self)
    }

    /// Checked addition
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money::new)
            .ok_or_else(|| MoneyError::InvalidAmount("overflow in addition".to_string()))
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.0 / divisor))
    }

    /// Arithmetic mean of a sequence of amounts
    ///
    /// Returns zero for an empty sequence, by the same convention the
    /// statistics report uses for empty claim sets.
    pub fn mean<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = Money>,
    {
        let mut total = dec!(0);
        let mut count = 0u64;
        for m in amounts {
            total += m.0;
            count += 1;
        }
        if count == 0 {
            return Self::zero();
        }
        Self::new(total / Decimal::from(count))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Money::new)
    }
}

/// A percentage rate, such as a claim approval rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal fraction (0.5 for 50%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal fraction
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a zero rate
    pub fn zero() -> Self {
        Self { value: dec!(0) }
    }

    /// Rate of `part` out of `total`, zero when `total` is zero
    pub fn from_counts(part: u64, total: u64) -> Self {
        if total == 0 {
            return Self::zero();
        }
        Self {
            value: Decimal::from(part) / Decimal::from(total),
        }
    }

    /// Returns the rate as a decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage (50.0 for 50%)
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(1))
    }
}
