//! Amount type for monetary values in Ghana cedis (GHS).
//!
//! This module provides the `Amount` type which wraps `Decimal` and rejects
//! empty, non-numeric and negative input at parse time, so a bad amount can
//! never reach the record store.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Represents a non-negative amount of money in GHS.
///
/// The value is stored as a `Decimal` and displayed exactly as parsed, with no
/// currency symbol or grouping, because the CSV export and the SMS receipt both
/// require the plain number.
///
/// # Examples
///
/// ```
/// # use big7_ledger::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("200").unwrap();
/// assert_eq!(amount.to_string(), "200");
/// assert!(Amount::from_str("-5").is_err());
/// assert!(Amount::from_str("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates a new `Amount` from a `Decimal` value.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying `Decimal` value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// An error that can occur when parsing input into an `Amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The input was empty or all whitespace.
    Empty,
    /// The input could not be parsed as a number.
    NotANumber(String),
    /// The input parsed, but was negative.
    Negative(String),
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Empty => write!(f, "An amount is required"),
            AmountError::NotANumber(s) => write!(f, "'{s}' is not a number"),
            AmountError::Negative(s) => {
                write!(f, "'{s}' is negative, amounts must be zero or greater")
            }
        }
    }
}

impl std::error::Error for AmountError {}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }
        let value = Decimal::from_str(trimmed)
            .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;
        if value.is_sign_negative() {
            return Err(AmountError::Negative(trimmed.to_string()));
        }
        Ok(Amount(value))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The original slot stores amounts as JSON numbers; writes stay
        // compatible whenever the value is exactly representable. Amounts are
        // non-negative, so the integer path is unsigned.
        if self.0.is_integer() {
            if let Some(v) = self.0.to_u64() {
                return serializer.serialize_u64(v);
            }
        }
        if let Some(v) = self.0.to_f64() {
            return serializer.serialize_f64(v);
        }
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accepts both JSON numbers and numeric strings so that record slots
        // written by the original implementation load without migration.
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "a non-negative number or numeric string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Amount::from_str(v).map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Amount::new(Decimal::from(v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v < 0 {
            return Err(E::custom(AmountError::Negative(v.to_string())));
        }
        Ok(Amount::new(Decimal::from(v)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let value = Decimal::try_from(v).map_err(E::custom)?;
        if value.is_sign_negative() {
            return Err(E::custom(AmountError::Negative(v.to_string())));
        }
        Ok(Amount::new(value))
    }
}
