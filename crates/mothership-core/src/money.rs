//! # Money Module
//!
//! Provides the `Money` type for monetary values and `UnitPrice`, a money
//! amount that is known to be non-negative.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Menu prices as floats:                                                 │
//! │    12.10 + 14.20 + 0.70 = 27.000000000000004                            │
//! │                                                                         │
//! │  Summing the same cart in a different order can give a different       │
//! │  last bit, so the progress bar and the checkout total disagree.        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1210 + 1420 + 70 = 2700, in any order, every time                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mothership_core::money::{Money, UnitPrice};
//!
//! let price = UnitPrice::from_cents(1450).unwrap(); // $14.50
//! let line = price.times(2);                         // $29.00
//! assert_eq!(line.cents(), 2900);
//!
//! // Negative amounts are valid Money but never a valid unit price
//! assert!(UnitPrice::new(Money::from_cents(-1)).is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as "amount left to free shipping"
///   may be negative
/// - **Single field tuple struct**: serializes as a plain number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use mothership_core::money::Money;
    ///
    /// let price = Money::from_cents(1200); // $12.00
    /// assert_eq!(price.cents(), 1200);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use mothership_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1450);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 4350);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented display (`$12.00`, `-$5.50`).
///
/// Storefronts format with the user's locale; this is for logs.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Left-to-right fold, so the result depends only on iteration order.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Price
// =============================================================================

/// The price of one unit of a menu item. Never negative.
///
/// ## Why a separate type?
/// A cart line must never carry a negative price. Making that a property of
/// the type means [`Cart::add_item`](crate::Cart::add_item) cannot be
/// handed one, so the cart itself only has to police quantities.
///
/// ```rust
/// use mothership_core::money::{Money, UnitPrice};
///
/// let free_side = UnitPrice::new(Money::zero()).unwrap();
/// assert_eq!(free_side.cents(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct UnitPrice(Money);

impl UnitPrice {
    /// Wraps `money` if it is zero or positive.
    pub fn new(money: Money) -> Result<Self, ValidationError> {
        if money.is_negative() {
            return Err(ValidationError::MustNotBeNegative {
                field: "unit_price".to_string(),
            });
        }
        Ok(UnitPrice(money))
    }

    /// Shorthand for `UnitPrice::new(Money::from_cents(cents))`.
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        Self::new(Money::from_cents(cents))
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0.cents()
    }

    /// Line total for `qty` units.
    #[inline]
    pub const fn times(&self, qty: i64) -> Money {
        self.0.multiply_quantity(qty)
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for UnitPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let money = Money::deserialize(deserializer)?;
        UnitPrice::new(money).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1450);
        assert_eq!(money.cents(), 1450);
        assert!(!money.is_negative());
        assert!(Money::from_cents(-1).is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1200)), "$12.00");
        assert_eq!(format!("{}", Money::from_cents(7450)), "$74.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1200);
        let b = Money::from_cents(1450);

        assert_eq!((a + b).cents(), 2650);
        assert_eq!(a.multiply_quantity(5).cents(), 6000);
        assert_eq!(Money::default() + b, b);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let prices = [1210, 1420, 70].map(Money::from_cents);
        let forward: Money = prices.iter().copied().sum();
        let backward: Money = prices.iter().rev().copied().sum();
        assert_eq!(forward, backward);
        assert_eq!(forward.cents(), 2700);
    }

    #[test]
    fn test_unit_price_rejects_negative() {
        assert!(UnitPrice::from_cents(0).is_ok());
        assert!(UnitPrice::from_cents(1450).is_ok());
        assert_eq!(
            UnitPrice::from_cents(-1),
            Err(ValidationError::MustNotBeNegative {
                field: "unit_price".to_string()
            })
        );
    }

    #[test]
    fn test_unit_price_times() {
        let price = UnitPrice::from_cents(1200).unwrap();
        assert_eq!(price.times(5), Money::from_cents(6000));
    }

    #[test]
    fn test_unit_price_deserialize_checks_sign() {
        let ok: UnitPrice = serde_json::from_str("1450").unwrap();
        assert_eq!(ok.cents(), 1450);

        let bad = serde_json::from_str::<UnitPrice>("-100");
        assert!(bad.is_err());
    }
}
