//! # Money Module
//!
//! Provides the `Money` type used for every price, discount and total.
//!
//! ## Integer Minor Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are stored as signed cents (i64).                              │
//! │                                                                         │
//! │    0.1 + 0.2 in floating point = 0.30000000000000004                   │
//! │    10 cents + 20 cents in Money  = 30 cents                            │
//! │                                                                         │
//! │  Signed because a cart total is allowed to go below zero when the      │
//! │  discounts exceed the subtotal.                                        │
//! │                                                                         │
//! │  Arithmetic saturates at the i64 bounds instead of overflowing.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartwheel_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let doubled = price * 2;
//! let total = doubled + Money::from_cents(500);
//! assert_eq!(total.cents(), 2698);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Percentage;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money Flows
/// ```text
/// Product::price() ──► Product::total_price(qty) ──► Cart::subtotal()
///                                                          │
///             Discount::amount_off(running) ◄──────────────┘
///                          │
///                          ▼
///                    Cart::total()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use cartwheel_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ```rust
    /// use cartwheel_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// Quantities are signed; a negative quantity yields a negative line.
    /// The product saturates at the `i64` bounds.
    ///
    /// ```rust
    /// use cartwheel_core::money::Money;
    ///
    /// let line_total = Money::from_cents(299).multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns the given percentage of this amount, rounded half up.
    ///
    /// ## Implementation
    /// Integer math in i128: `(cents × bps + 5000) / 10000`.
    /// The +5000 is half of the 10000 bps divisor.
    ///
    /// ```rust
    /// use cartwheel_core::money::Money;
    /// use cartwheel_core::types::Percentage;
    ///
    /// let running = Money::from_cents(400);
    /// let off = running.percentage_of(Percentage::from_percent(10));
    /// assert_eq!(off.cents(), 40);
    /// ```
    pub fn percentage_of(&self, rate: Percentage) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering such as `$10.99` or `-$5.50`.
///
/// Front ends should format with their own locale rules.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((a * 3).cents(), 3000);

        let mut running = a;
        running -= b;
        running += Money::from_cents(1);
        assert_eq!(running.cents(), 501);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, -50]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 250);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage_of_rounds_half_up() {
        // 10% of $4.05 = 40.5 cents → 41
        let amount = Money::from_cents(405);
        assert_eq!(amount.percentage_of(Percentage::from_percent(10)).cents(), 41);

        // 8.25% of $10.00 = 82.5 cents → 83
        let amount = Money::from_cents(1000);
        assert_eq!(amount.percentage_of(Percentage::from_bps(825)).cents(), 83);
    }

    #[test]
    fn test_percentage_of_zero_rate() {
        let amount = Money::from_cents(12345);
        assert!(amount.percentage_of(Percentage::from_bps(0)).is_zero());
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        assert_eq!(Money::from_cents(100).multiply_quantity(i64::MAX).cents(), i64::MAX);
        assert_eq!(Money::from_cents(100).multiply_quantity(i64::MIN).cents(), i64::MIN);
        assert_eq!(Money::from_cents(299).multiply_quantity(-2).cents(), -598);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);

        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(min - Money::from_cents(1), min);
        assert_eq!(max * 2, max);

        let mut running = max;
        running += Money::from_cents(200);
        assert_eq!(running, max);

        let total: Money = [max, Money::from_cents(200)].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }

    #[test]
    fn test_ordering_min() {
        let raw = Money::from_cents(40);
        let cap = Money::from_cents(20);
        assert_eq!(raw.min(cap), cap);
    }
}
