//! # Money Module
//!
//! Rental prices and booking totals, held as whole cents.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Listing rates     $45/day, $270/week   ──► Money::from_major          │
//! │  Filter bounds     ?minPrice=60         ──► Money::checked_from_major  │
//! │  Booking total     rate × billable days ──► Money::times_days          │
//! │  Total spent       Σ booking totals     ──► Iterator::sum (saturating) │
//! │                                                                         │
//! │  On the wire a Money is its cent count: 13500 means $135.00.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Anything computed from user input goes through a checked constructor so
//! an absurd value becomes an error instead of a wrapped total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use ts_rs::TS;

/// An amount in US cents.
///
/// Ordering follows the cent value, which is what the price sorts use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole dollars, for listing rates written as literals.
    ///
    /// `major` must stay below `i64::MAX / 100`; untrusted input goes through
    /// [`Money::checked_from_major`].
    ///
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(45).cents(), 4500);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Like `from_major`, but `None` when the cent value does not fit.
    ///
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// assert_eq!(Money::checked_from_major(200), Some(Money::from_major(200)));
    /// assert_eq!(Money::checked_from_major(i64::MAX / 10), None);
    /// ```
    #[inline]
    pub const fn checked_from_major(major: i64) -> Option<Self> {
        match major.checked_mul(100) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole dollars, truncated toward zero. The listing query string
    /// carries prices this way.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// A daily rate over `days` days, `None` on overflow.
    ///
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let rate = Money::from_major(120);
    /// assert_eq!(rate.times_days(2), Some(Money::from_major(240)));
    /// assert_eq!(Money::from_cents(i64::MAX / 2).times_days(3), None);
    /// ```
    #[inline]
    pub const fn times_days(&self, days: i64) -> Option<Self> {
        match self.0.checked_mul(days) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

/// `$45.00`, for log lines. The views format for the locale themselves.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

/// Saturates at `i64::MAX` cents instead of overflowing.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_rate_in_cents() {
        let rate = Money::from_major(45);
        assert_eq!(rate.cents(), 4500);
        assert_eq!(rate.dollars(), 45);
        assert_eq!(Money::from_cents(4599).dollars(), 45);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_major(135).to_string(), "$135.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_checked_constructors_reject_overflow() {
        assert_eq!(Money::checked_from_major(100_000_000_000_000_000), None);
        assert_eq!(Money::checked_from_major(-45), Some(Money::from_cents(-4500)));
        assert_eq!(Money::from_major(45).times_days(3), Some(Money::from_major(135)));
        assert_eq!(Money::from_cents(i64::MAX / 2).times_days(3), None);
    }

    #[test]
    fn test_total_spent_sums_and_saturates() {
        let spent: Money = [Money::from_major(135), Money::from_major(70)].into_iter().sum();
        assert_eq!(spent, Money::from_major(205));

        let huge: Money = [Money::from_cents(i64::MAX), Money::from_major(1)].into_iter().sum();
        assert_eq!(huge, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_wire_form_is_cents() {
        assert_eq!(serde_json::to_string(&Money::from_major(135)).unwrap(), "13500");
        assert!(Money::from_major(35) < Money::from_major(45));
    }
}
