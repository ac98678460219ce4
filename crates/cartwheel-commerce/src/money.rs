//! Money type for product prices and cart totals.
//!
//! Amounts are stored as integer cents to avoid the floating-point drift
//! that plagues monetary sums. The catalog wire format uses decimal dollars
//! (e.g. `10.99`), so conversion happens at the serde boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A monetary amount in cents.
///
/// Arithmetic saturates at the representable range, so summing line
/// subtotals never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Create a Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use cartwheel_commerce::Money;
    /// let price = Money::from_decimal(10.99);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Amount as a decimal number of dollars.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(&self, quantity: i64) -> Money {
        Money(self.0.saturating_mul(quantity))
    }

    /// Format as a display string (e.g. "$49.99").
    pub fn display(&self) -> String {
        format!("${:.2}", self.to_decimal())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

// On the wire a price is a decimal number of dollars, matching the catalog
// API's JSON.

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Money::from_decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(4999);
        assert_eq!(m.cents(), 4999);
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).cents(), 4999);
        assert_eq!(Money::from_decimal(10.0).cents(), 1000);
        assert_eq!(Money::from_decimal(0.1).cents(), 10);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::from_cents(4999);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(5).display(), "$0.05");
        assert_eq!(Money::ZERO.display(), "$0.00");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::from_cents(1000) + Money::from_cents(500);
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_money_times() {
        assert_eq!(Money::from_cents(1099).times(2).cents(), 2198);
        assert_eq!(Money::from_cents(i64::MAX).times(2).cents(), i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 350);
    }

    #[test]
    fn test_money_serde_decimal() {
        let m: Money = serde_json::from_str("10.99").unwrap();
        assert_eq!(m.cents(), 1099);
        assert_eq!(serde_json::to_string(&m).unwrap(), "10.99");
    }
}
