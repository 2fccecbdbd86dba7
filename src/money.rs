//! Integer money amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed amount in whole currency units.
///
/// Balances may go negative (an overdrawn account), so the inner value is
/// an `i64`. Arithmetic is checked; callers decide what overflow means.
///
/// # Example
///
/// ```rust
/// use statecraft::Money;
///
/// let balance = Money::new(100);
/// let after = balance.checked_sub(Money::new(150)).unwrap();
/// assert_eq!(after, Money::new(-50));
/// assert!(after.is_negative());
/// assert_eq!(after.to_string(), "₹-50");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(units: i64) -> Self {
        Money(units)
    }

    pub const fn units(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money(units)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_arithmetic_detects_overflow() {
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);
        assert_eq!(Money::new(i64::MIN).checked_sub(Money::new(1)), None);
        assert_eq!(
            Money::new(40).checked_add(Money::new(2)),
            Some(Money::new(42))
        );
    }

    #[test]
    fn sign_predicates() {
        assert!(Money::new(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::ZERO.is_positive());
        assert!(Money::new(1).is_positive());
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::new(250)).unwrap();
        assert_eq!(json, "250");
        let back: Money = serde_json::from_str("-75").unwrap();
        assert_eq!(back, Money::new(-75));
    }
}
