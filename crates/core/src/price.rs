//! Money amounts attached to products.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative price in the smallest currency unit (e.g. cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Convert a major-unit decimal amount (e.g. `12.5` dollars) into minor units.
    ///
    /// Rounds to the nearest minor unit.
    pub fn try_from_major(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {amount})"
            )));
        }
        let minor = (amount * 100.0).round();
        if minor > u64::MAX as f64 {
            return Err(DomainError::validation("price is out of range"));
        }
        Ok(Self(minor as u64))
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Exact sum of `prices` in minor units.
    ///
    /// Widened to `u128` so that totals above `u64::MAX` stay exact.
    pub fn total(prices: impl IntoIterator<Item = Price>) -> u128 {
        prices.into_iter().map(|p| u128::from(p.amount())).sum()
    }

    /// Exact product of the price and `count`, in minor units.
    pub fn times(self, count: usize) -> u128 {
        u128::from(self.amount()) * count as u128
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.amount() / 100, self.amount() % 100)
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_major_units_to_minor_units() {
        assert_eq!(Price::try_from_major(12.5).unwrap(), Price::new(1250));
        assert_eq!(Price::try_from_major(0.0).unwrap(), Price::ZERO);
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        for bad in [-0.01, f64::NAN, f64::INFINITY] {
            match Price::try_from_major(bad).unwrap_err() {
                DomainError::Validation(_) => {}
                other => panic!("Expected Validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn total_and_times_do_not_overflow() {
        let max = Price::new(u64::MAX);
        assert_eq!(Price::total([max, Price::new(1)]), u128::from(u64::MAX) + 1);
        assert_eq!(max.times(2), 2 * u128::from(u64::MAX));
        assert_eq!(Price::new(3).times(4), 12);
        assert_eq!(Price::total([]), 0);
    }

    #[test]
    fn displays_as_major_units() {
        assert_eq!(Price::new(1205).to_string(), "12.05");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: whole-cent amounts survive the major-unit conversion.
            #[test]
            fn major_units_round_trip(cents in 0u64..1_000_000_000) {
                let price = Price::try_from_major(cents as f64 / 100.0).unwrap();
                prop_assert_eq!(price.amount(), cents);
            }

            /// Property: the total is never below any single addend.
            #[test]
            fn total_is_monotonic(amounts in prop::collection::vec(any::<u64>(), 0..50)) {
                let total = Price::total(amounts.iter().copied().map(Price::new));
                for a in amounts {
                    prop_assert!(total >= u128::from(a));
                }
            }
        }
    }
}
