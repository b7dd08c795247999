//! Money type with exact minor-unit precision.
//!
//! Amounts are stored as an integer count of minor units (cents), so
//! addition and subtraction are exact and rounding is reproducible.
//! Scaling by a ratio rounds to the nearest minor unit with banker's
//! rounding, which carries no systematic bias across many aggregations.
//! Conversion to and from decimal strings is a boundary concern; internal
//! arithmetic never goes through floating point.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::constants::MINOR_UNITS_PER_MAJOR;
use crate::errors::{Error, ValidationError};

/// A monetary amount as a signed count of minor units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    minor: i64,
}

impl Money {
    pub const ZERO: Money = Money { minor: 0 };

    /// Creates an amount from a count of minor units (cents).
    #[must_use]
    pub const fn from_minor_units(minor: i64) -> Self {
        Self { minor }
    }

    /// Creates an amount from whole major units.
    ///
    /// Intended for catalog values and literals well inside the `i64` range.
    #[must_use]
    pub const fn from_major(major: i64) -> Self {
        Self {
            minor: major * MINOR_UNITS_PER_MAJOR,
        }
    }

    /// Creates an amount from a decimal value in major units, rounding to
    /// the nearest minor unit with banker's rounding.
    ///
    /// Returns `None` when the value does not fit the minor-unit range.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        value
            .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_i64()
            .map(Self::from_minor_units)
    }

    /// The amount as a count of minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.minor
    }

    /// The amount in major units as an exact decimal.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.minor, 2)
    }

    /// Scales the amount by a ratio, rounding the result to the nearest
    /// minor unit with banker's rounding. Returns `None` on overflow.
    #[must_use]
    pub fn mul_ratio(self, ratio: Decimal) -> Option<Self> {
        Decimal::from(self.minor)
            .checked_mul(ratio)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_i64()
            .map(Self::from_minor_units)
    }

    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.minor.checked_add(rhs.minor) {
            Some(minor) => Some(Self { minor }),
            None => None,
        }
    }

    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.minor.checked_sub(rhs.minor) {
            Some(minor) => Some(Self { minor }),
            None => None,
        }
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        Self {
            minor: self.minor.abs(),
        }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.minor == 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.minor < 0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.minor > 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            minor: self.minor + rhs.minor,
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.minor += rhs.minor;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            minor: self.minor - rhs.minor,
        }
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.minor -= rhs.minor;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Self { minor: -self.minor }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        let major = abs / MINOR_UNITS_PER_MAJOR as u64;
        let cents = abs % MINOR_UNITS_PER_MAJOR as u64;
        write!(f, "{sign}{major}.{cents:02}")
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())?;
        Self::from_decimal(value).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Amount out of range: {s}"
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exact_addition_and_subtraction() {
        let a = Money::from_minor_units(10_01);
        let b = Money::from_minor_units(2_02);
        assert_eq!(a + b, Money::from_minor_units(12_03));
        assert_eq!(a - b, Money::from_minor_units(7_99));
        assert_eq!(-a, Money::from_minor_units(-10_01));
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(3_000).minor_units(), 300_000);
        assert_eq!(Money::from_major(-5).minor_units(), -500);
    }

    #[test]
    fn test_to_decimal_round_trip() {
        let m = Money::from_minor_units(1_234_56);
        assert_eq!(m.to_decimal(), dec!(1234.56));
        assert_eq!(Money::from_decimal(dec!(1234.56)), Some(m));
    }

    #[test]
    fn test_mul_ratio_uses_bankers_rounding() {
        // 2.5 cents -> 2 (even), 3.5 cents -> 4 (even)
        assert_eq!(
            Money::from_minor_units(25).mul_ratio(dec!(0.1)),
            Some(Money::from_minor_units(2))
        );
        assert_eq!(
            Money::from_minor_units(35).mul_ratio(dec!(0.1)),
            Some(Money::from_minor_units(4))
        );
    }

    #[test]
    fn test_mul_ratio_no_cumulative_bias() {
        // Summing many half-cent ties should not drift in one direction.
        let amounts: Vec<Money> = (1..=100)
            .map(|i| Money::from_minor_units(i * 10 + 5))
            .collect();
        let scaled: Money = amounts
            .iter()
            .map(|m| m.mul_ratio(dec!(0.1)).unwrap())
            .sum();
        let exact: Decimal = amounts
            .iter()
            .map(|m| Decimal::from(m.minor_units()) * dec!(0.1))
            .sum();
        let drift = Decimal::from(scaled.minor_units()) - exact;
        assert!(drift.abs() <= dec!(1), "drift was {drift}");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor_units(1_234_56).to_string(), "1234.56");
        assert_eq!(Money::from_minor_units(-5).to_string(), "-0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "1234.56".parse::<Money>().unwrap(),
            Money::from_minor_units(1_234_56)
        );
        assert_eq!(
            "-0.05".parse::<Money>().unwrap(),
            Money::from_minor_units(-5)
        );
        assert!("not-money".parse::<Money>().is_err());
    }

    #[test]
    fn test_ordering() {
        let low = Money::from_major(1);
        let high = Money::from_major(2);
        assert!(low < high);
        assert_eq!(low.max(high), high);
    }
}
