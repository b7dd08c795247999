//! FIRE target resolver.

use rust_decimal::Decimal;

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{Error, Result};
use crate::money::Money;

/// Net worth required to sustain the target spending at the given safe
/// withdrawal rate: `spend * 12 / rate`.
///
/// At the default 4% rate this is the familiar 25x of annual spending.
/// Rejects non-positive spending and withdrawal rates outside (0, 1).
pub fn required_net_worth(
    target_monthly_spend: Money,
    withdrawal_rate: Decimal,
) -> Result<Money> {
    if !target_monthly_spend.is_positive() {
        return Err(Error::InvalidScenario(format!(
            "target monthly spending must be positive, got {target_monthly_spend}"
        )));
    }
    if withdrawal_rate <= Decimal::ZERO || withdrawal_rate >= Decimal::ONE {
        return Err(Error::InvalidScenario(format!(
            "withdrawal rate must be strictly between 0 and 1, got {withdrawal_rate}"
        )));
    }

    let multiplier = Decimal::from(MONTHS_PER_YEAR) / withdrawal_rate;
    target_monthly_spend.mul_ratio(multiplier).ok_or_else(|| {
        Error::InvalidScenario(format!(
            "required net worth is out of range for withdrawal rate {withdrawal_rate}"
        ))
    })
}
