//! Pure compounding-rate conversions.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{Error, Result};

/// Converts an annual rate to the equivalent monthly compounding rate `r`,
/// so that `(1 + r)^12 - 1` equals the annual rate.
///
/// The conversion is geometric, not a division by twelve. Fails when the
/// annual rate is -100% or below, which has no positive compounding base.
pub fn periodic_rate(annual_rate: Decimal) -> Result<Decimal> {
    let base = Decimal::ONE + annual_rate;
    if base <= Decimal::ZERO {
        return Err(Error::InvalidRate(format!(
            "annual rate must be greater than -1, got {annual_rate}"
        )));
    }
    let exponent = Decimal::ONE / Decimal::from(MONTHS_PER_YEAR);
    Ok(base.powd(exponent) - Decimal::ONE)
}

/// Annual return net of inflation: `(1 + nominal) / (1 + inflation) - 1`.
pub fn real_annual_return(nominal: Decimal, inflation: Decimal) -> Result<Decimal> {
    if Decimal::ONE + nominal <= Decimal::ZERO {
        return Err(Error::InvalidRate(format!(
            "annual rate must be greater than -1, got {nominal}"
        )));
    }
    let deflator = Decimal::ONE + inflation;
    if deflator <= Decimal::ZERO {
        return Err(Error::InvalidRate(format!(
            "inflation rate must be greater than -1, got {inflation}"
        )));
    }
    Ok((Decimal::ONE + nominal) / deflator - Decimal::ONE)
}

/// Inflation discount factor after `years` full years, e.g. `1.045^3`.
pub(crate) fn inflation_factor(annual_inflation: Decimal, years: u32) -> Result<Decimal> {
    let base = Decimal::ONE + annual_inflation;
    if base <= Decimal::ZERO {
        return Err(Error::InvalidRate(format!(
            "inflation rate must be greater than -1, got {annual_inflation}"
        )));
    }
    base.checked_powi(i64::from(years)).ok_or_else(|| {
        Error::InvalidRate(format!(
            "inflation factor overflows after {years} years at {annual_inflation}"
        ))
    })
}

/// Guard shared by callers that accept a periodic rate directly.
pub(crate) fn ensure_periodic_rate(rate: Decimal) -> Result<()> {
    if rate <= dec!(-1) {
        return Err(Error::InvalidRate(format!(
            "periodic rate must be greater than -1, got {rate}"
        )));
    }
    Ok(())
}
