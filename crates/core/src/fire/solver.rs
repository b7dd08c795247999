//! Time-to-target projection solver.
//!
//! The solver answers "after how many whole months does the balance first
//! reach the target" using the closed form of the future-value equation,
//! and detects unreachable plans analytically instead of iterating to an
//! arbitrary cutoff. Every path terminates on bounded arithmetic.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::constants::MINOR_UNITS_PER_MAJOR;
use crate::errors::{Error, Result};
use crate::growth::ensure_periodic_rate;
use crate::money::Money;

use super::model::ProjectionOutcome;

/// Future value of `principal` after `periods` months at `periodic_rate`,
/// with a level `contribution` added each month:
///
/// `FV(n) = P(1+r)^n + C((1+r)^n - 1)/r` for `r != 0`, `P + Cn` for `r = 0`.
///
/// Values are in major units. Returns `None` on numeric overflow.
#[must_use]
pub fn future_value(
    principal: Decimal,
    contribution: Decimal,
    periodic_rate: Decimal,
    periods: u64,
) -> Option<Decimal> {
    if periodic_rate.is_zero() {
        return contribution
            .checked_mul(Decimal::from(periods))
            .and_then(|total| principal.checked_add(total));
    }
    let growth = (Decimal::ONE + periodic_rate).checked_powi(periods.try_into().ok()?)?;
    let principal_part = principal.checked_mul(growth)?;
    let annuity_part =
        contribution.checked_mul((growth - Decimal::ONE).checked_div(periodic_rate)?)?;
    principal_part.checked_add(annuity_part)
}

/// Finds the minimal number of whole months until the balance first reaches
/// the target, or determines analytically that it never does.
///
/// `monthly_contribution` may be zero or negative (a profile spending down
/// its savings); `periodic_rate` may be zero or negative but must stay above
/// -100%. The target must be positive.
///
/// The closed-form month count is verified against the exact future-value
/// evaluation and nudged so that `FV(n) >= target` and `FV(n-1) < target`,
/// which keeps the answer within zero periods of a direct simulation.
pub fn solve_periods_to_target(
    current_net_worth: Money,
    monthly_contribution: Money,
    periodic_rate: Decimal,
    target_net_worth: Money,
) -> Result<ProjectionOutcome> {
    ensure_periodic_rate(periodic_rate)?;
    if !target_net_worth.is_positive() {
        return Err(Error::InvalidScenario(format!(
            "target net worth must be positive, got {target_net_worth}"
        )));
    }

    // Already independent, whatever the contribution sign.
    if current_net_worth >= target_net_worth {
        return Ok(ProjectionOutcome::Reached { periods: 0 });
    }

    let p = current_net_worth.to_decimal();
    let c = monthly_contribution.to_decimal();
    let t = target_net_worth.to_decimal();
    let r = periodic_rate;

    if r.is_zero() {
        if c <= Decimal::ZERO {
            return Ok(ProjectionOutcome::Unreachable);
        }
        let months = ((t - p) / c).ceil();
        let periods = months.to_u64().ok_or_else(|| {
            Error::InvalidScenario("projection exceeds the supported horizon".to_string())
        })?;
        return Ok(ProjectionOutcome::Reached { periods });
    }

    // FV(n) = (P + C/r)(1+r)^n - C/r. The balance crosses the target iff
    // both T*r + C and P*r + C are positive; otherwise the sequence is
    // non-increasing or bounded below the target.
    let numerator = t
        .checked_mul(r)
        .and_then(|x| x.checked_add(c))
        .ok_or_else(|| Error::InvalidRate(format!("periodic rate {r} is too large to evaluate")))?;
    let denominator = p
        .checked_mul(r)
        .and_then(|x| x.checked_add(c))
        .ok_or_else(|| Error::InvalidRate(format!("periodic rate {r} is too large to evaluate")))?;

    if numerator <= Decimal::ZERO || denominator <= Decimal::ZERO {
        return Ok(ProjectionOutcome::Unreachable);
    }

    let ratio = numerator.checked_div(denominator).ok_or_else(|| {
        Error::InvalidScenario("projection exceeds the supported horizon".to_string())
    })?;
    let estimate = ratio
        .ln()
        .checked_div((Decimal::ONE + r).ln())
        .ok_or_else(|| {
            Error::InvalidScenario("projection exceeds the supported horizon".to_string())
        })?;
    let mut periods = estimate.ceil().to_u64().ok_or_else(|| {
        Error::InvalidScenario("projection exceeds the supported horizon".to_string())
    })?;

    // The logarithm can land one period off either way; settle on the
    // minimal n with FV(n) >= T. FV is monotone increasing in every
    // reachable regime, so both adjustments terminate.
    while periods > 0 {
        match future_value(p, c, r, periods - 1) {
            Some(fv) if fv >= t => periods -= 1,
            _ => break,
        }
    }
    loop {
        match future_value(p, c, r, periods) {
            Some(fv) if fv < t => periods += 1,
            // Overflow means the balance left any representable target behind.
            _ => break,
        }
    }

    Ok(ProjectionOutcome::Reached { periods })
}

/// Inverse query: the level monthly contribution that reaches the target in
/// exactly `periods` months.
///
/// Returns zero when the profile is already at the target. The result is
/// rounded up to the next minor unit so the horizon is actually met; it may
/// be negative when growth alone overshoots the target.
pub fn required_contribution(
    current_net_worth: Money,
    periodic_rate: Decimal,
    target_net_worth: Money,
    periods: u64,
) -> Result<Money> {
    ensure_periodic_rate(periodic_rate)?;
    if !target_net_worth.is_positive() {
        return Err(Error::InvalidScenario(format!(
            "target net worth must be positive, got {target_net_worth}"
        )));
    }
    if current_net_worth >= target_net_worth {
        return Ok(Money::ZERO);
    }
    if periods == 0 {
        return Err(Error::InvalidScenario(
            "a zero-month horizon cannot reach the target".to_string(),
        ));
    }

    let p = current_net_worth.to_decimal();
    let t = target_net_worth.to_decimal();
    let r = periodic_rate;

    let horizon_error =
        || Error::InvalidScenario("projection horizon is too long to evaluate".to_string());

    let required = if r.is_zero() {
        (t - p) / Decimal::from(periods)
    } else {
        let growth = (Decimal::ONE + r)
            .checked_powi(periods.try_into().map_err(|_| horizon_error())?)
            .ok_or_else(horizon_error)?;
        let principal_part = p.checked_mul(growth).ok_or_else(horizon_error)?;
        (t - principal_part)
            .checked_mul(r)
            .and_then(|x| x.checked_div(growth - Decimal::ONE))
            .ok_or_else(horizon_error)?
    };

    required
        .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
        .map(|minor| minor.round_dp_with_strategy(0, RoundingStrategy::ToPositiveInfinity))
        .and_then(|minor| minor.to_i64())
        .map(Money::from_minor_units)
        .ok_or_else(|| {
            Error::InvalidScenario("required contribution is out of range".to_string())
        })
}
