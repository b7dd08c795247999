//! Year-by-year growth projections and the coast/barista variants.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::{COAST_HORIZON_AGE, MONTHS_PER_YEAR};
use crate::errors::{Error, Result};
use crate::growth::{inflation_factor, GrowthAssumptions};
use crate::money::Money;
use crate::profiles::FinancialProfile;

use super::model::{BaristaFire, CoastFire, FireScenario, ProjectionPoint};
use super::solver::solve_periods_to_target;
use super::target::required_net_worth;

/// Simulates the balance year by year for `years` years, contributing the
/// profile's monthly surplus, and deflates each end-of-year balance back to
/// today's purchasing power.
pub fn project_growth(
    profile: &FinancialProfile,
    assumptions: &GrowthAssumptions,
    years: u32,
) -> Result<Vec<ProjectionPoint>> {
    let rate = assumptions.periodic_rate()?;
    let contribution = profile.monthly_surplus();
    let c = contribution.to_decimal();

    let overflow =
        || Error::InvalidScenario("projected balance is out of range".to_string());

    let mut balance = profile.current_net_worth.to_decimal();
    let mut points = Vec::with_capacity(years as usize);
    for year in 1..=years {
        for _ in 0..MONTHS_PER_YEAR {
            balance = balance
                .checked_mul(Decimal::ONE + rate)
                .and_then(|grown| grown.checked_add(c))
                .ok_or_else(overflow)?;
        }
        let deflator = inflation_factor(assumptions.annual_inflation, year)?;
        let adjusted = balance.checked_div(deflator).ok_or_else(overflow)?;
        points.push(ProjectionPoint {
            year,
            age: profile.current_age + year,
            balance: Money::from_decimal(balance).ok_or_else(overflow)?,
            monthly_contribution: contribution,
            inflation_adjusted: Money::from_decimal(adjusted).ok_or_else(overflow)?,
        });
    }
    Ok(points)
}

/// Coast calculation: the present amount that compounds into the scenario's
/// FIRE number by the coast horizon age with no further contributions.
///
/// Fails with an invalid-profile error when the profile is already at or
/// past the horizon age.
pub fn coast_fire(
    profile: &FinancialProfile,
    assumptions: &GrowthAssumptions,
    scenario: &FireScenario,
) -> Result<CoastFire> {
    scenario.validate()?;
    if profile.current_age >= COAST_HORIZON_AGE {
        return Err(Error::InvalidProfile(format!(
            "current age {} is at or past the coast horizon age {}",
            profile.current_age, COAST_HORIZON_AGE
        )));
    }
    let years_to_horizon = COAST_HORIZON_AGE - profile.current_age;

    let rate = assumptions.periodic_rate()?;
    let fire_number = required_net_worth(scenario.target_monthly_spend, scenario.withdrawal_rate)?;

    let growth = (Decimal::ONE + assumptions.annual_return)
        .checked_powi(i64::from(years_to_horizon))
        .ok_or_else(|| {
            Error::InvalidRate(format!(
                "annual return {} overflows over {} years",
                assumptions.annual_return, years_to_horizon
            ))
        })?;
    let coast_number = fire_number
        .to_decimal()
        .checked_div(growth)
        .and_then(Money::from_decimal)
        .ok_or_else(|| Error::InvalidScenario("coast amount is out of range".to_string()))?;

    let outcome = solve_periods_to_target(
        profile.current_net_worth,
        profile.monthly_surplus(),
        rate,
        coast_number,
    )?;

    Ok(CoastFire {
        coast_number,
        fire_number_at_horizon: fire_number,
        outcome,
        coast_age: outcome
            .periods()
            .map(|p| u64::from(profile.current_age) + p.div_ceil(u64::from(MONTHS_PER_YEAR))),
    })
}

/// Barista calculation: accumulate half the FIRE number and cover the
/// remaining spending with part-time income.
pub fn barista_fire(
    profile: &FinancialProfile,
    assumptions: &GrowthAssumptions,
    scenario: &FireScenario,
) -> Result<BaristaFire> {
    scenario.validate()?;
    let rate = assumptions.periodic_rate()?;
    let fire_number = required_net_worth(scenario.target_monthly_spend, scenario.withdrawal_rate)?;

    let out_of_range =
        || Error::InvalidScenario("barista amount is out of range".to_string());
    let barista_number = fire_number.mul_ratio(dec!(0.5)).ok_or_else(out_of_range)?;

    // Annual safe withdrawal on the barista portfolio, spread over 12 months.
    let monthly_withdrawal_ratio = scenario.withdrawal_rate / Decimal::from(MONTHS_PER_YEAR);
    let passive_monthly_income = barista_number
        .mul_ratio(monthly_withdrawal_ratio)
        .ok_or_else(out_of_range)?;
    let part_time_income_needed = scenario.target_monthly_spend - passive_monthly_income;

    let outcome = solve_periods_to_target(
        profile.current_net_worth,
        profile.monthly_surplus(),
        rate,
        barista_number,
    )?;

    Ok(BaristaFire {
        barista_number,
        passive_monthly_income,
        part_time_income_needed,
        outcome,
        barista_age: outcome
            .periods()
            .map(|p| u64::from(profile.current_age) + p.div_ceil(u64::from(MONTHS_PER_YEAR))),
    })
}
