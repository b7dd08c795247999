//! Scenario comparison across the lifestyle catalog.

use log::{debug, warn};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::growth::GrowthAssumptions;
use crate::money::Money;
use crate::profiles::FinancialProfile;

use super::model::{
    FireScenario, ProjectionResult, ScenarioComparison, ScenarioOutcome,
};
use super::solver::{required_contribution, solve_periods_to_target};
use super::target::required_net_worth;

/// Projects a single scenario for a profile: resolves the FIRE number and
/// solves the months until it is reached, contributing the profile's full
/// monthly surplus.
pub fn project_scenario(
    profile: &FinancialProfile,
    assumptions: &GrowthAssumptions,
    scenario: &FireScenario,
) -> Result<ProjectionResult> {
    let rate = assumptions.periodic_rate()?;
    run_scenario(profile, rate, scenario)
}

/// Like [`project_scenario`], but also answers the inverse query: the level
/// monthly contribution that would reach the FIRE number within
/// `horizon_periods` months.
pub fn project_scenario_with_horizon(
    profile: &FinancialProfile,
    assumptions: &GrowthAssumptions,
    scenario: &FireScenario,
    horizon_periods: u64,
) -> Result<ProjectionResult> {
    let rate = assumptions.periodic_rate()?;
    let mut result = run_scenario(profile, rate, scenario)?;
    result.required_monthly_contribution = Some(required_contribution(
        profile.current_net_worth,
        rate,
        result.fire_number,
        horizon_periods,
    )?);
    Ok(result)
}

/// Runs the solver once per catalog scenario with identical balance,
/// contribution, and rate, varying only the target.
///
/// Scenarios are solved in parallel; the returned order always matches the
/// catalog order. A scenario that fails validation occupies its slot as
/// [`ScenarioOutcome::Invalid`] without aborting the rest of the batch.
/// The shared growth assumption, by contrast, is common to every scenario,
/// so an invalid rate fails the comparison as a whole.
pub fn compare_scenarios(
    profile: &FinancialProfile,
    assumptions: &GrowthAssumptions,
    catalog: &[FireScenario],
) -> Result<Vec<ScenarioComparison>> {
    let rate = assumptions.periodic_rate()?;

    debug!(
        "comparing {} scenarios at periodic rate {}",
        catalog.len(),
        rate
    );

    let comparisons = catalog
        .par_iter()
        .map(|scenario| {
            let outcome = match run_scenario(profile, rate, scenario) {
                Ok(result) => ScenarioOutcome::Projection(result),
                Err(err) => {
                    warn!("scenario '{}' skipped: {}", scenario.name, err);
                    ScenarioOutcome::Invalid {
                        reason: err.to_string(),
                    }
                }
            };
            ScenarioComparison {
                scenario: scenario.clone(),
                outcome,
            }
        })
        .collect();

    Ok(comparisons)
}

fn run_scenario(
    profile: &FinancialProfile,
    periodic_rate: Decimal,
    scenario: &FireScenario,
) -> Result<ProjectionResult> {
    scenario.validate()?;
    let fire_number = required_net_worth(scenario.target_monthly_spend, scenario.withdrawal_rate)?;
    let outcome = solve_periods_to_target(
        profile.current_net_worth,
        contribution_for(profile),
        periodic_rate,
        fire_number,
    )?;
    Ok(ProjectionResult {
        scenario: scenario.name.clone(),
        fire_number,
        outcome,
        required_monthly_contribution: None,
    })
}

/// The contribution a profile makes each month: its full surplus. Negative
/// when the profile spends more than it earns.
fn contribution_for(profile: &FinancialProfile) -> Money {
    profile.monthly_surplus()
}
