//! Domain models for FIRE targets, scenarios, and projection results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WITHDRAWAL_RATE, MONTHS_PER_YEAR};
use crate::errors::{Error, Result};
use crate::money::Money;

/// A target lifestyle in retirement: how much it spends per month and the
/// withdrawal rate assumed safe against the accumulated net worth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FireScenario {
    pub name: String,
    /// Spending per month in retirement. Must be positive.
    pub target_monthly_spend: Money,
    /// Safe withdrawal rate, strictly between 0 and 1.
    pub withdrawal_rate: Decimal,
}

impl FireScenario {
    /// Builds a validated custom scenario.
    pub fn new(
        name: impl Into<String>,
        target_monthly_spend: Money,
        withdrawal_rate: Decimal,
    ) -> Result<Self> {
        let scenario = Self {
            name: name.into(),
            target_monthly_spend,
            withdrawal_rate,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Minimal lifestyle: 3 000 per month.
    #[must_use]
    pub fn lean() -> Self {
        Self {
            name: "lean_fire".to_string(),
            target_monthly_spend: Money::from_major(3_000),
            withdrawal_rate: DEFAULT_WITHDRAWAL_RATE,
        }
    }

    /// Comfortable lifestyle: 6 000 per month.
    #[must_use]
    pub fn regular() -> Self {
        Self {
            name: "regular_fire".to_string(),
            target_monthly_spend: Money::from_major(6_000),
            withdrawal_rate: DEFAULT_WITHDRAWAL_RATE,
        }
    }

    /// Unrestricted lifestyle: 15 000 per month.
    #[must_use]
    pub fn fat() -> Self {
        Self {
            name: "fat_fire".to_string(),
            target_monthly_spend: Money::from_major(15_000),
            withdrawal_rate: DEFAULT_WITHDRAWAL_RATE,
        }
    }

    /// Checks the scenario invariants. Violations are rejected, never
    /// clamped.
    pub fn validate(&self) -> Result<()> {
        if !self.target_monthly_spend.is_positive() {
            return Err(Error::InvalidScenario(format!(
                "target monthly spending must be positive, got {}",
                self.target_monthly_spend
            )));
        }
        if self.withdrawal_rate <= Decimal::ZERO || self.withdrawal_rate >= Decimal::ONE {
            return Err(Error::InvalidScenario(format!(
                "withdrawal rate must be strictly between 0 and 1, got {}",
                self.withdrawal_rate
            )));
        }
        Ok(())
    }
}

/// The built-in lifestyle catalog, in canonical order.
#[must_use]
pub fn default_catalog() -> Vec<FireScenario> {
    vec![
        FireScenario::lean(),
        FireScenario::regular(),
        FireScenario::fat(),
    ]
}

/// Terminal result of a projection: the target is reached after a number of
/// whole months, or it is never reached.
///
/// `Unreachable` is a valid outcome, not an error, and is never encoded as
/// a large-but-finite period count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ProjectionOutcome {
    Reached { periods: u64 },
    Unreachable,
}

impl ProjectionOutcome {
    #[must_use]
    pub fn is_reached(&self) -> bool {
        matches!(self, ProjectionOutcome::Reached { .. })
    }

    /// Months until the target, when reachable.
    #[must_use]
    pub fn periods(&self) -> Option<u64> {
        match self {
            ProjectionOutcome::Reached { periods } => Some(*periods),
            ProjectionOutcome::Unreachable => None,
        }
    }
}

/// Outcome of projecting one scenario for one profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Name of the scenario this projection answers.
    pub scenario: String,
    /// Required net worth for the scenario (the FIRE number).
    pub fire_number: Money,
    pub outcome: ProjectionOutcome,
    /// Level monthly contribution that would reach the target over a fixed
    /// horizon; present only when the inverse query was requested.
    pub required_monthly_contribution: Option<Money>,
}

impl ProjectionResult {
    /// Whole years until the target (rounded up), when reachable.
    #[must_use]
    pub fn years_to_target(&self) -> Option<u64> {
        self.outcome
            .periods()
            .map(|p| p.div_ceil(u64::from(MONTHS_PER_YEAR)))
    }

    /// Age at which the target is reached, given the profile's current age.
    #[must_use]
    pub fn target_age(&self, current_age: u32) -> Option<u64> {
        self.years_to_target().map(|y| u64::from(current_age) + y)
    }
}

/// Per-scenario slot in a comparison. An invalid scenario is isolated here
/// instead of failing the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScenarioOutcome {
    Projection(ProjectionResult),
    Invalid { reason: String },
}

/// One entry of a scenario comparison, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub scenario: FireScenario,
    pub outcome: ScenarioOutcome,
}

/// One year of a growth projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Years from now, starting at 1.
    pub year: u32,
    pub age: u32,
    /// Balance at the end of the year.
    pub balance: Money,
    pub monthly_contribution: Money,
    /// Balance deflated back to today's purchasing power.
    pub inflation_adjusted: Money,
}

/// Coast calculation: the amount that, left invested with no further
/// contributions, grows into the FIRE number by the horizon age.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoastFire {
    pub coast_number: Money,
    /// The full FIRE number the coast amount grows into at the horizon.
    pub fire_number_at_horizon: Money,
    pub outcome: ProjectionOutcome,
    /// Age at which coasting can begin, when reachable.
    pub coast_age: Option<u64>,
}

/// Barista calculation: half the FIRE number plus part-time income covering
/// the spending the smaller portfolio cannot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BaristaFire {
    pub barista_number: Money,
    /// Monthly withdrawal the barista portfolio sustains.
    pub passive_monthly_income: Money,
    /// Part-time income needed to cover the rest of the target spending.
    pub part_time_income_needed: Money,
    pub outcome: ProjectionOutcome,
    pub barista_age: Option<u64>,
}
