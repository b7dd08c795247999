//! Insight domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_CATEGORY_INCREASE_THRESHOLD, DEFAULT_TARGET_SAVINGS_RATE};
use crate::expenses::Category;
use crate::money::Money;

/// What kind of reaction an insight calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightKind {
    /// A spending pattern worth a look.
    Attention,
    /// The profile is doing well; no action needed.
    Praise,
    /// A concrete step with a quantified amount.
    Actionable,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Attention => "attention",
            InsightKind::Praise => "praise",
            InsightKind::Actionable => "actionable",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One qualitative recommendation derived from a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsightTag {
    pub kind: InsightKind,
    /// Set when the insight concerns one spending category.
    pub category: Option<Category>,
    pub message: String,
    /// Monthly amount still missing toward the savings target, for
    /// actionable savings insights.
    pub shortfall: Option<Money>,
}

/// Thresholds the insight rules evaluate against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsightThresholds {
    /// Category increase vs. the prior period that triggers attention.
    pub category_increase: Decimal,
    /// Savings rate the profile aims to sustain.
    pub target_savings_rate: Decimal,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            category_increase: DEFAULT_CATEGORY_INCREASE_THRESHOLD,
            target_savings_rate: DEFAULT_TARGET_SAVINGS_RATE,
        }
    }
}

/// Caution about the shape of a savings plan, independent of any single
/// reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlanWarning {
    /// The plan relies on a savings rate that is hard to sustain.
    SavingsRateStrain { rate: Decimal },
    /// The target sits further out than most plans survive unchanged.
    LongHorizon { years: u64 },
    /// Independence arrives past the traditional retirement age.
    LateIndependence { age: u64 },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::SavingsRateStrain { rate } => write!(
                f,
                "A sustained savings rate of {}% may strain day-to-day quality of life",
                (rate * Decimal::ONE_HUNDRED).normalize()
            ),
            PlanWarning::LongHorizon { years } => write!(
                f,
                "A {years}-year horizon is long; revisit the plan as circumstances change"
            ),
            PlanWarning::LateIndependence { age } => write!(
                f,
                "Independence at age {age} lands past the traditional retirement age"
            ),
        }
    }
}
