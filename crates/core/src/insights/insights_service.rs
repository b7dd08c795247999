//! Rule evaluation that turns aggregated spending into insight tags.
//!
//! Evaluation is deterministic: the same inputs always produce the same
//! tags in the same order. Category insights come first, in aggregate
//! order, followed by the savings-rate insight.

use log::debug;
use rust_decimal::Decimal;

use crate::constants::{LONG_HORIZON_YEARS, SAVINGS_RATE_STRAIN_THRESHOLD};
use crate::expenses::{CategoryTotal, PeriodSummary};
use crate::fire::ProjectionResult;
use crate::profiles::FinancialProfile;

use super::insights_model::{InsightKind, InsightTag, InsightThresholds, PlanWarning};

fn percent(ratio: Decimal) -> Decimal {
    (ratio * Decimal::ONE_HUNDRED).round_dp(1).normalize()
}

/// Evaluates the insight rules over one period's aggregation.
///
/// A category whose spending rose past the configured threshold gets an
/// attention tag. The savings rate gets praise when it meets the target, or
/// an actionable tag naming the monthly shortfall when it does not; with no
/// savings rate (zero income) no savings tag is emitted.
#[must_use]
pub fn generate_insights(
    totals: &[CategoryTotal],
    summary: &PeriodSummary,
    thresholds: &InsightThresholds,
) -> Vec<InsightTag> {
    let mut tags = Vec::new();

    for total in totals {
        let Some(change) = total.percent_change else {
            continue;
        };
        if change > thresholds.category_increase {
            tags.push(InsightTag {
                kind: InsightKind::Attention,
                category: Some(total.category.clone()),
                message: format!(
                    "Spending on {} rose {}% versus the prior period ({} from {})",
                    total.category,
                    percent(change),
                    total.total,
                    total.prior_total
                ),
                shortfall: None,
            });
        }
    }

    if let Some(rate) = summary.savings_rate {
        if rate >= thresholds.target_savings_rate {
            tags.push(InsightTag {
                kind: InsightKind::Praise,
                category: None,
                message: format!(
                    "Savings rate of {}% meets the {}% target",
                    percent(rate),
                    percent(thresholds.target_savings_rate)
                ),
                shortfall: None,
            });
        } else if let Some(shortfall) = summary
            .monthly_income
            .mul_ratio(thresholds.target_savings_rate - rate)
        {
            tags.push(InsightTag {
                kind: InsightKind::Actionable,
                category: None,
                message: format!(
                    "Saving {} more per month reaches the {}% savings target",
                    shortfall,
                    percent(thresholds.target_savings_rate)
                ),
                shortfall: Some(shortfall),
            });
        }
    }

    debug!(
        "generated {} insight tags for {}",
        tags.len(),
        summary.period
    );
    tags
}

/// Deterministic cautions about the overall shape of a plan.
#[must_use]
pub fn plan_warnings(profile: &FinancialProfile, result: &ProjectionResult) -> Vec<PlanWarning> {
    let mut warnings = Vec::new();

    if let Some(rate) = profile.savings_rate() {
        if rate > SAVINGS_RATE_STRAIN_THRESHOLD {
            warnings.push(PlanWarning::SavingsRateStrain { rate });
        }
    }

    if let Some(years) = result.years_to_target() {
        if years > u64::from(LONG_HORIZON_YEARS) {
            warnings.push(PlanWarning::LongHorizon { years });
        }
        if let Some(age) = result.target_age(profile.current_age) {
            if age > u64::from(crate::constants::COAST_HORIZON_AGE) {
                warnings.push(PlanWarning::LateIndependence { age });
            }
        }
    }

    warnings
}
