//! Expense aggregation over category and period.

use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::money::Money;

use super::expenses_model::{Category, CategoryTotal, ExpenseRecord, Period, PeriodSummary};

/// Sums outflows per category for the given period.
fn outflows_by_category(records: &[ExpenseRecord], period: Period) -> HashMap<Category, Money> {
    let mut totals: HashMap<Category, Money> = HashMap::new();
    for record in records {
        if !record.is_outflow() || !period.contains(record.date) {
            continue;
        }
        *totals.entry(record.category.clone()).or_insert(Money::ZERO) += record.amount.abs();
    }
    totals
}

/// Groups records by category for `period`, pairing each category with its
/// total from the preceding period.
///
/// Only outflows count toward totals; inflows are ignored here. The percent
/// change is `None` whenever the prior-period total is exactly zero, so a
/// new category never produces a division by zero. Categories active only
/// in the prior period are included with a zero current total.
///
/// The result is deterministically ordered: descending current total, then
/// category identifier.
pub fn aggregate_expenses(records: &[ExpenseRecord], period: Period) -> Vec<CategoryTotal> {
    let current = outflows_by_category(records, period);
    let prior = outflows_by_category(records, period.previous());

    debug!(
        "aggregating {} records for {}: {} current categories, {} prior",
        records.len(),
        period,
        current.len(),
        prior.len()
    );

    let mut categories: Vec<Category> = current.keys().chain(prior.keys()).cloned().collect();
    categories.sort_unstable();
    categories.dedup();

    let mut totals: Vec<CategoryTotal> = categories
        .into_iter()
        .map(|category| {
            let total = current.get(&category).copied().unwrap_or(Money::ZERO);
            let prior_total = prior.get(&category).copied().unwrap_or(Money::ZERO);
            let percent_change = if prior_total.is_zero() {
                None
            } else {
                Some((total - prior_total).to_decimal() / prior_total.to_decimal())
            };
            CategoryTotal {
                category,
                period,
                total,
                prior_total,
                percent_change,
            }
        })
        .collect();

    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    totals
}

/// Fraction of income left after expenses, or `None` when income is zero.
///
/// Negative rates are valid: they report a period that spent more than it
/// earned.
#[must_use]
pub fn savings_rate(income: Money, total_expenses: Money) -> Option<Decimal> {
    if income.is_zero() {
        return None;
    }
    Some((income - total_expenses).to_decimal() / income.to_decimal())
}

/// Builds the period totals consumed by the insight generator.
#[must_use]
pub fn period_summary(
    records: &[ExpenseRecord],
    period: Period,
    monthly_income: Money,
) -> PeriodSummary {
    let total_expenses: Money = records
        .iter()
        .filter(|r| r.is_outflow() && period.contains(r.date))
        .map(|r| r.amount.abs())
        .sum();

    PeriodSummary {
        period,
        monthly_income,
        total_expenses,
        savings_rate: savings_rate(monthly_income, total_expenses),
    }
}
