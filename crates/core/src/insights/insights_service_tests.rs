//! Tests for insight generation.

use rust_decimal_macros::dec;

use crate::expenses::{Category, CategoryTotal, Period, PeriodSummary};
use crate::fire::{ProjectionOutcome, ProjectionResult};
use crate::insights::{
    generate_insights, plan_warnings, InsightKind, InsightThresholds, PlanWarning,
};
use crate::money::Money;
use crate::profiles::{FinancialProfile, RiskProfile};

fn period() -> Period {
    Period::new(2024, 1).unwrap()
}

fn total(category: &str, current_minor: i64, prior_minor: i64) -> CategoryTotal {
    let total = Money::from_minor_units(current_minor);
    let prior_total = Money::from_minor_units(prior_minor);
    let percent_change = if prior_total.is_zero() {
        None
    } else {
        Some((total - prior_total).to_decimal() / prior_total.to_decimal())
    };
    CategoryTotal {
        category: Category::new(category),
        period: period(),
        total,
        prior_total,
        percent_change,
    }
}

fn summary(income_major: i64, expenses_major: i64) -> PeriodSummary {
    let monthly_income = Money::from_major(income_major);
    let total_expenses = Money::from_major(expenses_major);
    PeriodSummary {
        period: period(),
        monthly_income,
        total_expenses,
        savings_rate: crate::expenses::savings_rate(monthly_income, total_expenses),
    }
}

#[test]
fn test_category_jump_gets_attention() {
    // Leisure up 18%, groceries up 9.1%: only leisure crosses 15%.
    let totals = vec![
        total("leisure", 53_100, 45_000),
        total("groceries", 109_100, 100_000),
    ];
    let tags = generate_insights(&totals, &summary(8_000, 4_800), &InsightThresholds::default());

    let attention: Vec<_> = tags
        .iter()
        .filter(|t| t.kind == InsightKind::Attention)
        .collect();
    assert_eq!(attention.len(), 1);
    assert_eq!(attention[0].category, Some(Category::new("leisure")));
    assert!(attention[0].message.contains("18%"));
}

#[test]
fn test_new_category_without_prior_is_not_flagged() {
    // No prior-period spending: percent change is undefined, not infinite.
    let totals = vec![total("travel", 500_000, 0)];
    let tags = generate_insights(&totals, &summary(8_000, 4_800), &InsightThresholds::default());
    assert!(tags.iter().all(|t| t.kind != InsightKind::Attention));
}

#[test]
fn test_savings_rate_at_target_gets_praise() {
    let tags = generate_insights(&[], &summary(8_000, 4_800), &InsightThresholds::default());
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].kind, InsightKind::Praise);
    assert!(tags[0].message.contains("40%"));
}

#[test]
fn test_savings_rate_below_target_names_the_shortfall() {
    // 10% saved against a 30% target on 8 000 income: 1 600 short.
    let tags = generate_insights(&[], &summary(8_000, 7_200), &InsightThresholds::default());
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].kind, InsightKind::Actionable);
    assert_eq!(tags[0].shortfall, Some(Money::from_major(1_600)));
}

#[test]
fn test_zero_income_emits_no_savings_tag() {
    let tags = generate_insights(&[], &summary(0, 1_000), &InsightThresholds::default());
    assert!(tags.is_empty());
}

#[test]
fn test_insights_are_deterministic_and_ordered() {
    let totals = vec![
        total("housing", 400_000, 300_000),
        total("leisure", 60_000, 40_000),
    ];
    let s = summary(8_000, 7_200);
    let thresholds = InsightThresholds::default();

    let first = generate_insights(&totals, &s, &thresholds);
    let second = generate_insights(&totals, &s, &thresholds);
    assert_eq!(first, second);

    // Category tags in aggregate order, savings tag last.
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].category, Some(Category::new("housing")));
    assert_eq!(first[1].category, Some(Category::new("leisure")));
    assert_eq!(first[2].kind, InsightKind::Actionable);
}

#[test]
fn test_custom_thresholds() {
    let thresholds = InsightThresholds {
        category_increase: dec!(0.50),
        target_savings_rate: dec!(0.10),
    };
    let totals = vec![total("leisure", 53_100, 45_000)]; // +18%
    let tags = generate_insights(&totals, &summary(8_000, 7_000), &thresholds);
    // 18% stays under the raised 50% bar; 12.5% saved beats the 10% target.
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].kind, InsightKind::Praise);
}

fn result_with_periods(periods: u64) -> ProjectionResult {
    ProjectionResult {
        scenario: "regular_fire".to_string(),
        fire_number: Money::from_major(1_800_000),
        outcome: ProjectionOutcome::Reached { periods },
        required_monthly_contribution: None,
    }
}

#[test]
fn test_plan_warnings_flag_long_horizons_and_late_ages() {
    let profile = FinancialProfile::new(
        40,
        Money::from_major(8_000),
        Money::from_major(6_000),
        Money::ZERO,
        RiskProfile::Moderate,
    )
    .unwrap();

    // 32 years out: both long and past age 65.
    let warnings = plan_warnings(&profile, &result_with_periods(32 * 12));
    assert!(warnings
        .iter()
        .any(|w| matches!(w, PlanWarning::LongHorizon { years: 32 })));
    assert!(warnings
        .iter()
        .any(|w| matches!(w, PlanWarning::LateIndependence { age: 72 })));
}

#[test]
fn test_plan_warnings_flag_strained_savings_rates() {
    let profile = FinancialProfile::new(
        30,
        Money::from_major(10_000),
        Money::from_major(2_000),
        Money::ZERO,
        RiskProfile::Moderate,
    )
    .unwrap();

    let warnings = plan_warnings(&profile, &result_with_periods(60));
    assert_eq!(
        warnings,
        vec![PlanWarning::SavingsRateStrain { rate: dec!(0.8) }]
    );
}

#[test]
fn test_plan_warnings_empty_for_a_comfortable_plan() {
    let profile = FinancialProfile::new(
        30,
        Money::from_major(8_000),
        Money::from_major(4_800),
        Money::from_major(50_000),
        RiskProfile::Moderate,
    )
    .unwrap();

    assert!(plan_warnings(&profile, &result_with_periods(200)).is_empty());
}
