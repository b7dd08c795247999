//! Tests for financial profile models.

use rust_decimal_macros::dec;

use crate::money::Money;
use crate::profiles::{FinancialProfile, RiskProfile};

fn profile(income_major: i64, expenses_major: i64) -> FinancialProfile {
    FinancialProfile::new(
        30,
        Money::from_major(income_major),
        Money::from_major(expenses_major),
        Money::from_major(50_000),
        RiskProfile::Moderate,
    )
    .unwrap()
}

#[test]
fn test_savings_rate() {
    let p = profile(8_000, 4_800);
    assert_eq!(p.monthly_surplus(), Money::from_major(3_200));
    assert_eq!(p.savings_rate(), Some(dec!(0.4)));
}

#[test]
fn test_negative_savings_rate_is_valid() {
    let p = profile(4_000, 5_000);
    assert_eq!(p.monthly_surplus(), Money::from_major(-1_000));
    assert_eq!(p.savings_rate(), Some(dec!(-0.25)));
}

#[test]
fn test_zero_income_has_no_savings_rate() {
    let p = profile(0, 1_000);
    assert_eq!(p.savings_rate(), None);
}

#[test]
fn test_negative_income_rejected() {
    let result = FinancialProfile::new(
        30,
        Money::from_major(-1),
        Money::ZERO,
        Money::ZERO,
        RiskProfile::Conservative,
    );
    assert!(result.is_err());
}

#[test]
fn test_negative_net_worth_allowed() {
    let result = FinancialProfile::new(
        30,
        Money::from_major(5_000),
        Money::from_major(4_000),
        Money::from_major(-20_000),
        RiskProfile::Aggressive,
    );
    assert!(result.is_ok());
}

#[test]
fn test_risk_profile_default_returns() {
    assert_eq!(
        RiskProfile::Conservative.default_annual_return(),
        dec!(0.08)
    );
    assert_eq!(RiskProfile::Moderate.default_annual_return(), dec!(0.10));
    assert_eq!(RiskProfile::Aggressive.default_annual_return(), dec!(0.12));
}

#[test]
fn test_risk_profile_round_trip() {
    for p in [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ] {
        assert_eq!(p.to_string().parse::<RiskProfile>().unwrap(), p);
    }
}
