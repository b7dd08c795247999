//! Tests for compounding-rate conversions.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::growth::{periodic_rate, real_annual_return, GrowthAssumptions};
use crate::profiles::RiskProfile;

#[test]
fn test_periodic_rate_compounds_back_to_annual() {
    for annual in [dec!(0.04), dec!(0.10), dec!(0.12), dec!(-0.05)] {
        let r = periodic_rate(annual).unwrap();
        let recompounded = (Decimal::ONE + r).powi(12) - Decimal::ONE;
        assert!(
            (recompounded - annual).abs() < dec!(0.0000001),
            "annual {annual}: got {recompounded}"
        );
    }
}

#[test]
fn test_periodic_rate_ten_percent_annual() {
    // 10% a year compounds from roughly 0.7974% a month.
    let r = periodic_rate(dec!(0.10)).unwrap();
    assert!((r - dec!(0.007974)).abs() < dec!(0.000001), "got {r}");
}

#[test]
fn test_periodic_rate_zero_is_zero() {
    assert_eq!(periodic_rate(Decimal::ZERO).unwrap(), Decimal::ZERO);
}

#[test]
fn test_periodic_rate_rejects_total_loss() {
    assert!(periodic_rate(dec!(-1)).is_err());
    assert!(periodic_rate(dec!(-1.5)).is_err());
}

#[test]
fn test_real_annual_return() {
    // (1.10 / 1.045) - 1
    let real = real_annual_return(dec!(0.10), dec!(0.045)).unwrap();
    assert!((real - dec!(0.052631)).abs() < dec!(0.000001), "got {real}");
}

#[test]
fn test_real_annual_return_rejects_degenerate_rates() {
    assert!(real_annual_return(dec!(-1), dec!(0.04)).is_err());
    assert!(real_annual_return(dec!(0.10), dec!(-1)).is_err());
}

#[test]
fn test_assumptions_for_profile() {
    let a = GrowthAssumptions::for_profile(RiskProfile::Aggressive);
    assert_eq!(a.annual_return, dec!(0.12));
    assert_eq!(a.annual_inflation, dec!(0.045));
}
