//! Financial profile domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    AGGRESSIVE_ANNUAL_RETURN, CONSERVATIVE_ANNUAL_RETURN, MODERATE_ANNUAL_RETURN,
};
use crate::errors::{Error, Result};
use crate::money::Money;

/// Investment risk profile, mapped to a blended annual return assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RiskProfile {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Moderate => "moderate",
            RiskProfile::Aggressive => "aggressive",
        }
    }

    /// Default annual nominal return assumption for this profile.
    #[must_use]
    pub fn default_annual_return(&self) -> Decimal {
        match self {
            RiskProfile::Conservative => CONSERVATIVE_ANNUAL_RETURN,
            RiskProfile::Moderate => MODERATE_ANNUAL_RETURN,
            RiskProfile::Aggressive => AGGRESSIVE_ANNUAL_RETURN,
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(RiskProfile::Conservative),
            "moderate" => Ok(RiskProfile::Moderate),
            "aggressive" => Ok(RiskProfile::Aggressive),
            _ => Err(format!("Unknown risk profile: {s}")),
        }
    }
}

/// Immutable snapshot of a user's financial situation.
///
/// Expenses above income are valid: a negative savings rate is a reportable
/// state, not a validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    /// Age in whole years.
    pub current_age: u32,
    /// Net income per month.
    pub monthly_income: Money,
    /// Total spending per month.
    pub monthly_expenses: Money,
    /// Current net worth. May be negative (net debt).
    pub current_net_worth: Money,
    pub risk_profile: RiskProfile,
}

impl FinancialProfile {
    /// Builds a validated profile.
    ///
    /// Income and expenses must be non-negative; net worth may be negative.
    pub fn new(
        current_age: u32,
        monthly_income: Money,
        monthly_expenses: Money,
        current_net_worth: Money,
        risk_profile: RiskProfile,
    ) -> Result<Self> {
        if monthly_income.is_negative() {
            return Err(Error::InvalidProfile(format!(
                "monthly income must be non-negative, got {monthly_income}"
            )));
        }
        if monthly_expenses.is_negative() {
            return Err(Error::InvalidProfile(format!(
                "monthly expenses must be non-negative, got {monthly_expenses}"
            )));
        }
        Ok(Self {
            current_age,
            monthly_income,
            monthly_expenses,
            current_net_worth,
            risk_profile,
        })
    }

    /// Income left over each month after expenses. Negative when the
    /// profile spends more than it earns.
    #[must_use]
    pub fn monthly_surplus(&self) -> Money {
        self.monthly_income - self.monthly_expenses
    }

    /// Fraction of income saved each month, or `None` when income is zero.
    #[must_use]
    pub fn savings_rate(&self) -> Option<Decimal> {
        if self.monthly_income.is_zero() {
            return None;
        }
        Some(self.monthly_surplus().to_decimal() / self.monthly_income.to_decimal())
    }
}
