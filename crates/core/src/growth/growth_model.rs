//! Growth assumption models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ANNUAL_INFLATION;
use crate::errors::Result;
use crate::profiles::RiskProfile;

use super::growth_service;

/// Return and inflation assumptions behind a projection.
///
/// Compounding is monthly; rates are annual ratios (0.10 means 10%).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAssumptions {
    /// Expected annual nominal return.
    pub annual_return: Decimal,
    /// Expected annual inflation.
    pub annual_inflation: Decimal,
}

impl GrowthAssumptions {
    #[must_use]
    pub fn new(annual_return: Decimal, annual_inflation: Decimal) -> Self {
        Self {
            annual_return,
            annual_inflation,
        }
    }

    /// Default assumptions for a risk profile.
    #[must_use]
    pub fn for_profile(profile: RiskProfile) -> Self {
        Self {
            annual_return: profile.default_annual_return(),
            annual_inflation: DEFAULT_ANNUAL_INFLATION,
        }
    }

    /// Equivalent monthly compounding rate for the annual return.
    pub fn periodic_rate(&self) -> Result<Decimal> {
        growth_service::periodic_rate(self.annual_return)
    }

    /// Annual return net of inflation.
    pub fn real_annual_return(&self) -> Result<Decimal> {
        growth_service::real_annual_return(self.annual_return, self.annual_inflation)
    }
}

impl Default for GrowthAssumptions {
    fn default() -> Self {
        Self::for_profile(RiskProfile::default())
    }
}
