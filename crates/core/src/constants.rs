//! Engine-wide constants and default assumptions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Minor units per major currency unit (cents per real).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Compounding periods per year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Default safe withdrawal rate (the 4% rule, i.e. the 25x multiplier).
pub const DEFAULT_WITHDRAWAL_RATE: Decimal = dec!(0.04);

/// Default annual inflation assumption.
pub const DEFAULT_ANNUAL_INFLATION: Decimal = dec!(0.045);

/// Default annual nominal returns per investment risk profile.
pub const CONSERVATIVE_ANNUAL_RETURN: Decimal = dec!(0.08);
pub const MODERATE_ANNUAL_RETURN: Decimal = dec!(0.10);
pub const AGGRESSIVE_ANNUAL_RETURN: Decimal = dec!(0.12);

/// Age used as the investment horizon for coast calculations.
pub const COAST_HORIZON_AGE: u32 = 65;

/// Category spending increase (vs. the prior period) that triggers an
/// attention insight.
pub const DEFAULT_CATEGORY_INCREASE_THRESHOLD: Decimal = dec!(0.15);

/// Savings rate a profile is expected to sustain.
pub const DEFAULT_TARGET_SAVINGS_RATE: Decimal = dec!(0.30);

/// Savings rate above which a plan is flagged as hard to sustain.
pub const SAVINGS_RATE_STRAIN_THRESHOLD: Decimal = dec!(0.70);

/// Projection horizon (in years) beyond which a plan is flagged.
pub const LONG_HORIZON_YEARS: u32 = 30;
