//! Expense domain models.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Error, Result, ValidationError};
use crate::money::Money;

/// Identifier used when a record has no recognized category.
const OTHER_CATEGORY: &str = "other";

/// Spending category as an opaque identifier with an "other" fallback.
///
/// The category list is open-ended and owned by the caller; the engine only
/// groups by it and never interprets specific values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Normalizes the identifier; blank input falls back to "other".
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Self::other();
        }
        Self(trimmed.to_lowercase())
    }

    #[must_use]
    pub fn other() -> Self {
        Self(OTHER_CATEGORY.to_string())
    }

    #[must_use]
    pub fn is_other(&self) -> bool {
        self.0 == OTHER_CATEGORY
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Calendar month used as the aggregation period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "month must be in 1..=12, got {month}"
            ))));
        }
        Ok(Self { year, month })
    }

    /// Period containing the given date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The immediately preceding calendar month.
    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// A dated inflow or outflow. Negative amounts are outflows (spending),
/// positive amounts are inflows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: Category,
    pub payment_method: Option<String>,
    pub note: Option<String>,
}

impl ExpenseRecord {
    /// Builds a validated record. The amount must be non-zero.
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        payment_method: Option<String>,
        note: Option<String>,
    ) -> Result<Self> {
        if amount.is_zero() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "expense amount must be non-zero".to_string(),
            )));
        }
        Ok(Self {
            date,
            amount,
            category,
            payment_method,
            note,
        })
    }

    /// True when the record is spending (negative amount).
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount.is_negative()
    }
}

/// Spending for one category in one period, with the prior-period total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: Category,
    pub period: Period,
    /// Outflow in the period, as a positive amount.
    pub total: Money,
    /// Outflow in the immediately preceding period.
    pub prior_total: Money,
    /// `(total - prior) / prior`, or `None` when the prior total is zero.
    pub percent_change: Option<Decimal>,
}

/// Per-period totals used by the insight generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub period: Period,
    pub monthly_income: Money,
    /// Total outflow in the period, as a positive amount.
    pub total_expenses: Money,
    /// `(income - expenses) / income`, or `None` when income is zero.
    pub savings_rate: Option<Decimal>,
}
