//! Expenses module - records, periods, and category aggregation.

mod expenses_model;
mod expenses_service;

pub use expenses_model::{Category, CategoryTotal, ExpenseRecord, Period, PeriodSummary};
pub use expenses_service::{aggregate_expenses, period_summary, savings_rate};
