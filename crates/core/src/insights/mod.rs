//! Insights module - rule-based spending and plan recommendations.

mod insights_model;
mod insights_service;

pub use insights_model::{InsightKind, InsightTag, InsightThresholds, PlanWarning};
pub use insights_service::{generate_insights, plan_warnings};

#[cfg(test)]
mod insights_service_tests;
