//! Financial profile module - domain models and validation.

mod profiles_model;

pub use profiles_model::{FinancialProfile, RiskProfile};

#[cfg(test)]
mod profiles_model_tests;
