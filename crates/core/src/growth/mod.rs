//! Growth model module - compounding-rate conversions.

mod growth_model;
mod growth_service;

pub use growth_model::GrowthAssumptions;
pub use growth_service::{periodic_rate, real_annual_return};

pub(crate) use growth_service::{ensure_periodic_rate, inflation_factor};

#[cfg(test)]
mod growth_service_tests;
