//! Fireplan Core - FIRE projection engine.
//!
//! This crate contains the calculation core for the Fireplan dashboard:
//! exact money arithmetic, expense aggregation, growth-rate conversion,
//! the time-to-independence solver, scenario comparison, and rule-based
//! spending insights.
//!
//! The engine is pure: every operation takes immutable inputs and returns a
//! freshly constructed result. Persistence, ingestion, and presentation are
//! the callers' concern and never interleave with the arithmetic here.

pub mod constants;
pub mod errors;
pub mod expenses;
pub mod fire;
pub mod growth;
pub mod insights;
pub mod money;
pub mod profiles;

// Re-export common types from the fire module
pub use fire::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

pub use money::Money;
