//! FIRE module - targets, the projection solver, scenario comparison, and
//! growth projections.

mod comparator;
mod model;
mod projections;
mod solver;
mod target;

pub use comparator::{compare_scenarios, project_scenario, project_scenario_with_horizon};
pub use model::{
    default_catalog, BaristaFire, CoastFire, FireScenario, ProjectionOutcome, ProjectionPoint,
    ProjectionResult, ScenarioComparison, ScenarioOutcome,
};
pub use projections::{barista_fire, coast_fire, project_growth};
pub use solver::{future_value, required_contribution, solve_periods_to_target};
pub use target::required_net_worth;
