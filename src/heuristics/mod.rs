//! Heuristic evaluators used by the search algorithms.
//!
//! - [`zone_priority`] — severity/population urgency of a zone
//! - [`supplies_to_leave`] — cargo quota for a zone
//! - [`similarity`] — severity/population gap between a zone and the goal
//! - [`edge_cost`] — vehicle-aware road cost, infinite when forbidden
//! - [`GoalTable`] — per-search distance-to-goal and priority cache

mod edge;
mod goal;
mod zone;

pub use edge::{
    condition_weight, edge_cost, geography_weight, infrastructure_weight, VehicleConstraints,
};
pub use goal::GoalTable;
pub use zone::{
    similarity, supplies_to_leave, zone_priority, POPULATION_WEIGHT, SEVERITY_WEIGHT,
    SIMILARITY_POPULATION_WEIGHT, SIMILARITY_SEVERITY_WEIGHT, SUPPLY_SCALE_KG,
};
