//! The relief graph and the collaborators that build or disturb it.
//!
//! - [`ZoneGraph`] — zones joined by shared, undirected roads
//! - [`generate_random_graph`] — seeded synthetic graphs
//! - [`Perturbation`] — road volatility injected into weighted search
//! - [`NameGenerator`] — sequential zone names

mod generator;
mod names;
mod perturb;
mod zone_graph;

pub use generator::{generate_random_graph, RandomGraphConfig};
pub use names::NameGenerator;
pub use perturb::{
    perturb_roads, NoPerturbation, Perturbation, RandomPerturbation, DEFAULT_AVAILABILITY,
};
pub use zone_graph::{Connection, RoadId, ZoneGraph, ZoneId};
