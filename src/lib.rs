//! # u-relief
//!
//! Route search for disaster-relief logistics: zones with severity and
//! population, roads with terrain and condition, and vehicles with limited
//! range and cargo.
//!
//! ## Modules
//!
//! - [`geo`] — Coordinates and great-circle distance
//! - [`models`] — Domain model types (Zone, Road, Vehicle)
//! - [`graph`] — Zone graph, random generation, road perturbation
//! - [`heuristics`] — Zone priority and vehicle-aware edge cost
//! - [`search`] — BFS, DFS, greedy, A* and weighted A* with delivery
//! - [`error`] — Error type shared by graph and search operations
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_relief::graph::{generate_random_graph, RandomGraphConfig, RandomPerturbation, ZoneId};
//! use u_relief::models::{Vehicle, VehicleType};
//! use u_relief::search::{astar, weighted_astar, WeightedAStarConfig};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut graph = generate_random_graph(&RandomGraphConfig::new(12), &mut rng);
//! let (start, goal) = (ZoneId::new(0), ZoneId::new(11));
//!
//! let plain = astar(&graph, start, goal).expect("zones exist");
//! assert!(plain.visited.contains(&start));
//!
//! let mut drone = Vehicle::new(VehicleType::Drone, 5_000.0, 50.0).expect("valid");
//! let mut weather = RandomPerturbation::new(StdRng::seed_from_u64(8));
//! let outcome = weighted_astar(
//!     &mut graph,
//!     start,
//!     goal,
//!     &WeightedAStarConfig::default(),
//!     Some(&mut drone),
//!     &mut weather,
//! )
//! .expect("zones exist");
//! assert!(drone.load() <= 50.0);
//! if let Some(path) = &outcome.search.path {
//!     assert_eq!(path[0], start);
//! }
//! ```

pub mod error;
pub mod geo;
pub mod graph;
pub mod heuristics;
pub mod models;
pub mod search;

pub use error::{ReliefError, Result};
