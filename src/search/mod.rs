//! Path search over the relief graph.
//!
//! | Search | Frontier | Optimal | Notes |
//! |--------|----------|---------|-------|
//! | [`bfs`] | FIFO queue | fewest roads | |
//! | [`dfs`] | stack | no | iterative |
//! | [`greedy`] | heap on heuristic | no | distance, priority, similarity or [`greedy_with`] |
//! | [`astar`] | heap on `g + d` | yes, with costs ≥ distance | |
//! | [`weighted_astar`] | heap on weighted sum | no | vehicle rules, perturbation, delivery |
//!
//! All searches return [`SearchResult`]; weighted A* wraps it in a
//! [`RouteOutcome`] with the delivery log.

mod astar;
mod bfs;
mod delivery;
mod dfs;
mod frontier;
mod greedy;
mod reach;
mod result;
mod summary;

#[cfg(test)]
pub(crate) mod test_graphs;

pub use astar::{astar, weighted_astar, AStarWeights, WeightedAStarConfig};
pub use bfs::bfs;
pub use delivery::deliver;
pub use dfs::dfs;
pub use greedy::{greedy, greedy_with, GreedyHeuristic};
pub use reach::{reachable_within, ReachedZone};
pub use result::{DeliveryStep, Exhaustion, RouteOutcome, SearchResult};
pub use summary::SearchSummary;
