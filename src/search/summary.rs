//! Comparison figures for a finished search.

use serde::Serialize;

use super::SearchResult;
use crate::graph::ZoneGraph;

/// How much of the graph a search touched and what its path costs.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::graph::ZoneGraph;
/// use u_relief::models::{Road, Severity, Zone};
/// use u_relief::search::{bfs, SearchSummary};
///
/// let mut g = ZoneGraph::new();
/// let z = |n: &str, lon: f64| Zone::new(n, Coordinate::new(0.0, lon), Severity::Low, 1000);
/// let a = g.add_zone(z("A", 0.0));
/// let b = g.add_zone(z("B", 0.01));
/// g.add_zone(z("C", 0.02));
/// g.add_connection(a, b, Road::new(4.0).expect("valid")).expect("ok");
///
/// let s = SearchSummary::new(&g, &bfs(&g, a, b).expect("zones exist"));
/// assert_eq!(s.solution_depth, 1);
/// assert_eq!(s.avg_cost_per_edge, 4.0);
/// assert!((s.zones_visited_percentage - 200.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSummary {
    pub zones_visited: usize,
    /// Roads on the path; 0 without one.
    pub solution_depth: usize,
    /// Infinite when no path was found.
    pub solution_cost: f64,
    /// 0 for an empty or missing path.
    pub avg_cost_per_edge: f64,
    /// Share of the graph's zones visited, in percent.
    pub zones_visited_percentage: f64,
}

impl SearchSummary {
    /// Summarizes `result` against the graph it was run on.
    pub fn new(graph: &ZoneGraph, result: &SearchResult) -> Self {
        let zones_visited = result.visited.len();
        let solution_depth = result.hops().unwrap_or(0);
        let avg_cost_per_edge = if solution_depth > 0 {
            result.cost / solution_depth as f64
        } else {
            0.0
        };
        let zones_visited_percentage = match graph.num_zones() {
            0 => 0.0,
            n => zones_visited as f64 / n as f64 * 100.0,
        };
        Self {
            zones_visited,
            solution_depth,
            solution_cost: result.cost,
            avg_cost_per_edge,
            zones_visited_percentage,
        }
    }
}
