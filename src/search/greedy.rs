//! Greedy best-first search.
//!
//! Always expands the frontier zone that looks best by heuristic alone,
//! ignoring the cost already paid. Fast, but not optimal.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::frontier::{road_cost, Frontier, Parents};
use super::SearchResult;
use crate::error::{ReliefError, Result};
use crate::graph::{ZoneGraph, ZoneId};
use crate::heuristics::{similarity, GoalTable};
use crate::models::Zone;

/// Heuristic that orders the greedy frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GreedyHeuristic {
    /// Nearest to the goal (great-circle distance) first.
    #[default]
    Distance,
    /// Most urgent zone ([`zone_priority`](crate::heuristics::zone_priority)) first.
    Priority,
    /// Zone most like the goal ([`similarity`]) first.
    Similarity,
}

/// Greedy best-first search from `start` to `goal`.
///
/// Each zone enters the frontier at most once and is never re-expanded.
/// Ties go to the zone discovered first. Closed roads are skipped. The
/// reported cost is the sum of base road costs along the path found.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::graph::ZoneGraph;
/// use u_relief::models::{Road, Severity, Zone};
/// use u_relief::search::{greedy, GreedyHeuristic};
///
/// let mut g = ZoneGraph::new();
/// let z = |n: &str, lon: f64| Zone::new(n, Coordinate::new(0.0, lon), Severity::Average, 5000);
/// let a = g.add_zone(z("A", 0.0));
/// let b = g.add_zone(z("B", 1.0));
/// let c = g.add_zone(z("C", 2.0));
/// g.add_connection(a, b, Road::new(150.0).expect("valid")).expect("ok");
/// g.add_connection(b, c, Road::new(150.0).expect("valid")).expect("ok");
///
/// let r = greedy(&g, a, c, GreedyHeuristic::Distance).expect("zones exist");
/// assert_eq!(r.path, Some(vec![a, b, c]));
/// ```
pub fn greedy(
    graph: &ZoneGraph,
    start: ZoneId,
    goal: ZoneId,
    heuristic: GreedyHeuristic,
) -> Result<SearchResult> {
    match heuristic {
        GreedyHeuristic::Similarity => greedy_with(graph, start, goal, similarity),
        GreedyHeuristic::Distance | GreedyHeuristic::Priority => {
            graph.ensure_zone(start)?;
            let mut table = GoalTable::new(graph, goal)?;
            expand(graph, start, goal, |zone| match heuristic {
                GreedyHeuristic::Priority => Ok(-table.priority(graph, zone)?),
                _ => table.distance_to_goal(graph, zone),
            })
        }
    }
}

/// Greedy best-first search ordered by a caller-supplied `heuristic(zone, goal)`.
///
/// Lower values are expanded first. Otherwise behaves like [`greedy`].
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::graph::ZoneGraph;
/// use u_relief::models::{Road, Severity, Zone};
/// use u_relief::search::greedy_with;
///
/// let mut g = ZoneGraph::new();
/// let at = Coordinate::new(0.0, 0.0);
/// let a = g.add_zone(Zone::new("A", at, Severity::Low, 1000));
/// let b = g.add_zone(Zone::new("B", at, Severity::High, 1000));
/// let c = g.add_zone(Zone::new("C", at, Severity::VeryLow, 1000));
/// let goal = g.add_zone(Zone::new("Goal", at, Severity::High, 1000));
/// for (x, y) in [(a, b), (a, c), (b, goal), (c, goal)] {
///     g.add_connection(x, y, Road::new(1.0).expect("valid")).expect("ok");
/// }
///
/// // Most severe zone first.
/// let r = greedy_with(&g, a, goal, |z, _| -f64::from(z.severity().value())).expect("ok");
/// assert_eq!(r.path, Some(vec![a, b, goal]));
/// ```
pub fn greedy_with<H>(
    graph: &ZoneGraph,
    start: ZoneId,
    goal: ZoneId,
    mut heuristic: H,
) -> Result<SearchResult>
where
    H: FnMut(&Zone, &Zone) -> f64,
{
    graph.ensure_zone(start)?;
    let goal_zone = graph.try_zone(goal)?;
    expand(graph, start, goal, |zone| {
        let current = graph
            .zone(zone)
            .ok_or(ReliefError::InvalidHeuristicInput(zone))?;
        Ok(heuristic(current, goal_zone))
    })
}

fn expand<K>(graph: &ZoneGraph, start: ZoneId, goal: ZoneId, mut key: K) -> Result<SearchResult>
where
    K: FnMut(ZoneId) -> Result<f64>,
{
    if start == goal {
        return Ok(SearchResult::trivial(start));
    }

    let mut frontier = Frontier::new();
    let mut discovered = HashSet::from([start]);
    let mut parents = Parents::new();
    let mut visited = BTreeSet::new();
    frontier.push(start, key(start)?, 0.0);

    while let Some((zone, _)) = frontier.pop() {
        visited.insert(zone);
        if zone == goal {
            let (path, roads) = parents.trace(start, goal);
            let cost = road_cost(graph, &roads);
            debug!(
                %start,
                %goal,
                hops = roads.len(),
                visited = visited.len(),
                cost,
                "greedy found path"
            );
            return Ok(SearchResult::found(path, roads, visited, cost));
        }

        for conn in graph.connections(zone)? {
            if !graph.road(conn.road).is_available() {
                continue;
            }
            if discovered.insert(conn.neighbor) {
                parents.set(conn.neighbor, zone, conn.road);
                frontier.push(conn.neighbor, key(conn.neighbor)?, 0.0);
            }
        }
    }

    debug!(%start, %goal, visited = visited.len(), "greedy found no path");
    Ok(SearchResult::no_path(visited))
}
