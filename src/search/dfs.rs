//! Depth-first search over available roads.
//!
//! Iterative with an explicit stack, so path depth is bounded by memory, not
//! the call stack. Returns the first path found, which is neither the
//! cheapest nor the shortest in general.

use std::collections::BTreeSet;

use tracing::debug;

use super::frontier::{road_cost, Parents};
use super::SearchResult;
use crate::error::Result;
use crate::graph::{RoadId, ZoneGraph, ZoneId};

/// Finds the first path from `start` to `goal` in depth-first order.
///
/// Neighbors are explored in adjacency-list order, matching a recursive
/// traversal. Closed roads are skipped.
pub fn dfs(graph: &ZoneGraph, start: ZoneId, goal: ZoneId) -> Result<SearchResult> {
    graph.ensure_zone(start)?;
    graph.ensure_zone(goal)?;
    if start == goal {
        return Ok(SearchResult::trivial(start));
    }

    let mut stack: Vec<(ZoneId, Option<(ZoneId, RoadId)>)> = vec![(start, None)];
    let mut parents = Parents::new();
    let mut visited = BTreeSet::new();

    while let Some((zone, via)) = stack.pop() {
        if !visited.insert(zone) {
            continue;
        }
        if let Some((parent, road)) = via {
            parents.set(zone, parent, road);
        }
        if zone == goal {
            let (path, roads) = parents.trace(start, goal);
            let cost = road_cost(graph, &roads);
            debug!(
                %start,
                %goal,
                hops = roads.len(),
                visited = visited.len(),
                cost,
                "dfs found path"
            );
            return Ok(SearchResult::found(path, roads, visited, cost));
        }

        // Reversed so the first listed neighbor is popped first.
        for conn in graph.connections(zone)?.iter().rev() {
            if graph.road(conn.road).is_available() && !visited.contains(&conn.neighbor) {
                stack.push((conn.neighbor, Some((zone, conn.road))));
            }
        }
    }

    debug!(%start, %goal, visited = visited.len(), "dfs found no path");
    Ok(SearchResult::no_path(visited))
}
