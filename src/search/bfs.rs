//! Breadth-first search over available roads.
//!
//! Finds a path with the fewest roads, not the cheapest one. Closed roads
//! are skipped regardless of vehicle.
//!
//! # Complexity
//!
//! O(V + E).

use std::collections::{BTreeSet, HashSet, VecDeque};

use tracing::debug;

use super::frontier::{road_cost, Parents};
use super::SearchResult;
use crate::error::Result;
use crate::graph::{ZoneGraph, ZoneId};

/// Finds a minimum-hop path from `start` to `goal`.
///
/// The reported cost is the sum of base road costs along the recovered path.
/// Fails with [`ReliefError::ZoneNotFound`](crate::error::ReliefError) if
/// either zone is not in the graph.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::graph::ZoneGraph;
/// use u_relief::models::{Road, Severity, Zone};
/// use u_relief::search::bfs;
///
/// let mut g = ZoneGraph::new();
/// let z = |n: &str, lon: f64| Zone::new(n, Coordinate::new(0.0, lon), Severity::Average, 5000);
/// let a = g.add_zone(z("A", 0.0));
/// let b = g.add_zone(z("B", 1.0));
/// let c = g.add_zone(z("C", 2.0));
/// g.add_connection(a, b, Road::new(1.0).expect("valid")).expect("ok");
/// g.add_connection(b, c, Road::new(1.0).expect("valid")).expect("ok");
/// g.add_connection(a, c, Road::new(50.0).expect("valid")).expect("ok");
///
/// let result = bfs(&g, a, c).expect("zones exist");
/// assert_eq!(result.path, Some(vec![a, c]));
/// assert_eq!(result.cost, 50.0);
/// ```
pub fn bfs(graph: &ZoneGraph, start: ZoneId, goal: ZoneId) -> Result<SearchResult> {
    graph.ensure_zone(start)?;
    graph.ensure_zone(goal)?;
    if start == goal {
        return Ok(SearchResult::trivial(start));
    }

    let mut queue = VecDeque::from([start]);
    let mut discovered = HashSet::from([start]);
    let mut parents = Parents::new();
    let mut visited = BTreeSet::new();

    while let Some(zone) = queue.pop_front() {
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
                "bfs found path"
            );
            return Ok(SearchResult::found(path, roads, visited, cost));
        }

        for conn in graph.connections(zone)? {
            if !graph.road(conn.road).is_available() {
                continue;
            }
            if discovered.insert(conn.neighbor) {
                parents.set(conn.neighbor, zone, conn.road);
                queue.push_back(conn.neighbor);
            }
        }
    }

    debug!(%start, %goal, visited = visited.len(), "bfs found no path");
    Ok(SearchResult::no_path(visited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReliefError;
    use crate::models::Road;
    use crate::search::test_graphs::{diamond, two_islands, zone};

    #[test]
    fn test_bfs_fewest_hops() {
        let (g, ids) = diamond();
        // a-b-d costs 2 but a-d direct costs 100; BFS prefers the single hop.
        let r = bfs(&g, ids[0], ids[3]).expect("ok");
        assert_eq!(r.path, Some(vec![ids[0], ids[3]]));
        assert_eq!(r.hops(), Some(1));
        assert!((r.cost - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_bfs_skips_closed_roads() {
        let (mut g, ids) = diamond();
        let direct = g.connections(ids[0]).expect("ok")[2].road;
        g.road_mut(direct).set_availability(false);
        let r = bfs(&g, ids[0], ids[3]).expect("ok");
        assert_eq!(r.hops(), Some(2));
        assert_eq!(r.path.as_ref().map(|p| p[0]), Some(ids[0]));
        assert_eq!(r.path.as_ref().and_then(|p| p.last().copied()), Some(ids[3]));
    }

    #[test]
    fn test_bfs_start_is_goal() {
        let (g, ids) = diamond();
        let r = bfs(&g, ids[1], ids[1]).expect("ok");
        assert_eq!(r.path, Some(vec![ids[1]]));
        assert_eq!(r.cost, 0.0);
    }

    #[test]
    fn test_bfs_no_path() {
        let (g, left, right) = two_islands();
        let r = bfs(&g, left[0], right[0]).expect("ok");
        assert!(r.path.is_none());
        assert!(r.cost.is_infinite());
        assert_eq!(r.visited, left.iter().copied().collect());
    }

    #[test]
    fn test_bfs_unknown_zone() {
        let (g, ids) = diamond();
        let ghost = ZoneId::new(99);
        assert_eq!(bfs(&g, ghost, ids[0]).unwrap_err(), ReliefError::ZoneNotFound(ghost));
        assert_eq!(bfs(&g, ids[0], ghost).unwrap_err(), ReliefError::ZoneNotFound(ghost));
    }

    #[test]
    fn test_bfs_parallel_edges() {
        let mut g = ZoneGraph::new();
        let a = g.add_zone(zone("A", 0.0, 0.0));
        let b = g.add_zone(zone("B", 0.0, 1.0));
        g.add_connection(a, b, Road::new(5.0).expect("valid").with_availability(false))
            .expect("ok");
        g.add_connection(a, b, Road::new(7.0).expect("valid")).expect("ok");
        let r = bfs(&g, a, b).expect("ok");
        assert_eq!(r.path, Some(vec![a, b]));
        assert!((r.cost - 7.0).abs() < 1e-9);
    }
}
