//! Range-limited exploration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::{ZoneGraph, ZoneId};

/// A zone reached by [`reachable_within`] and the range left on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReachedZone {
    pub zone: ZoneId,
    pub remaining: f64,
}

/// Depth-first exploration from `start` that only follows a road while the
/// remaining `autonomy` covers its base cost.
///
/// Returns zones in visit order, `start` first with the full budget. Each
/// zone is reported once, with the range left along the first branch that
/// reached it. Closed roads are skipped.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::graph::ZoneGraph;
/// use u_relief::models::{Road, Severity, Zone};
/// use u_relief::search::reachable_within;
///
/// let mut g = ZoneGraph::new();
/// let z = |n: &str| Zone::new(n, Coordinate::new(0.0, 0.0), Severity::Low, 1000);
/// let a = g.add_zone(z("A"));
/// let b = g.add_zone(z("B"));
/// let c = g.add_zone(z("C"));
/// g.add_connection(a, b, Road::new(30.0).expect("valid")).expect("ok");
/// g.add_connection(b, c, Road::new(30.0).expect("valid")).expect("ok");
///
/// let reached = reachable_within(&g, a, 50.0).expect("start exists");
/// let zones: Vec<_> = reached.iter().map(|r| r.zone).collect();
/// assert_eq!(zones, vec![a, b]);
/// assert_eq!(reached[1].remaining, 20.0);
/// ```
pub fn reachable_within(
    graph: &ZoneGraph,
    start: ZoneId,
    autonomy: f64,
) -> Result<Vec<ReachedZone>> {
    graph.ensure_zone(start)?;

    let mut stack = vec![(start, autonomy)];
    let mut seen = HashSet::new();
    let mut reached = Vec::new();

    while let Some((zone, remaining)) = stack.pop() {
        if !seen.insert(zone) {
            continue;
        }
        reached.push(ReachedZone { zone, remaining });

        for conn in graph.connections(zone)?.iter().rev() {
            let road = graph.road(conn.road);
            if road.is_available() && remaining >= road.cost() && !seen.contains(&conn.neighbor) {
                stack.push((conn.neighbor, remaining - road.cost()));
            }
        }
    }

    debug!(%start, autonomy, reached = reached.len(), "range exploration done");
    Ok(reached)
}
