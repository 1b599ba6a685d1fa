//! Small fixture graphs shared by the search tests.

use crate::geo::Coordinate;
use crate::graph::{ZoneGraph, ZoneId};
use crate::models::{Road, Severity, Zone};

pub(crate) fn zone(name: &str, lat: f64, lon: f64) -> Zone {
    Zone::new(name, Coordinate::new(lat, lon), Severity::Average, 5000)
}

fn road(cost: f64) -> Road {
    Road::new(cost).expect("valid cost")
}

/// `a` joined to `d` directly (cost 100) and via `b` (1 + 1) or `c` (1 + 5).
///
/// Zones are a few hundred meters apart, so every road costs at least the
/// straight-line distance. Returns `[a, b, c, d]`; `a`'s third connection is
/// the direct road to `d`.
pub(crate) fn diamond() -> (ZoneGraph, Vec<ZoneId>) {
    let mut g = ZoneGraph::new();
    let ids = vec![
        g.add_zone(zone("a", 0.0, 0.0)),
        g.add_zone(zone("b", 0.001, 0.001)),
        g.add_zone(zone("c", -0.001, 0.001)),
        g.add_zone(zone("d", 0.0, 0.002)),
    ];
    for (x, y, cost) in [(0, 1, 1.0), (0, 2, 1.0), (0, 3, 100.0), (1, 3, 1.0), (2, 3, 5.0)] {
        g.add_connection(ids[x], ids[y], road(cost)).expect("zones exist");
    }
    (g, ids)
}

/// A three-zone chain and a separate two-zone chain.
pub(crate) fn two_islands() -> (ZoneGraph, Vec<ZoneId>, Vec<ZoneId>) {
    let mut g = ZoneGraph::new();
    let left: Vec<ZoneId> = (0..3)
        .map(|i| g.add_zone(zone(&format!("L{i}"), 0.0, i as f64 * 0.01)))
        .collect();
    let right: Vec<ZoneId> = (0..2)
        .map(|i| g.add_zone(zone(&format!("R{i}"), 1.0, i as f64 * 0.01)))
        .collect();
    for island in [&left, &right] {
        for w in island.windows(2) {
            g.add_connection(w[0], w[1], road(5.0)).expect("zones exist");
        }
    }
    (g, left, right)
}
