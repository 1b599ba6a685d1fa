//! Search result and delivery outcome types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::graph::{RoadId, ZoneId};

/// Outcome of a single search.
///
/// `path == None` means the frontier ran dry before the goal was reached; in
/// that case `cost` is `f64::INFINITY` and `visited` holds every zone the
/// search expanded. `roads[i]` is the road taken from `path[i]` to
/// `path[i + 1]`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_relief::graph::ZoneId;
/// use u_relief::search::SearchResult;
///
/// let r = SearchResult::no_path(BTreeSet::from([ZoneId::new(0)]));
/// assert!(!r.is_found());
/// assert!(r.cost.is_infinite());
/// assert_eq!(r.hops(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Zones from start to goal inclusive, or `None` if unreachable.
    pub path: Option<Vec<ZoneId>>,
    /// Roads along `path`; one fewer than the zones.
    pub roads: Vec<RoadId>,
    /// Zones the search expanded.
    pub visited: BTreeSet<ZoneId>,
    /// Sum of base road costs along `path`.
    pub cost: f64,
}

impl SearchResult {
    /// A successful search.
    pub fn found(
        path: Vec<ZoneId>,
        roads: Vec<RoadId>,
        visited: BTreeSet<ZoneId>,
        cost: f64,
    ) -> Self {
        Self {
            path: Some(path),
            roads,
            visited,
            cost,
        }
    }

    /// The start is already the goal.
    pub fn trivial(start: ZoneId) -> Self {
        Self::found(vec![start], Vec::new(), BTreeSet::from([start]), 0.0)
    }

    /// The goal is unreachable from the start.
    pub fn no_path(visited: BTreeSet<ZoneId>) -> Self {
        Self {
            path: None,
            roads: Vec::new(),
            visited,
            cost: f64::INFINITY,
        }
    }

    /// Returns `true` if a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of roads on the path.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

/// Why a delivery stopped before reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Exhaustion {
    /// The next road needed more range than was left; the vehicle is
    /// stranded at `zone`.
    Autonomy {
        zone: ZoneId,
        /// Range the next road would have cost.
        required: f64,
        /// Range left before the attempt.
        remaining: f64,
    },
    /// The cargo left was below the quota for `zone`.
    Load {
        zone: ZoneId,
        /// Quota the zone should have received.
        required: f64,
        /// Cargo left on arrival.
        remaining: f64,
    },
}

impl Exhaustion {
    /// Zone where the vehicle stopped and dumped its remaining cargo.
    pub fn zone(&self) -> ZoneId {
        match *self {
            Exhaustion::Autonomy { zone, .. } | Exhaustion::Load { zone, .. } => zone,
        }
    }
}

/// One arrival during a delivery replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryStep {
    /// Zone reached.
    pub zone: ZoneId,
    /// Road travelled to reach it.
    pub road: RoadId,
    /// Great-circle length of the hop in kilometers.
    pub distance: f64,
    /// Range consumed by the hop.
    pub autonomy_cost: f64,
    /// Vehicle range after the hop.
    pub autonomy_after: f64,
    /// Cargo dropped at `zone`.
    pub delivered: f64,
    /// Vehicle cargo after the drop.
    pub load_after: f64,
}

/// Result of a weighted A* run, with the delivery replay when a vehicle was
/// supplied.
///
/// When `exhaustion` is set, `search.path` is truncated to the zones the
/// vehicle actually reached and `search.cost` covers only those roads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOutcome {
    pub search: SearchResult,
    /// Arrivals in order; empty without a vehicle.
    pub steps: Vec<DeliveryStep>,
    pub exhaustion: Option<Exhaustion>,
}

impl RouteOutcome {
    /// Returns `true` if the vehicle (if any) reached the goal.
    pub fn is_complete(&self) -> bool {
        self.search.is_found() && self.exhaustion.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial() {
        let z = ZoneId::new(3);
        let r = SearchResult::trivial(z);
        assert_eq!(r.path, Some(vec![z]));
        assert_eq!(r.hops(), Some(0));
        assert_eq!(r.cost, 0.0);
        assert!(r.visited.contains(&z));
    }

    #[test]
    fn test_no_path() {
        let r = SearchResult::no_path(BTreeSet::new());
        assert!(!r.is_found());
        assert!(r.roads.is_empty());
        assert!(r.cost.is_infinite());
    }

    #[test]
    fn test_exhaustion_zone() {
        let z = ZoneId::new(1);
        let e = Exhaustion::Load {
            zone: z,
            required: 5.0,
            remaining: 2.0,
        };
        assert_eq!(e.zone(), z);
    }

    #[test]
    fn test_serialize_found() {
        let r = SearchResult::trivial(ZoneId::new(0));
        let json = serde_json::to_string(&r).expect("serialize");
        let back: SearchResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, r);
    }
}
