//! Priority frontier and parent bookkeeping shared by the informed searches.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{RoadId, ZoneGraph, ZoneId};

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    seq: u64,
    zone: ZoneId,
    g: f64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

// Min-heap on priority; ties go to the earliest push.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary-heap frontier keyed by priority, FIFO among equal priorities.
///
/// A zone may be pushed several times; callers discard stale pops.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, zone: ZoneId, priority: f64, g: f64) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            zone,
            g,
        });
        self.seq += 1;
    }

    /// Removes the lowest-priority entry, returning the zone and its `g`.
    pub(crate) fn pop(&mut self) -> Option<(ZoneId, f64)> {
        self.heap.pop().map(|e| (e.zone, e.g))
    }
}

/// Back-pointers from each discovered zone to its predecessor and the road
/// used.
#[derive(Debug, Default)]
pub(crate) struct Parents(HashMap<ZoneId, (ZoneId, RoadId)>);

impl Parents {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, zone: ZoneId, parent: ZoneId, road: RoadId) {
        self.0.insert(zone, (parent, road));
    }

    /// Walks back from `goal` to `start`, returning zones and roads in
    /// forward order.
    pub(crate) fn trace(&self, start: ZoneId, goal: ZoneId) -> (Vec<ZoneId>, Vec<RoadId>) {
        let mut zones = vec![goal];
        let mut roads = Vec::new();
        let mut current = goal;
        while current != start {
            match self.0.get(&current) {
                Some(&(parent, road)) => {
                    roads.push(road);
                    zones.push(parent);
                    current = parent;
                }
                None => break,
            }
        }
        zones.reverse();
        roads.reverse();
        (zones, roads)
    }
}

/// Sum of base costs of `roads`.
pub(crate) fn road_cost(graph: &ZoneGraph, roads: &[RoadId]) -> f64 {
    roads.iter().map(|&r| graph.road(r).cost()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontier_min_first() {
        let mut f = Frontier::new();
        f.push(ZoneId::new(0), 3.0, 0.0);
        f.push(ZoneId::new(1), 1.0, 0.0);
        f.push(ZoneId::new(2), 2.0, 0.0);
        assert_eq!(f.pop().map(|p| p.0), Some(ZoneId::new(1)));
        assert_eq!(f.pop().map(|p| p.0), Some(ZoneId::new(2)));
        assert_eq!(f.pop().map(|p| p.0), Some(ZoneId::new(0)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_frontier_ties_fifo() {
        let mut f = Frontier::new();
        for i in [4, 2, 7] {
            f.push(ZoneId::new(i), 1.0, 0.0);
        }
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|p| p.0.index()).collect();
        assert_eq!(order, vec![4, 2, 7]);
    }

    #[test]
    fn test_frontier_infinite_last() {
        let mut f = Frontier::new();
        f.push(ZoneId::new(0), f64::INFINITY, 0.0);
        f.push(ZoneId::new(1), 1e300, 0.0);
        assert_eq!(f.pop().map(|p| p.0), Some(ZoneId::new(1)));
    }

    #[test]
    fn test_parents_trace() {
        let mut graph = ZoneGraph::new();
        let ids: Vec<ZoneId> = ["A", "B", "C"]
            .iter()
            .map(|n| {
                graph.add_zone(crate::models::Zone::new(
                    *n,
                    crate::geo::Coordinate::new(0.0, 0.0),
                    crate::models::Severity::Low,
                    1000,
                ))
            })
            .collect();
        let ab = graph
            .add_connection(ids[0], ids[1], crate::models::Road::new(2.0).expect("valid"))
            .expect("ok");
        let bc = graph
            .add_connection(ids[1], ids[2], crate::models::Road::new(3.0).expect("valid"))
            .expect("ok");

        let mut parents = Parents::new();
        parents.set(ids[1], ids[0], ab);
        parents.set(ids[2], ids[1], bc);

        let (zones, roads) = parents.trace(ids[0], ids[2]);
        assert_eq!(zones, ids);
        assert_eq!(roads, vec![ab, bc]);
        assert!((road_cost(&graph, &roads) - 5.0).abs() < 1e-9);
    }
}
