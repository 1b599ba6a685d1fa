//! Per-search heuristic side table.

use std::collections::HashMap;

use crate::error::{ReliefError, Result};
use crate::geo::Coordinate;
use crate::graph::{ZoneGraph, ZoneId};

use super::zone_priority;

/// Lazily computed straight-line distance-to-goal and zone priority, keyed by
/// zone.
///
/// One table belongs to one search invocation against one goal, so values
/// never leak between searches with different goals. The table does not
/// borrow the graph; zone positions do not change while a search runs.
#[derive(Debug, Clone)]
pub struct GoalTable {
    goal: ZoneId,
    goal_at: Coordinate,
    distance: HashMap<ZoneId, f64>,
    priority: HashMap<ZoneId, f64>,
}

impl GoalTable {
    /// Creates an empty table for `goal`.
    pub fn new(graph: &ZoneGraph, goal: ZoneId) -> Result<Self> {
        let goal_at = graph.try_zone(goal)?.coordinate();
        Ok(Self {
            goal,
            goal_at,
            distance: HashMap::new(),
            priority: HashMap::new(),
        })
    }

    /// Goal zone the table was built for.
    pub fn goal(&self) -> ZoneId {
        self.goal
    }

    /// Great-circle distance (km) from `zone` to the goal.
    pub fn distance_to_goal(&mut self, graph: &ZoneGraph, zone: ZoneId) -> Result<f64> {
        if let Some(&d) = self.distance.get(&zone) {
            return Ok(d);
        }
        let d = graph
            .zone(zone)
            .ok_or(ReliefError::InvalidHeuristicInput(zone))?
            .coordinate()
            .distance_to(&self.goal_at);
        self.distance.insert(zone, d);
        Ok(d)
    }

    /// [`zone_priority`] of `zone`.
    pub fn priority(&mut self, graph: &ZoneGraph, zone: ZoneId) -> Result<f64> {
        if let Some(&p) = self.priority.get(&zone) {
            return Ok(p);
        }
        let p = zone_priority(
            graph
                .zone(zone)
                .ok_or(ReliefError::InvalidHeuristicInput(zone))?,
        );
        self.priority.insert(zone, p);
        Ok(p)
    }
}
