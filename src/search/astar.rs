//! A* search in two modes.
//!
//! - [`astar`]: `f = g + d`, with `g` the sum of base road costs and `d` the
//!   great-circle distance to the goal. Optimal when every road costs at least
//!   the straight-line distance between its ends.
//! - [`weighted_astar`]: `f = g + w_d·d + w_h·priority + w_e·edge`, with `g`
//!   accumulated from [`edge_cost`], so vehicle restrictions prune roads. The
//!   road network is perturbed every few frontier pops, and an optional
//!   vehicle then drives the route (see [`RouteOutcome`]).
//!
//! Perturbation can change road costs after a zone's `g` has been settled.
//! Settled values are not revisited; the search keeps working with the costs
//! it saw when it relaxed each road.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::delivery::deliver;
use super::frontier::{road_cost, Frontier, Parents};
use super::{RouteOutcome, SearchResult};
use crate::error::Result;
use crate::graph::{Perturbation, ZoneGraph, ZoneId};
use crate::heuristics::{edge_cost, GoalTable};
use crate::models::{Road, Vehicle, VehicleType};

/// Term weights for weighted A*.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AStarWeights {
    /// Weight of the distance-to-goal term.
    pub distance: f64,
    /// Weight of the zone priority term.
    pub zone: f64,
    /// Weight of the incoming road cost term.
    pub edge: f64,
}

impl Default for AStarWeights {
    fn default() -> Self {
        Self {
            distance: 0.5,
            zone: 0.3,
            edge: 0.2,
        }
    }
}

/// Options for [`weighted_astar`].
///
/// # Examples
///
/// ```
/// use u_relief::models::VehicleType;
/// use u_relief::search::{AStarWeights, WeightedAStarConfig};
///
/// let config = WeightedAStarConfig::default()
///     .with_perturb_every(5)
///     .with_vehicle_type(VehicleType::Drone);
/// assert_eq!(config.weights, AStarWeights::default());
/// assert_eq!(config.perturb_every, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedAStarConfig {
    pub weights: AStarWeights,
    /// Perturb the graph on every n-th frontier pop; 0 disables it.
    pub perturb_every: usize,
    /// Vehicle type used for road restrictions when no vehicle is passed.
    pub vehicle_type: Option<VehicleType>,
}

impl Default for WeightedAStarConfig {
    fn default() -> Self {
        Self {
            weights: AStarWeights::default(),
            perturb_every: 3,
            vehicle_type: None,
        }
    }
}

impl WeightedAStarConfig {
    /// Sets the scoring weights.
    pub fn with_weights(mut self, weights: AStarWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Perturbs the graph every `n` frontier pops; 0 disables.
    pub fn with_perturb_every(mut self, n: usize) -> Self {
        self.perturb_every = n;
        self
    }

    /// Sets the vehicle type used when no vehicle is passed.
    pub fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }
}

enum Scoring {
    Simple,
    Weighted {
        weights: AStarWeights,
        vehicle: Option<VehicleType>,
    },
}

impl Scoring {
    fn edge_weight(&self, road: &Road) -> f64 {
        match self {
            Scoring::Simple if road.is_available() => road.cost(),
            Scoring::Simple => f64::INFINITY,
            Scoring::Weighted { vehicle, .. } => edge_cost(road, *vehicle),
        }
    }

    fn priority(
        &self,
        table: &mut GoalTable,
        graph: &ZoneGraph,
        zone: ZoneId,
        g: f64,
        edge: f64,
    ) -> Result<f64> {
        let d = table.distance_to_goal(graph, zone)?;
        match self {
            Scoring::Simple => Ok(g + d),
            Scoring::Weighted { weights, .. } => Ok(g
                + weights.distance * d
                + weights.zone * table.priority(graph, zone)?
                + weights.edge * edge),
        }
    }
}

/// Read-only graph for simple mode, or a mutable one plus the perturbation
/// to apply on a schedule.
enum Access<'a> {
    Shared(&'a ZoneGraph),
    Perturbed {
        graph: &'a mut ZoneGraph,
        perturbation: &'a mut dyn Perturbation,
        every: usize,
    },
}

impl Access<'_> {
    fn graph(&self) -> &ZoneGraph {
        match self {
            Access::Shared(graph) => graph,
            Access::Perturbed { graph, .. } => graph,
        }
    }

    fn on_pop(&mut self, pops: usize) {
        if let Access::Perturbed {
            graph,
            perturbation,
            every,
        } = self
        {
            if *every > 0 && pops % *every == 0 {
                debug!(pops, "perturbing road network");
                perturbation.perturb(graph);
            }
        }
    }
}

/// A* with the straight-line distance heuristic over available roads.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::graph::ZoneGraph;
/// use u_relief::models::{Road, Severity, Zone};
/// use u_relief::search::astar;
///
/// let mut g = ZoneGraph::new();
/// let z = |n: &str, lon: f64| Zone::new(n, Coordinate::new(0.0, lon), Severity::Average, 5000);
/// let a = g.add_zone(z("A", 0.0));
/// let b = g.add_zone(z("B", 1.0));
/// let c = g.add_zone(z("C", 2.0));
/// g.add_connection(a, b, Road::new(120.0).expect("valid")).expect("ok");
/// g.add_connection(b, c, Road::new(120.0).expect("valid")).expect("ok");
/// g.add_connection(a, c, Road::new(500.0).expect("valid")).expect("ok");
///
/// let r = astar(&g, a, c).expect("zones exist");
/// assert_eq!(r.path, Some(vec![a, b, c]));
/// assert!((r.cost - 240.0).abs() < 1e-9);
/// ```
pub fn astar(graph: &ZoneGraph, start: ZoneId, goal: ZoneId) -> Result<SearchResult> {
    run(&mut Access::Shared(graph), start, goal, &Scoring::Simple)
}

/// Weighted, vehicle-aware A* with periodic road perturbation.
///
/// Road restrictions follow `vehicle`'s type, or `config.vehicle_type` when
/// no vehicle is given. With a vehicle, the best path found is then driven
/// hop by hop: each hop burns range and each zone reached receives its
/// supply quota. If range or cargo runs out, the remaining cargo is dropped
/// where the vehicle stops and the returned path ends there.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::graph::{NoPerturbation, ZoneGraph};
/// use u_relief::models::{Road, Severity, Vehicle, VehicleType, Zone};
/// use u_relief::search::{weighted_astar, WeightedAStarConfig};
///
/// let mut g = ZoneGraph::new();
/// let z = |n: &str, lon: f64| Zone::new(n, Coordinate::new(0.0, lon), Severity::Low, 2000);
/// let a = g.add_zone(z("A", 0.0));
/// let b = g.add_zone(z("B", 0.01));
/// g.add_connection(a, b, Road::new(3.0).expect("valid")).expect("ok");
///
/// let mut truck = Vehicle::new(VehicleType::Truck, 500.0, 100.0).expect("valid");
/// let outcome = weighted_astar(
///     &mut g, a, b, &WeightedAStarConfig::default(), Some(&mut truck), &mut NoPerturbation,
/// ).expect("zones exist");
/// assert!(outcome.is_complete());
/// assert!(truck.load() < 100.0);
/// assert!(g.zone(b).expect("exists").supplies() > 0.0);
/// ```
pub fn weighted_astar<P: Perturbation>(
    graph: &mut ZoneGraph,
    start: ZoneId,
    goal: ZoneId,
    config: &WeightedAStarConfig,
    vehicle: Option<&mut Vehicle>,
    perturbation: &mut P,
) -> Result<RouteOutcome> {
    let scoring = Scoring::Weighted {
        weights: config.weights,
        vehicle: vehicle
            .as_ref()
            .map(|v| v.vehicle_type())
            .or(config.vehicle_type),
    };
    let search = {
        let mut access = Access::Perturbed {
            graph: &mut *graph,
            perturbation,
            every: config.perturb_every,
        };
        run(&mut access, start, goal, &scoring)?
    };

    match vehicle {
        Some(vehicle) if search.is_found() => deliver(graph, search, vehicle),
        _ => Ok(RouteOutcome {
            search,
            steps: Vec::new(),
            exhaustion: None,
        }),
    }
}

fn run(
    access: &mut Access<'_>,
    start: ZoneId,
    goal: ZoneId,
    scoring: &Scoring,
) -> Result<SearchResult> {
    let mut table = {
        let graph = access.graph();
        graph.ensure_zone(start)?;
        GoalTable::new(graph, goal)?
    };
    if start == goal {
        return Ok(SearchResult::trivial(start));
    }

    let mut frontier = Frontier::new();
    let mut best_g: HashMap<ZoneId, f64> = HashMap::from([(start, 0.0)]);
    let mut expanded: HashMap<ZoneId, f64> = HashMap::new();
    let mut parents = Parents::new();
    let mut visited = BTreeSet::new();
    let mut pops = 0usize;

    let f_start = scoring.priority(&mut table, access.graph(), start, 0.0, 0.0)?;
    frontier.push(start, f_start, 0.0);

    while let Some((zone, g)) = frontier.pop() {
        pops += 1;
        access.on_pop(pops);
        let graph = access.graph();

        // Superseded by a cheaper push, or already expanded at least as cheaply.
        if best_g.get(&zone).is_some_and(|&best| g > best) {
            continue;
        }
        if expanded.get(&zone).is_some_and(|&done| done <= g) {
            continue;
        }
        visited.insert(zone);

        if zone == goal {
            let (path, roads) = parents.trace(start, goal);
            let cost = road_cost(graph, &roads);
            debug!(
                %start,
                %goal,
                hops = roads.len(),
                visited = visited.len(),
                g,
                cost,
                pops,
                "a* found path"
            );
            return Ok(SearchResult::found(path, roads, visited, cost));
        }
        expanded.insert(zone, g);

        for conn in graph.connections(zone)? {
            let w = scoring.edge_weight(graph.road(conn.road));
            if !w.is_finite() {
                continue;
            }
            let next_g = g + w;
            if best_g
                .get(&conn.neighbor)
                .is_some_and(|&best| best <= next_g)
            {
                continue;
            }
            best_g.insert(conn.neighbor, next_g);
            parents.set(conn.neighbor, zone, conn.road);
            let f = scoring.priority(&mut table, graph, conn.neighbor, next_g, w)?;
            frontier.push(conn.neighbor, f, next_g);
        }
    }

    debug!(%start, %goal, visited = visited.len(), pops, "a* found no path");
    Ok(SearchResult::no_path(visited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReliefError;
    use crate::graph::NoPerturbation;
    use crate::models::{Geography, Infrastructure};
    use crate::search::test_graphs::{diamond, two_islands, zone};

    #[test]
    fn test_astar_cheapest_path() {
        let (g, ids) = diamond();
        let r = astar(&g, ids[0], ids[3]).expect("ok");
        assert_eq!(r.path, Some(vec![ids[0], ids[1], ids[3]]));
        assert!((r.cost - 2.0).abs() < 1e-9);
        assert_eq!(r.roads.len(), 2);
    }

    #[test]
    fn test_astar_skips_closed_roads() {
        let (mut g, ids) = diamond();
        let ab = g.connections(ids[0]).expect("ok")[0].road;
        g.road_mut(ab).set_availability(false);
        let r = astar(&g, ids[0], ids[3]).expect("ok");
        // a-c-d = 1 + 5 beats a-d = 100
        assert_eq!(r.path, Some(vec![ids[0], ids[2], ids[3]]));
        assert!((r.cost - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_astar_no_path() {
        let (g, left, right) = two_islands();
        let r = astar(&g, left[0], right[1]).expect("ok");
        assert!(r.path.is_none());
        assert!(r.cost.is_infinite());
        assert_eq!(r.visited, left.iter().copied().collect());
    }

    #[test]
    fn test_astar_start_is_goal() {
        let (g, ids) = diamond();
        let r = astar(&g, ids[3], ids[3]).expect("ok");
        assert_eq!(r.path, Some(vec![ids[3]]));
        assert_eq!(r.cost, 0.0);
    }

    #[test]
    fn test_astar_unknown_zone() {
        let (g, ids) = diamond();
        let ghost = ZoneId::new(77);
        assert_eq!(astar(&g, ids[0], ghost).unwrap_err(), ReliefError::ZoneNotFound(ghost));
        assert_eq!(astar(&g, ghost, ids[0]).unwrap_err(), ReliefError::ZoneNotFound(ghost));
    }

    #[test]
    fn test_astar_parallel_edges_uses_cheaper() {
        let mut g = ZoneGraph::new();
        let a = g.add_zone(zone("A", 0.0, 0.0));
        let b = g.add_zone(zone("B", 0.0, 0.001));
        g.add_connection(a, b, Road::new(9.0).expect("valid")).expect("ok");
        let cheap = g.add_connection(a, b, Road::new(4.0).expect("valid")).expect("ok");
        let r = astar(&g, a, b).expect("ok");
        assert_eq!(r.roads, vec![cheap]);
        assert!((r.cost - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_truck_avoids_mountains() {
        let (mut g, ids) = diamond();
        let ab = g.connections(ids[0]).expect("ok")[0].road;
        *g.road_mut(ab) = Road::new(1.0).expect("valid").with_geography(Geography::Mountainous);

        let config = WeightedAStarConfig::default()
            .with_perturb_every(0)
            .with_vehicle_type(VehicleType::Truck);
        let out = weighted_astar(&mut g, ids[0], ids[3], &config, None, &mut NoPerturbation)
            .expect("ok");
        assert!(!out.search.roads.contains(&ab));
        assert_eq!(out.search.path, Some(vec![ids[0], ids[2], ids[3]]));
        assert!(out.steps.is_empty());
        assert!(out.is_complete());
    }

    #[test]
    fn test_weighted_drone_ignores_closures() {
        let (mut g, ids) = diamond();
        for road in g.roads_mut() {
            road.set_availability(false);
        }
        let config = WeightedAStarConfig::default()
            .with_perturb_every(0)
            .with_vehicle_type(VehicleType::Drone);
        let out = weighted_astar(&mut g, ids[0], ids[3], &config, None, &mut NoPerturbation)
            .expect("ok");
        assert!(out.search.is_found());

        let car = WeightedAStarConfig::default()
            .with_perturb_every(0)
            .with_vehicle_type(VehicleType::Car);
        let out = weighted_astar(&mut g, ids[0], ids[3], &car, None, &mut NoPerturbation)
            .expect("ok");
        assert!(!out.search.is_found());
    }

    #[test]
    fn test_weighted_drone_avoids_highways() {
        let mut g = ZoneGraph::new();
        let a = g.add_zone(zone("A", 0.0, 0.0));
        let b = g.add_zone(zone("B", 0.0, 0.001));
        g.add_connection(
            a,
            b,
            Road::new(1.0).expect("valid").with_infrastructure(Infrastructure::Highway),
        )
        .expect("ok");
        let config = WeightedAStarConfig::default().with_vehicle_type(VehicleType::Drone);
        let out = weighted_astar(&mut g, a, b, &config, None, &mut NoPerturbation).expect("ok");
        assert!(out.search.path.is_none());
        assert_eq!(out.search.visited, BTreeSet::from([a]));
    }

    #[test]
    fn test_weighted_perturbs_every_third_pop() {
        let mut g = ZoneGraph::new();
        let ids: Vec<ZoneId> = (0..6)
            .map(|i| g.add_zone(zone(&format!("Z{i}"), 0.0, i as f64 * 0.001)))
            .collect();
        for w in ids.windows(2) {
            g.add_connection(w[0], w[1], Road::new(1.0).expect("valid")).expect("ok");
        }
        let mut calls = 0usize;
        let mut counter = |_: &mut ZoneGraph| calls += 1;
        let out = weighted_astar(
            &mut g,
            ids[0],
            ids[5],
            &WeightedAStarConfig::default(),
            None,
            &mut counter,
        )
        .expect("ok");
        // A chain needs exactly six pops: start, four inner zones, goal.
        assert!(out.search.is_found());
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_weighted_perturbation_can_cut_route() {
        let mut g = ZoneGraph::new();
        let ids: Vec<ZoneId> = (0..5)
            .map(|i| g.add_zone(zone(&format!("Z{i}"), 0.0, i as f64 * 0.001)))
            .collect();
        for w in ids.windows(2) {
            g.add_connection(w[0], w[1], Road::new(1.0).expect("valid")).expect("ok");
        }
        let mut storm = |graph: &mut ZoneGraph| {
            for road in graph.roads_mut() {
                road.set_availability(false);
            }
        };
        let config = WeightedAStarConfig::default().with_vehicle_type(VehicleType::Car);
        let out = weighted_astar(&mut g, ids[0], ids[4], &config, None, &mut storm).expect("ok");
        // Roads close on the third pop, before Z2 is expanded.
        assert!(out.search.path.is_none());
        assert_eq!(out.search.visited, BTreeSet::from([ids[0], ids[1], ids[2]]));
    }

    #[test]
    fn test_weights_serde() {
        let config = WeightedAStarConfig::default().with_vehicle_type(VehicleType::Truck);
        let json = serde_json::to_string(&config).expect("serialize");
        let back: WeightedAStarConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
