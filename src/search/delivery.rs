//! Replays a found route with a vehicle, delivering supplies along the way.

use tracing::{debug, info, warn};

use super::frontier::road_cost;
use super::{DeliveryStep, Exhaustion, RouteOutcome, SearchResult};
use crate::error::{ReliefError, Result};
use crate::graph::{ZoneGraph, ZoneId};
use crate::heuristics::supplies_to_leave;
use crate::models::Vehicle;

/// Drives `vehicle` along `search.path`, hop by hop.
///
/// Each hop burns [`Vehicle::autonomy_cost`] of the great-circle hop length.
/// Each zone reached (not the start) receives its
/// [`supplies_to_leave`] quota. The route stops early when:
///
/// - the next hop needs more range than is left: the vehicle is stranded with
///   zero range and drops all remaining cargo where it stands;
/// - the cargo left is below the quota of the zone just reached: all of it is
///   dropped there.
///
/// In both cases the path, roads and cost of the returned search are cut back
/// to the zones actually reached. A search without a path is returned as is.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::graph::ZoneGraph;
/// use u_relief::models::{Road, Severity, Vehicle, VehicleType, Zone};
/// use u_relief::search::{bfs, deliver};
///
/// let mut g = ZoneGraph::new();
/// let z = |n: &str, lon: f64| Zone::new(n, Coordinate::new(0.0, lon), Severity::High, 20_000);
/// let a = g.add_zone(z("A", 0.0));
/// let b = g.add_zone(z("B", 0.01));
/// g.add_connection(a, b, Road::new(2.0).expect("valid")).expect("ok");
///
/// let route = bfs(&g, a, b).expect("zones exist");
/// let mut car = Vehicle::new(VehicleType::Car, 100.0, 500.0).expect("valid");
/// let outcome = deliver(&mut g, route, &mut car).expect("path zones exist");
/// assert!(outcome.is_complete());
/// assert_eq!(outcome.steps.len(), 1);
/// assert!((g.zone(b).expect("exists").supplies() - outcome.steps[0].delivered).abs() < 1e-9);
/// ```
pub fn deliver(
    graph: &mut ZoneGraph,
    search: SearchResult,
    vehicle: &mut Vehicle,
) -> Result<RouteOutcome> {
    let Some(path) = search.path.clone() else {
        return Ok(RouteOutcome {
            search,
            steps: Vec::new(),
            exhaustion: None,
        });
    };

    let roads = search.roads.clone();
    let mut steps = Vec::with_capacity(roads.len());
    for (i, (&road, hop)) in roads.iter().zip(path.windows(2)).enumerate() {
        let (from, to) = (hop[0], hop[1]);
        let distance = graph.distance(from, to)?;
        let required = vehicle.autonomy_cost(distance);
        let remaining = vehicle.autonomy();

        if !vehicle.consume_autonomy(required) {
            drop_remaining(graph, vehicle, from)?;
            let exhaustion = Exhaustion::Autonomy {
                zone: from,
                required,
                remaining,
            };
            warn!(zone = %from, required, remaining, "vehicle ran out of range");
            return Ok(truncate(graph, search, i, steps, exhaustion));
        }

        let zone = graph.try_zone(to)?;
        let quota = supplies_to_leave(zone);
        let cargo = vehicle.load();
        let delivered = if vehicle.unload(quota) {
            receive(graph, to, quota)?;
            quota
        } else {
            drop_remaining(graph, vehicle, to)?
        };
        steps.push(DeliveryStep {
            zone: to,
            road,
            distance,
            autonomy_cost: required,
            autonomy_after: vehicle.autonomy(),
            delivered,
            load_after: vehicle.load(),
        });

        if delivered < quota {
            let exhaustion = Exhaustion::Load {
                zone: to,
                required: quota,
                remaining: cargo,
            };
            warn!(zone = %to, required = quota, remaining = cargo, "vehicle ran out of cargo");
            return Ok(truncate(graph, search, i + 1, steps, exhaustion));
        }
        debug!(
            zone = %to,
            delivered,
            autonomy = vehicle.autonomy(),
            load = vehicle.load(),
            "delivered"
        );
    }

    info!(
        stops = steps.len(),
        autonomy = vehicle.autonomy(),
        load = vehicle.load(),
        "delivery complete"
    );
    Ok(RouteOutcome {
        search,
        steps,
        exhaustion: None,
    })
}

fn receive(graph: &mut ZoneGraph, zone: ZoneId, amount: f64) -> Result<()> {
    graph
        .zone_mut(zone)
        .ok_or(ReliefError::ZoneNotFound(zone))?
        .receive_supplies(amount);
    Ok(())
}

fn drop_remaining(graph: &mut ZoneGraph, vehicle: &mut Vehicle, zone: ZoneId) -> Result<f64> {
    let left = vehicle.unload_all();
    receive(graph, zone, left)?;
    Ok(left)
}

/// Keeps the first `hops` roads of the search, i.e. `hops + 1` zones.
fn truncate(
    graph: &ZoneGraph,
    mut search: SearchResult,
    hops: usize,
    steps: Vec<DeliveryStep>,
    exhaustion: Exhaustion,
) -> RouteOutcome {
    if let Some(path) = search.path.as_mut() {
        path.truncate(hops + 1);
    }
    search.roads.truncate(hops);
    search.cost = road_cost(graph, &search.roads);
    RouteOutcome {
        search,
        steps,
        exhaustion: Some(exhaustion),
    }
}
