//! Synthetic relief graphs for experiments and tests.

use std::ops::{Range, RangeInclusive};

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{NameGenerator, ZoneGraph, ZoneId, DEFAULT_AVAILABILITY};
use crate::geo::Coordinate;
use crate::models::{Conditions, Geography, Infrastructure, Road, Severity, Zone};

/// Parameters for [`generate_random_graph`].
///
/// # Examples
///
/// ```
/// use u_relief::graph::RandomGraphConfig;
///
/// let config = RandomGraphConfig::new(20)
///     .with_edge_probability(0.2)
///     .with_cost_range(5.0..50.0);
/// assert_eq!(config.zones, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomGraphConfig {
    /// Number of zones to create.
    pub zones: usize,
    /// Probability that any given pair of zones is connected.
    pub edge_probability: f64,
    /// Uniform range for road base cost.
    pub cost_range: Range<f64>,
    /// Probability that a road starts out available.
    pub availability: f64,
    /// Uniform range for zone population.
    pub population_range: RangeInclusive<u64>,
}

impl RandomGraphConfig {
    /// Default parameters for `zones` zones.
    pub fn new(zones: usize) -> Self {
        Self {
            zones,
            edge_probability: 0.5,
            cost_range: 10.0..100.0,
            availability: DEFAULT_AVAILABILITY,
            population_range: 1000..=100_000,
        }
    }

    /// Sets the chance that any given pair of zones gets a road.
    pub fn with_edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = p;
        self
    }

    /// Sets the range road costs are drawn from.
    pub fn with_cost_range(mut self, range: Range<f64>) -> Self {
        self.cost_range = range;
        self
    }

    /// Sets the chance that a generated road starts open.
    pub fn with_availability(mut self, p: f64) -> Self {
        self.availability = p;
        self
    }

    /// Sets the range zone populations are drawn from.
    pub fn with_population_range(mut self, range: RangeInclusive<u64>) -> Self {
        self.population_range = range;
        self
    }
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Builds a random graph in which every zone has at least one road
/// (given two or more zones).
///
/// Zones get uniform random coordinates, severities and populations; each
/// pair is joined with probability `edge_probability`. A final pass links
/// every still-isolated zone to a random other zone. Deterministic for a
/// seeded `rng`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_relief::graph::{generate_random_graph, RandomGraphConfig};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let graph = generate_random_graph(&RandomGraphConfig::new(12), &mut rng);
/// assert_eq!(graph.num_zones(), 12);
/// assert!(graph.zone_ids().all(|z| !graph.is_isolated(z)));
/// ```
pub fn generate_random_graph<R: Rng + ?Sized>(
    config: &RandomGraphConfig,
    rng: &mut R,
) -> ZoneGraph {
    let mut graph = ZoneGraph::new();
    let names = NameGenerator::new();

    let zones: Vec<ZoneId> = names
        .take(config.zones)
        .map(|name| {
            let coordinate = Coordinate::new(
                rng.random_range(-90.0..=90.0),
                rng.random_range(-180.0..=180.0),
            );
            let severity = *Severity::ALL.choose(rng).unwrap_or(&Severity::Average);
            let population = random_population(config, rng);
            graph.add_zone(Zone::new(name, coordinate, severity, population))
        })
        .collect();

    let edge_p = probability(config.edge_probability, 0.5);
    for i in 0..zones.len() {
        for j in (i + 1)..zones.len() {
            if rng.random_bool(edge_p) {
                let road = random_road(config, rng);
                graph.link(zones[i], zones[j], road);
            }
        }
    }

    let mut patched = 0usize;
    for (i, &zone) in zones.iter().enumerate() {
        if zones.len() < 2 || !graph.is_isolated(zone) {
            continue;
        }
        // Pick among the other n-1 zones by skipping over `i`.
        let mut k = rng.random_range(0..zones.len() - 1);
        if k >= i {
            k += 1;
        }
        let road = random_road(config, rng);
        graph.link(zone, zones[k], road);
        patched += 1;
    }

    debug!(
        zones = graph.num_zones(),
        roads = graph.num_roads(),
        patched,
        "generated random relief graph"
    );
    graph
}

fn random_population<R: Rng + ?Sized>(config: &RandomGraphConfig, rng: &mut R) -> u64 {
    if config.population_range.is_empty() {
        return *config.population_range.start();
    }
    rng.random_range(config.population_range.clone())
}

fn random_road<R: Rng + ?Sized>(config: &RandomGraphConfig, rng: &mut R) -> Road {
    let cost = if config.cost_range.is_empty() {
        config.cost_range.start
    } else {
        rng.random_range(config.cost_range.clone())
    };
    let conditions = *Conditions::ALL.choose(rng).unwrap_or(&Conditions::Good);
    let geography = *Geography::ALL.choose(rng).unwrap_or(&Geography::Plain);
    let infrastructure = *Infrastructure::ALL
        .choose(rng)
        .unwrap_or(&Infrastructure::National);
    let available = rng.random_bool(probability(config.availability, DEFAULT_AVAILABILITY));

    Road::new(cost)
        .unwrap_or_default()
        .with_conditions(conditions)
        .with_geography(geography)
        .with_infrastructure(infrastructure)
        .with_availability(available)
}

fn probability(p: f64, fallback: f64) -> f64 {
    if p.is_nan() {
        fallback
    } else {
        p.clamp(0.0, 1.0)
    }
}
