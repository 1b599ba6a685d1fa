//! Road-network volatility applied while a weighted search runs.
//!
//! Weather and damage change roads mid-operation. A [`Perturbation`] is
//! handed to [`weighted_astar`](crate::search::weighted_astar) explicitly,
//! so a seeded RNG (or [`NoPerturbation`]) makes the run reproducible.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use super::ZoneGraph;

/// Default probability that a re-rolled road stays available.
pub const DEFAULT_AVAILABILITY: f64 = 0.7;

/// Mutates a graph in place between search steps.
pub trait Perturbation {
    /// Applies one round of changes to `graph`.
    fn perturb(&mut self, graph: &mut ZoneGraph);
}

/// Leaves the graph untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPerturbation;

impl Perturbation for NoPerturbation {
    fn perturb(&mut self, _graph: &mut ZoneGraph) {}
}

impl<F> Perturbation for F
where
    F: FnMut(&mut ZoneGraph),
{
    fn perturb(&mut self, graph: &mut ZoneGraph) {
        self(graph)
    }
}

/// Re-rolls every road's conditions (uniformly) and availability
/// (available with probability `availability`).
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_relief::graph::{Perturbation, RandomPerturbation, ZoneGraph};
///
/// let mut graph = ZoneGraph::new();
/// let mut weather = RandomPerturbation::new(StdRng::seed_from_u64(7));
/// weather.perturb(&mut graph);
/// ```
#[derive(Debug, Clone)]
pub struct RandomPerturbation<R> {
    rng: R,
    availability: f64,
}

impl<R: Rng> RandomPerturbation<R> {
    /// Uses the default 70% availability.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            availability: DEFAULT_AVAILABILITY,
        }
    }

    /// Sets the probability that a road stays available, clamped to `[0, 1]`.
    pub fn with_availability(mut self, availability: f64) -> Self {
        self.availability = availability;
        self
    }
}

impl<R: Rng> Perturbation for RandomPerturbation<R> {
    fn perturb(&mut self, graph: &mut ZoneGraph) {
        perturb_roads(graph, &mut self.rng, self.availability);
    }
}

/// Re-rolls conditions and availability of every road in `graph`.
pub fn perturb_roads<R: Rng + ?Sized>(graph: &mut ZoneGraph, rng: &mut R, availability: f64) {
    let p = if availability.is_nan() {
        DEFAULT_AVAILABILITY
    } else {
        availability.clamp(0.0, 1.0)
    };
    let mut closed = 0usize;
    for road in graph.roads_mut() {
        if let Some(&conditions) = crate::models::Conditions::ALL.choose(rng) {
            road.set_conditions(conditions);
        }
        let open = rng.random_bool(p);
        road.set_availability(open);
        if !open {
            closed += 1;
        }
    }
    debug!(roads = graph.num_roads(), closed, "re-rolled road conditions");
}
