//! Zone-intrinsic priority and supply quotas.

use crate::models::{Severity, Zone};

const POPULATION_FLOOR: f64 = 1000.0;
const POPULATION_SPAN: f64 = 100_000.0 - POPULATION_FLOOR;

/// Weight of severity in the zone blend.
pub const SEVERITY_WEIGHT: f64 = 0.7;
/// Weight of population in the zone blend.
pub const POPULATION_WEIGHT: f64 = 0.3;
/// Supplies (kg) left at a zone whose blend score is 1.0.
pub const SUPPLY_SCALE_KG: f64 = 100.0;

fn severity_share(zone: &Zone) -> f64 {
    f64::from(zone.severity().value()) / f64::from(Severity::MAX)
}

fn population_share(zone: &Zone) -> f64 {
    ((zone.population() as f64 - POPULATION_FLOOR) / POPULATION_SPAN).clamp(0.0, 1.0)
}

/// Priority of a zone in roughly `[0, 1]`: `0.7 * severity/6 + 0.3 * population share`.
///
/// Higher means more urgent. This is a ranking signal, not a distance
/// estimate, so it is not admissible for A*.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::heuristics::zone_priority;
/// use u_relief::models::{Severity, Zone};
///
/// let z = Zone::new("A", Coordinate::new(0.0, 0.0), Severity::VeryHigh, 100_000);
/// assert!((zone_priority(&z) - 1.0).abs() < 1e-9);
/// ```
pub fn zone_priority(zone: &Zone) -> f64 {
    SEVERITY_WEIGHT * severity_share(zone) + POPULATION_WEIGHT * population_share(zone)
}

/// Kilograms of cargo a delivery should leave at `zone`.
///
/// The zone blend scaled to [`SUPPLY_SCALE_KG`]; depends only on the zone.
pub fn supplies_to_leave(zone: &Zone) -> f64 {
    zone_priority(zone) * SUPPLY_SCALE_KG
}

/// Weight of the severity gap in [`similarity`].
pub const SIMILARITY_SEVERITY_WEIGHT: f64 = 1.5;
/// Weight of the population gap in [`similarity`].
pub const SIMILARITY_POPULATION_WEIGHT: f64 = 0.5;

/// How unlike the goal `current` is: `1.5·|Δseverity| + 0.5·|Δpopulation|`.
///
/// Zero for a zone with the goal's severity and population. Lower values
/// are expanded first when used as a greedy heuristic.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::heuristics::similarity;
/// use u_relief::models::{Severity, Zone};
///
/// let at = Coordinate::new(0.0, 0.0);
/// let goal = Zone::new("G", at, Severity::High, 3000);
/// let here = Zone::new("H", at, Severity::Low, 1000);
/// assert_eq!(similarity(&here, &goal), 1.5 * 3.0 + 0.5 * 2000.0);
/// ```
pub fn similarity(current: &Zone, goal: &Zone) -> f64 {
    let severity_gap = f64::from(current.severity().value().abs_diff(goal.severity().value()));
    let population_gap = current.population().abs_diff(goal.population()) as f64;
    SIMILARITY_SEVERITY_WEIGHT * severity_gap + SIMILARITY_POPULATION_WEIGHT * population_gap
}
