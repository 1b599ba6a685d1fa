//! Vehicle-aware road traversal cost.
//!
//! Road restrictions per vehicle type are data ([`VehicleConstraints`]), so a
//! new vehicle kind means a new table entry, not new branches.

use crate::models::{Conditions, Geography, Infrastructure, Road, VehicleType};

/// Hard road restrictions for one kind of vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleConstraints {
    /// Closed roads are still usable (the vehicle flies over them).
    pub ignores_availability: bool,
    /// Infrastructure the vehicle may not use.
    pub forbidden_infrastructure: &'static [Infrastructure],
    /// Conditions the vehicle may not travel in.
    pub forbidden_conditions: &'static [Conditions],
    /// Terrain the vehicle may not cross.
    pub forbidden_geography: &'static [Geography],
}

impl VehicleConstraints {
    /// Restrictions for an unspecified ground vehicle: closed roads only.
    pub const GROUND: VehicleConstraints = VehicleConstraints {
        ignores_availability: false,
        forbidden_infrastructure: &[],
        forbidden_conditions: &[],
        forbidden_geography: &[],
    };

    /// Drones ignore closures but keep off highways and bad weather.
    pub const DRONE: VehicleConstraints = VehicleConstraints {
        ignores_availability: true,
        forbidden_infrastructure: &[Infrastructure::Highway],
        forbidden_conditions: &[Conditions::Bad, Conditions::VeryBad],
        forbidden_geography: &[],
    };

    pub const CAR: VehicleConstraints = Self::GROUND;

    /// Trucks cannot cross mountains.
    pub const TRUCK: VehicleConstraints = VehicleConstraints {
        forbidden_geography: &[Geography::Mountainous],
        ..Self::GROUND
    };

    /// Looks up the table entry for a vehicle type (`None` = generic ground).
    pub fn for_vehicle(vehicle: Option<VehicleType>) -> &'static VehicleConstraints {
        match vehicle {
            None => &Self::GROUND,
            Some(VehicleType::Drone) => &Self::DRONE,
            Some(VehicleType::Car) => &Self::CAR,
            Some(VehicleType::Truck) => &Self::TRUCK,
        }
    }

    /// Returns `true` if the vehicle may use `road` at all.
    pub fn permits(&self, road: &Road) -> bool {
        (road.is_available() || self.ignores_availability)
            && !self.forbidden_infrastructure.contains(&road.infrastructure())
            && !self.forbidden_conditions.contains(&road.conditions())
            && !self.forbidden_geography.contains(&road.geography())
    }
}

/// Multiplier for road conditions.
pub fn condition_weight(conditions: Conditions) -> f64 {
    match conditions {
        Conditions::VeryGood => 0.8,
        Conditions::Good => 1.0,
        Conditions::Reasonable => 1.2,
        Conditions::Bad => 1.5,
        Conditions::VeryBad => 2.0,
    }
}

/// Multiplier for infrastructure; highways are favoured.
pub fn infrastructure_weight(infrastructure: Infrastructure) -> f64 {
    match infrastructure {
        Infrastructure::Highway => 0.8,
        _ => 1.2,
    }
}

/// Multiplier for terrain.
pub fn geography_weight(geography: Geography) -> f64 {
    match geography {
        Geography::Mountainous => 1.5,
        Geography::Plateau => 0.9,
        _ => 1.0,
    }
}

/// Cost of traversing `road` with a vehicle of the given type.
///
/// The base cost scaled by condition, infrastructure and terrain weights, or
/// `f64::INFINITY` when the vehicle may not use the road. Callers treat an
/// infinite cost as a missing edge.
///
/// # Examples
///
/// ```
/// use u_relief::heuristics::edge_cost;
/// use u_relief::models::{Conditions, Infrastructure, Road, VehicleType};
///
/// let road = Road::new(10.0).expect("valid")
///     .with_conditions(Conditions::VeryGood)
///     .with_infrastructure(Infrastructure::Highway);
/// assert!((edge_cost(&road, Some(VehicleType::Car)) - 6.4).abs() < 1e-9);
/// assert!(edge_cost(&road, Some(VehicleType::Drone)).is_infinite());
/// ```
pub fn edge_cost(road: &Road, vehicle: Option<VehicleType>) -> f64 {
    if !VehicleConstraints::for_vehicle(vehicle).permits(road) {
        return f64::INFINITY;
    }
    road.cost()
        * condition_weight(road.conditions())
        * infrastructure_weight(road.infrastructure())
        * geography_weight(road.geography())
}
