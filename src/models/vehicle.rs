//! Relief vehicle with autonomy and cargo state.

use serde::{Deserialize, Serialize};

/// Kind of vehicle. Road restrictions per kind live in
/// [`VehicleConstraints`](crate::heuristics::VehicleConstraints).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Drone,
    Car,
    Truck,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Drone, VehicleType::Car, VehicleType::Truck];
}

/// A vehicle that carries supplies along a route.
///
/// `autonomy` (remaining range, km) and `load` (remaining cargo, kg) only
/// decrease during a delivery and never drop below zero. `capacity` is fixed.
///
/// # Examples
///
/// ```
/// use u_relief::models::{Vehicle, VehicleType};
///
/// let v = Vehicle::new(VehicleType::Truck, 800.0, 200.0).expect("valid");
/// assert_eq!(v.autonomy(), 800.0);
/// assert_eq!(v.capacity(), 200.0);
/// assert_eq!(v.load(), 200.0);
///
/// // Fully loaded, every km costs 1.5 km of range
/// assert!((v.autonomy_cost(10.0) - 15.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    vehicle_type: VehicleType,
    range: f64,
    autonomy: f64,
    capacity: f64,
    load: f64,
}

impl Vehicle {
    /// Creates a fully loaded vehicle with the given range and capacity.
    ///
    /// Returns `None` if `autonomy` is negative or non-finite, or if
    /// `capacity` is not a positive finite number.
    pub fn new(vehicle_type: VehicleType, autonomy: f64, capacity: f64) -> Option<Self> {
        if !autonomy.is_finite() || autonomy < 0.0 {
            return None;
        }
        if !capacity.is_finite() || capacity <= 0.0 {
            return None;
        }
        Some(Self {
            vehicle_type,
            range: autonomy,
            autonomy,
            capacity,
            load: capacity,
        })
    }

    /// Kind of vehicle.
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// Remaining range in kilometers.
    pub fn autonomy(&self) -> f64 {
        self.autonomy
    }

    /// Maximum cargo in kilograms.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Remaining cargo in kilograms.
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Range consumed by travelling `distance` km with the current load.
    ///
    /// A full vehicle burns 50% more range than an empty one.
    pub fn autonomy_cost(&self, distance: f64) -> f64 {
        distance * (1.0 + 0.5 * self.load / self.capacity)
    }

    /// Deducts `amount` of range, clamping at zero.
    ///
    /// Returns `false` (and leaves the vehicle stranded with zero autonomy)
    /// if the remaining range was insufficient.
    pub fn consume_autonomy(&mut self, amount: f64) -> bool {
        if amount > self.autonomy {
            self.autonomy = 0.0;
            return false;
        }
        self.autonomy -= amount.max(0.0);
        true
    }

    /// Unloads `amount` of cargo.
    ///
    /// Returns `false` without unloading anything if less than `amount`
    /// remains.
    pub fn unload(&mut self, amount: f64) -> bool {
        if amount > self.load {
            return false;
        }
        self.load -= amount.max(0.0);
        true
    }

    /// Empties the cargo hold, returning what was left.
    pub fn unload_all(&mut self) -> f64 {
        std::mem::replace(&mut self.load, 0.0)
    }

    /// Restores the initial range and a full load.
    pub fn reset(&mut self) {
        self.autonomy = self.range;
        self.load = self.capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(VehicleType::Drone, 500.0, 10.0).expect("valid");
        assert_eq!(v.vehicle_type(), VehicleType::Drone);
        assert_eq!(v.autonomy(), 500.0);
        assert_eq!(v.capacity(), 10.0);
        assert_eq!(v.load(), 10.0);
    }

    #[test]
    fn test_vehicle_invalid() {
        assert!(Vehicle::new(VehicleType::Car, -1.0, 10.0).is_none());
        assert!(Vehicle::new(VehicleType::Car, f64::NAN, 10.0).is_none());
        assert!(Vehicle::new(VehicleType::Car, 100.0, 0.0).is_none());
        assert!(Vehicle::new(VehicleType::Car, 100.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_autonomy_cost_scales_with_load() {
        let mut v = Vehicle::new(VehicleType::Car, 100.0, 40.0).expect("valid");
        assert!((v.autonomy_cost(10.0) - 15.0).abs() < 1e-9);
        assert!(v.unload(20.0));
        assert!((v.autonomy_cost(10.0) - 12.5).abs() < 1e-9);
        v.unload_all();
        assert!((v.autonomy_cost(10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_consume_autonomy_clamps() {
        let mut v = Vehicle::new(VehicleType::Car, 10.0, 1.0).expect("valid");
        assert!(v.consume_autonomy(4.0));
        assert!((v.autonomy() - 6.0).abs() < 1e-9);
        assert!(!v.consume_autonomy(7.0));
        assert_eq!(v.autonomy(), 0.0);
    }

    #[test]
    fn test_unload() {
        let mut v = Vehicle::new(VehicleType::Truck, 10.0, 5.0).expect("valid");
        assert!(v.unload(3.0));
        assert!(!v.unload(3.0));
        assert!((v.load() - 2.0).abs() < 1e-9);
        assert!((v.unload_all() - 2.0).abs() < 1e-9);
        assert_eq!(v.load(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut v = Vehicle::new(VehicleType::Truck, 10.0, 5.0).expect("valid");
        v.consume_autonomy(8.0);
        v.unload_all();
        v.reset();
        assert_eq!(v.autonomy(), 10.0);
        assert_eq!(v.load(), 5.0);
    }
}
