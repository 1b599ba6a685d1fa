//! Latitude/longitude pairs and haversine distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point in degrees.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
///
/// let lisbon = Coordinate::new(38.7223, -9.1393);
/// let porto = Coordinate::new(41.1579, -8.6291);
///
/// // Roughly 274 km as the crow flies
/// let d = lisbon.distance_to(&porto);
/// assert!(d > 265.0 && d < 285.0);
/// assert_eq!(d, porto.distance_to(&lisbon));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_km(*self, *other)
    }
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// Symmetric, non-negative, and zero for identical points.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_for_same_point() {
        let p = Coordinate::new(40.0, -8.0);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinate::new(37.0, -7.9);
        let b = Coordinate::new(41.7, -6.7);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // One degree along a meridian is R * pi / 180
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((haversine_km(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((haversine_km(a, b) - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_positive_for_distinct_points() {
        let a = Coordinate::new(38.7, -9.1);
        let b = Coordinate::new(38.7, -9.0);
        assert!(haversine_km(a, b) > 0.0);
    }
}
