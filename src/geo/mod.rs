//! Geographic coordinates and great-circle distance.
//!
//! Zones carry latitude/longitude in degrees; all distances are kilometers.

mod coordinate;

pub use coordinate::{haversine_km, Coordinate, EARTH_RADIUS_KM};
