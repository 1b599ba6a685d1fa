//! Domain model types for relief logistics.
//!
//! Zones are the nodes of the relief graph, roads label the edges between
//! them, and vehicles carry supplies along the routes found by
//! [`search`](crate::search).

mod road;
mod vehicle;
mod zone;

pub use road::{Conditions, Geography, Infrastructure, Road};
pub use vehicle::{Vehicle, VehicleType};
pub use zone::{Severity, Zone};
