//! Disaster-affected zones and their severity rating.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// How badly a zone has been hit, from 1 (very low) to 6 (very high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    VeryLow = 1,
    Low = 2,
    Reasonable = 3,
    Average = 4,
    High = 5,
    VeryHigh = 6,
}

impl Severity {
    /// All ratings, least to most severe.
    pub const ALL: [Severity; 6] = [
        Severity::VeryLow,
        Severity::Low,
        Severity::Reasonable,
        Severity::Average,
        Severity::High,
        Severity::VeryHigh,
    ];

    /// Highest ordinal value.
    pub const MAX: u8 = 6;

    /// Ordinal value in `1..=6`.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rating for an ordinal in `1..=6`, or `None` otherwise.
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }
}

/// A node of the relief graph: a named area with a location, a severity
/// rating and a population.
///
/// `supplies` accumulates cargo dropped by resource-aware deliveries; it is
/// the only field that changes after construction.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::models::{Severity, Zone};
///
/// let z = Zone::new("Leiria", Coordinate::new(39.74, -8.81), Severity::High, 128_000);
/// assert_eq!(z.name(), "Leiria");
/// assert_eq!(z.severity().value(), 5);
/// assert_eq!(z.supplies(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    name: String,
    coordinate: Coordinate,
    severity: Severity,
    population: u64,
    supplies: f64,
}

impl Zone {
    /// Creates a zone with no supplies delivered yet.
    pub fn new(
        name: impl Into<String>,
        coordinate: Coordinate,
        severity: Severity,
        population: u64,
    ) -> Self {
        Self {
            name: name.into(),
            coordinate,
            severity,
            population,
            supplies: 0.0,
        }
    }

    /// Unique name within a graph.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Severity level.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Number of residents.
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Cargo (kg) delivered to this zone so far.
    pub fn supplies(&self) -> f64 {
        self.supplies
    }

    /// Adds delivered cargo. Negative or non-finite amounts are ignored.
    pub fn receive_supplies(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.supplies += amount;
        }
    }

    /// Great-circle distance to another zone in kilometers.
    pub fn distance_to(&self, other: &Zone) -> f64 {
        self.coordinate.distance_to(&other.coordinate)
    }
}
