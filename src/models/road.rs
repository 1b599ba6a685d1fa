//! Roads and their traversability attributes.

use serde::{Deserialize, Serialize};

/// Surface and weather state of a road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conditions {
    VeryGood,
    Good,
    Reasonable,
    Bad,
    VeryBad,
}

impl Conditions {
    pub const ALL: [Conditions; 5] = [
        Conditions::VeryGood,
        Conditions::Good,
        Conditions::Reasonable,
        Conditions::Bad,
        Conditions::VeryBad,
    ];
}

/// Terrain a road crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Geography {
    Mountainous,
    Plateau,
    Plain,
    Coastal,
}

impl Geography {
    pub const ALL: [Geography; 4] = [
        Geography::Mountainous,
        Geography::Plateau,
        Geography::Plain,
        Geography::Coastal,
    ];
}

/// Kind of road infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Infrastructure {
    Highway,
    National,
    Rural,
    Unpaved,
}

impl Infrastructure {
    pub const ALL: [Infrastructure; 4] = [
        Infrastructure::Highway,
        Infrastructure::National,
        Infrastructure::Rural,
        Infrastructure::Unpaved,
    ];
}

/// An undirected edge label between two zones.
///
/// `cost` is the vehicle-independent base cost. `conditions` and
/// `availability` may be re-rolled while a weighted search runs.
///
/// # Examples
///
/// ```
/// use u_relief::models::{Conditions, Geography, Infrastructure, Road};
///
/// let road = Road::new(42.0).expect("valid cost")
///     .with_conditions(Conditions::Bad)
///     .with_geography(Geography::Mountainous)
///     .with_infrastructure(Infrastructure::Highway)
///     .with_availability(false);
/// assert_eq!(road.cost(), 42.0);
/// assert!(!road.is_available());
///
/// assert!(Road::new(-1.0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    cost: f64,
    conditions: Conditions,
    geography: Geography,
    infrastructure: Infrastructure,
    availability: bool,
}

impl Road {
    /// Creates an available national road on a plain in good condition.
    ///
    /// Returns `None` if `cost` is negative or non-finite.
    pub fn new(cost: f64) -> Option<Self> {
        if !cost.is_finite() || cost < 0.0 {
            return None;
        }
        Some(Self {
            cost,
            ..Self::default()
        })
    }

    /// Sets the road conditions.
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Sets the terrain.
    pub fn with_geography(mut self, geography: Geography) -> Self {
        self.geography = geography;
        self
    }

    /// Sets the infrastructure class.
    pub fn with_infrastructure(mut self, infrastructure: Infrastructure) -> Self {
        self.infrastructure = infrastructure;
        self
    }

    /// Opens or closes the road.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.availability = available;
        self
    }

    /// Base traversal cost, independent of the vehicle.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Current road conditions.
    pub fn conditions(&self) -> Conditions {
        self.conditions
    }

    /// Terrain the road crosses.
    pub fn geography(&self) -> Geography {
        self.geography
    }

    /// Infrastructure class.
    pub fn infrastructure(&self) -> Infrastructure {
        self.infrastructure
    }

    /// Whether ground vehicles may use the road right now.
    pub fn is_available(&self) -> bool {
        self.availability
    }

    /// Changes the road conditions.
    pub fn set_conditions(&mut self, conditions: Conditions) {
        self.conditions = conditions;
    }

    /// Opens or closes the road.
    pub fn set_availability(&mut self, available: bool) {
        self.availability = available;
    }
}

impl Default for Road {
    /// A free, available national road on a plain in good condition.
    fn default() -> Self {
        Self {
            cost: 0.0,
            conditions: Conditions::Good,
            geography: Geography::Plain,
            infrastructure: Infrastructure::National,
            availability: true,
        }
    }
}
