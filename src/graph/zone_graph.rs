//! Adjacency container over zones with shared road labels.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReliefError, Result};
use crate::models::{Road, Zone};

/// Index of a zone within a [`ZoneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneId(usize);

impl ZoneId {
    /// Wraps a raw zone index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index into the zone arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a road within a [`ZoneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoadId(usize);

impl RoadId {
    /// Raw index into the road arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One adjacency entry: a neighbor and the road leading to it.
///
/// Both directions of a connection hold the same [`RoadId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub neighbor: ZoneId,
    pub road: RoadId,
}

/// Undirected graph of zones connected by roads.
///
/// The graph owns every [`Zone`] and [`Road`]. Adjacency lists keep insertion
/// order and may contain parallel edges; each edge is a separate entry.
///
/// # Examples
///
/// ```
/// use u_relief::geo::Coordinate;
/// use u_relief::graph::ZoneGraph;
/// use u_relief::models::{Road, Severity, Zone};
///
/// let mut g = ZoneGraph::new();
/// let a = g.add_zone(Zone::new("A", Coordinate::new(0.0, 0.0), Severity::High, 5000));
/// let b = g.add_zone(Zone::new("B", Coordinate::new(0.0, 1.0), Severity::Low, 2000));
/// g.add_connection(a, b, Road::new(120.0).expect("valid")).expect("zones exist");
///
/// assert!(g.has_connection(a, b));
/// assert!(g.has_connection(b, a));
/// assert_eq!(g.zone_by_name("B"), Some(b));
/// ```
///
/// Deserialization rebuilds the name index and rejects documents whose
/// adjacency refers to missing zones or roads, whose roads are not listed
/// once from each end, or whose zone names repeat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawGraph")]
pub struct ZoneGraph {
    zones: Vec<Zone>,
    roads: Vec<Road>,
    adjacency: Vec<Vec<Connection>>,
    #[serde(skip_serializing)]
    by_name: HashMap<String, ZoneId>,
}

/// Unchecked wire form of a [`ZoneGraph`].
#[derive(Deserialize)]
struct RawGraph {
    zones: Vec<Zone>,
    roads: Vec<Road>,
    adjacency: Vec<Vec<Connection>>,
}

impl TryFrom<RawGraph> for ZoneGraph {
    type Error = ReliefError;

    fn try_from(raw: RawGraph) -> Result<Self> {
        let invalid = |msg: String| -> Result<Self> { Err(ReliefError::InvalidGraph(msg)) };
        if raw.adjacency.len() != raw.zones.len() {
            return invalid(format!(
                "{} adjacency lists for {} zones",
                raw.adjacency.len(),
                raw.zones.len()
            ));
        }

        let mut by_name = HashMap::with_capacity(raw.zones.len());
        for (i, zone) in raw.zones.iter().enumerate() {
            if by_name.insert(zone.name().to_owned(), ZoneId(i)).is_some() {
                return invalid(format!("duplicate zone name {:?}", zone.name()));
            }
        }

        // Every road must be listed exactly twice, as a -> b and b -> a.
        let mut ends: Vec<Vec<(ZoneId, ZoneId)>> = vec![Vec::new(); raw.roads.len()];
        for (i, conns) in raw.adjacency.iter().enumerate() {
            for conn in conns {
                if conn.neighbor.0 >= raw.zones.len() {
                    return invalid(format!("zone #{i} links to missing zone {}", conn.neighbor));
                }
                match ends.get_mut(conn.road.0) {
                    Some(seen) => seen.push((ZoneId(i), conn.neighbor)),
                    None => return invalid(format!("zone #{i} uses missing road {}", conn.road.0)),
                }
            }
        }
        for (r, seen) in ends.iter().enumerate() {
            let paired = match seen.as_slice() {
                [(a, b), (c, d)] => a == d && b == c,
                _ => false,
            };
            if !paired {
                return invalid(format!("road {r} is not listed once from each end"));
            }
        }

        Ok(Self {
            zones: raw.zones,
            roads: raw.roads,
            adjacency: raw.adjacency,
            by_name,
        })
    }
}

impl ZoneGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a zone with no connections.
    ///
    /// Zones are identified by name: if a zone with the same name is already
    /// present, its id is returned and the graph is left untouched.
    pub fn add_zone(&mut self, zone: Zone) -> ZoneId {
        if let Some(&id) = self.by_name.get(zone.name()) {
            return id;
        }
        let id = ZoneId(self.zones.len());
        self.by_name.insert(zone.name().to_owned(), id);
        self.zones.push(zone);
        self.adjacency.push(Vec::new());
        id
    }

    /// Connects two zones in both directions with a single shared road.
    ///
    /// Parallel edges are not detected; connecting the same pair twice adds
    /// a second road.
    pub fn add_connection(&mut self, a: ZoneId, b: ZoneId, road: Road) -> Result<RoadId> {
        self.ensure_zone(a)?;
        self.ensure_zone(b)?;
        Ok(self.link(a, b, road))
    }

    /// Inserts both zones (if absent) and connects them.
    pub fn connect(&mut self, a: Zone, b: Zone, road: Road) -> RoadId {
        let a = self.add_zone(a);
        let b = self.add_zone(b);
        self.link(a, b, road)
    }

    pub(super) fn link(&mut self, a: ZoneId, b: ZoneId, road: Road) -> RoadId {
        let road_id = RoadId(self.roads.len());
        self.roads.push(road);
        self.adjacency[a.0].push(Connection {
            neighbor: b,
            road: road_id,
        });
        self.adjacency[b.0].push(Connection {
            neighbor: a,
            road: road_id,
        });
        road_id
    }

    /// Outgoing connections of `zone` in insertion order.
    pub fn connections(&self, zone: ZoneId) -> Result<&[Connection]> {
        self.adjacency
            .get(zone.0)
            .map(Vec::as_slice)
            .ok_or(ReliefError::ZoneNotFound(zone))
    }

    /// Returns `true` if at least one road joins `a` and `b`.
    pub fn has_connection(&self, a: ZoneId, b: ZoneId) -> bool {
        self.adjacency
            .get(a.0)
            .is_some_and(|conns| conns.iter().any(|c| c.neighbor == b))
    }

    /// Looks up a zone id by name.
    pub fn zone_by_name(&self, name: &str) -> Option<ZoneId> {
        self.by_name.get(name).copied()
    }

    /// Like [`zone_by_name`](Self::zone_by_name), but as an error for `?` use.
    pub fn require_zone(&self, name: &str) -> Result<ZoneId> {
        self.zone_by_name(name)
            .ok_or_else(|| ReliefError::UnknownZoneName(name.to_owned()))
    }

    /// Zone with the given id, if any.
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.0)
    }

    /// Mutable access to a zone, if any.
    pub fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(id.0)
    }

    /// Returns the zone or [`ReliefError::ZoneNotFound`].
    pub fn try_zone(&self, id: ZoneId) -> Result<&Zone> {
        self.zone(id).ok_or(ReliefError::ZoneNotFound(id))
    }

    /// Fails with [`ReliefError::ZoneNotFound`] unless `id` is a node.
    pub fn ensure_zone(&self, id: ZoneId) -> Result<()> {
        self.try_zone(id).map(|_| ())
    }

    /// All zone ids in insertion order.
    pub fn zone_ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        (0..self.zones.len()).map(ZoneId)
    }

    /// All zones in insertion order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Number of zones.
    pub fn num_zones(&self) -> usize {
        self.zones.len()
    }

    /// Number of roads (each undirected connection counts once).
    pub fn num_roads(&self) -> usize {
        self.roads.len()
    }

    /// Returns the road with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn road(&self, id: RoadId) -> &Road {
        &self.roads[id.0]
    }

    /// Mutable access to a road; visible from both directions.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn road_mut(&mut self, id: RoadId) -> &mut Road {
        &mut self.roads[id.0]
    }

    /// All roads in insertion order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Mutable access to every road.
    pub fn roads_mut(&mut self) -> &mut [Road] {
        &mut self.roads
    }

    /// Returns `true` if `zone` has no connections.
    pub fn is_isolated(&self, zone: ZoneId) -> bool {
        self.adjacency.get(zone.0).is_some_and(Vec::is_empty)
    }

    /// Great-circle distance between two zones in kilometers.
    pub fn distance(&self, a: ZoneId, b: ZoneId) -> Result<f64> {
        Ok(self.try_zone(a)?.distance_to(self.try_zone(b)?))
    }
}
