//! Error types for the `u-relief` crate.
//!
//! Only precondition violations are errors. An unreachable goal or a vehicle
//! running dry mid-route are ordinary outcomes carried by
//! [`SearchResult`](crate::search::SearchResult) and
//! [`RouteOutcome`](crate::search::RouteOutcome).

use crate::graph::ZoneId;

/// Errors that can occur during graph and search operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReliefError {
    /// A zone id does not belong to the graph.
    #[error("zone not found: {0}")]
    ZoneNotFound(ZoneId),

    /// No zone with the given name exists in the graph.
    #[error("no zone named {0:?}")]
    UnknownZoneName(String),

    /// A heuristic was requested for a zone the graph does not hold.
    #[error("cannot evaluate heuristic for missing zone {0}")]
    InvalidHeuristicInput(ZoneId),

    /// A deserialized graph is internally inconsistent.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
}

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, ReliefError>;
