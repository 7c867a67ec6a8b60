use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the offnav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is a startup or input-shape failure. Routing outcomes such as
/// an unrecognised landmark or a missing road connection are reported through
/// [`crate::RouteResult`] instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a road references a landmark that was never declared.
    #[error("road {road_from} -> {road_to} references undeclared landmark '{missing}'")]
    UnknownEndpoint {
        road_from: String,
        road_to: String,
        missing: String,
    },

    /// Raised when a road distance is zero, negative or not finite.
    #[error("road {from} -> {to} has invalid distance {distance_km} km; distances must be positive")]
    InvalidDistance {
        from: String,
        to: String,
        distance_km: f64,
    },

    /// Raised when the road distances together exceed the range of `f64`.
    #[error("total road length overflows ({total_km} km); route costs would not be finite")]
    NetworkTooLong { total_km: f64 },

    /// Raised when a road connects a landmark to itself.
    #[error("road from '{node}' to itself is not allowed")]
    SelfLoop { node: String },

    /// Raised when the same landmark name is declared twice.
    #[error("landmark '{name}' is declared more than once")]
    DuplicateNode { name: String },

    /// Raised when a second road joins an already connected pair.
    #[error("duplicate road between '{from}' and '{to}'")]
    DuplicateRoad { from: String, to: String },

    /// Raised when a landmark name is blank.
    #[error("landmark names must not be blank")]
    EmptyNodeName,

    /// Raised when a computed route plan lacks any landmarks.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a combined "Start, End" query cannot be split.
    #[error("expected a query of the form 'Start, End' but got '{input}'")]
    MalformedQuery { input: String },

    /// Raised when a network file does not exist.
    #[error("network file not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
