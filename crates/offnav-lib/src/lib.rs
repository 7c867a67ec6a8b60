//! Offnav library entry points.
//!
//! This crate builds an immutable road graph from a fixed landmark table,
//! resolves loosely typed place names to canonical landmarks and plans the
//! shortest route between them. Presentation layers (the CLI, or anything
//! else) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod navigator;
pub mod output;
pub mod path;
pub mod resolve;
pub mod routing;

pub use dataset::{load_network, Road, RoadNetwork, NETWORK_ENV_VAR};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph, NodeId};
pub use navigator::Navigator;
pub use output::{
    format_km, Arrival, NoRouteNotice, RouteDirections, RouteHeader, RouteRenderMode, RouteStep,
    RouteSummary,
};
pub use path::{find_route_dijkstra, shortest_distance, ShortestPath};
pub use resolve::{
    hint_names, resolve, resolve_name, similar_names, ResolvedLocation, DEFAULT_HINT_COUNT,
    SUGGESTION_LIMIT,
};
pub use routing::{
    plan_route, shortest_path, NotFoundReason, RouteFailure, RoutePlan, RouteRequest, RouteResult,
    Segment,
};
