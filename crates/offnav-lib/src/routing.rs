//! Route planning between two pieces of free-text input.
//!
//! This module provides:
//! - [`RouteRequest`] - A routing query, optionally parsed from "Start, End"
//! - [`RouteResult`] - Either a [`RoutePlan`] or a typed [`RouteFailure`]
//! - [`shortest_path`] - Planner entry point over resolved nodes
//! - [`plan_route`] - Resolve both inputs, then plan
//!
//! Unrecognised landmarks and disconnected endpoints are ordinary outcomes,
//! not errors, so callers branch on [`RouteResult`] directly.
//!
//! # Example
//!
//! ```ignore
//! use offnav_lib::{build_graph, plan_route, RoadNetwork, RouteRequest};
//!
//! let graph = build_graph(&RoadNetwork::delhi())?;
//! let result = plan_route(&graph, &RouteRequest::new("red fort", "rohini"));
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::find_route_dijkstra;
use crate::resolve::{
    hint_names, resolve, similar_names, ResolvedLocation, DEFAULT_HINT_COUNT, SUGGESTION_LIMIT,
};

/// Why a routing query produced no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    /// The start text matched no landmark.
    UnresolvedStart,
    /// The destination text matched no landmark.
    UnresolvedEnd,
    /// Both ends resolved but no road connects them.
    NoPathExists,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NotFoundReason::UnresolvedStart => "unresolved_start",
            NotFoundReason::UnresolvedEnd => "unresolved_end",
            NotFoundReason::NoPathExists => "no_path_exists",
        };
        f.write_str(value)
    }
}

/// One road travelled along a planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Landmarks from start to goal inclusive; never empty.
    pub path: Vec<String>,
    pub total_distance_km: f64,
    pub segments: Vec<Segment>,
}

impl RoutePlan {
    /// First landmark of the route.
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Last landmark of the route.
    pub fn goal(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of roads travelled.
    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }
}

/// Details attached to a query that produced no route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteFailure {
    pub reason: NotFoundReason,
    /// Raw text that failed to resolve, when the failure is a resolution one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Canonical start, when it resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Canonical goal, when it resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// First canonical names in sorted order, offered as a re-prompt hint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
    /// Canonical names similar to the unresolved input.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl RouteFailure {
    fn no_path(start: String, goal: String) -> Self {
        Self {
            reason: NotFoundReason::NoPathExists,
            input: None,
            start: Some(start),
            goal: Some(goal),
            hints: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    fn unresolved(
        graph: &Graph,
        reason: NotFoundReason,
        input: &str,
        start: Option<String>,
        hint_count: usize,
    ) -> Self {
        Self {
            reason,
            input: Some(input.to_string()),
            start,
            goal: None,
            hints: hint_names(graph, hint_count),
            suggestions: similar_names(graph, input, SUGGESTION_LIMIT),
        }
    }
}

/// Outcome of a routing query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteResult {
    Found(RoutePlan),
    NotFound(RouteFailure),
}

impl RouteResult {
    /// The plan, when a route was found.
    pub fn plan(&self) -> Option<&RoutePlan> {
        match self {
            RouteResult::Found(plan) => Some(plan),
            RouteResult::NotFound(_) => None,
        }
    }

    /// The failure reason, when no route was found.
    pub fn reason(&self) -> Option<NotFoundReason> {
        match self {
            RouteResult::Found(_) => None,
            RouteResult::NotFound(failure) => Some(failure.reason),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteResult::Found(_))
    }
}

/// High-level routing request made of two pieces of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    /// How many canonical names to offer when an input does not resolve.
    pub hint_count: usize,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            hint_count: DEFAULT_HINT_COUNT,
        }
    }

    /// Parse a combined `"Start, End"` query.
    ///
    /// The input must contain exactly one comma with non-blank text on both
    /// sides; surrounding whitespace is trimmed.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || Error::MalformedQuery {
            input: input.to_string(),
        };

        let mut parts = input.split(',');
        let (Some(start), Some(goal), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let (start, goal) = (start.trim(), goal.trim());
        if start.is_empty() || goal.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(start, goal))
    }

    pub fn with_hint_count(mut self, hint_count: usize) -> Self {
        self.hint_count = hint_count;
        self
    }
}

/// Compute the shortest route between two resolved nodes.
///
/// Returns [`NotFoundReason::NoPathExists`] when the nodes sit in different
/// components.
pub fn shortest_path(graph: &Graph, start: NodeId, goal: NodeId) -> RouteResult {
    let name = |id: NodeId| graph.node_name(id).unwrap_or("<unknown>").to_string();

    let Some(route) = find_route_dijkstra(graph, start, goal) else {
        return RouteResult::NotFound(RouteFailure::no_path(name(start), name(goal)));
    };

    let segments: Vec<Segment> = route
        .nodes
        .windows(2)
        .zip(&route.legs)
        .map(|(pair, &distance_km)| Segment {
            from: name(pair[0]),
            to: name(pair[1]),
            distance_km,
        })
        .collect();

    RouteResult::Found(RoutePlan {
        path: route.nodes.iter().map(|&id| name(id)).collect(),
        total_distance_km: route.total_distance,
        segments,
    })
}

/// Resolve both ends of the request and plan a route between them.
///
/// The start is resolved first; an unresolved start is reported even when the
/// goal is also unknown.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> RouteResult {
    let ResolvedLocation::Node(start) = resolve(graph, &request.start) else {
        return RouteResult::NotFound(RouteFailure::unresolved(
            graph,
            NotFoundReason::UnresolvedStart,
            &request.start,
            None,
            request.hint_count,
        ));
    };

    let ResolvedLocation::Node(goal) = resolve(graph, &request.goal) else {
        return RouteResult::NotFound(RouteFailure::unresolved(
            graph,
            NotFoundReason::UnresolvedEnd,
            &request.goal,
            graph.node_name(start).map(str::to_string),
            request.hint_count,
        ));
    };

    shortest_path(graph, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_single_comma() {
        let request = RouteRequest::parse(" Red Fort ,  Airport").expect("valid query");
        assert_eq!(request.start, "Red Fort");
        assert_eq!(request.goal, "Airport");
        assert_eq!(request.hint_count, DEFAULT_HINT_COUNT);
    }

    #[test]
    fn parse_rejects_missing_or_extra_commas() {
        for input in ["Red Fort", "a, b, c", " , Airport", "Red Fort,  "] {
            let err = RouteRequest::parse(input).expect_err("malformed query");
            assert!(matches!(err, Error::MalformedQuery { .. }), "{input}");
        }
    }

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            path: vec!["A".into(), "B".into(), "C".into()],
            total_distance_km: 3.0,
            segments: vec![
                Segment {
                    from: "A".into(),
                    to: "B".into(),
                    distance_km: 1.0,
                },
                Segment {
                    from: "B".into(),
                    to: "C".into(),
                    distance_km: 2.0,
                },
            ],
        };
        assert_eq!(plan.hop_count(), 2);
        assert_eq!(plan.start(), Some("A"));
        assert_eq!(plan.goal(), Some("C"));
    }

    #[test]
    fn reason_labels_are_snake_case() {
        assert_eq!(NotFoundReason::NoPathExists.to_string(), "no_path_exists");
        assert_eq!(
            serde_json::to_value(NotFoundReason::UnresolvedEnd).unwrap(),
            serde_json::json!("unresolved_end")
        );
    }
}
