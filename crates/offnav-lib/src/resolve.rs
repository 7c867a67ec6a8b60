//! Mapping of loosely typed user input onto canonical landmark names.
//!
//! Matching is a case-insensitive substring test against every canonical
//! name. When several landmarks contain the input, the shortest name wins and
//! remaining ties go to the lexicographically smallest name, so the outcome
//! never depends on declaration order.

use std::cmp::Ordering;

use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Number of canonical names offered as a hint for unresolved input.
pub const DEFAULT_HINT_COUNT: usize = 5;

/// Maximum number of similar-name suggestions.
pub const SUGGESTION_LIMIT: usize = 3;

/// Minimum Jaro-Winkler similarity for a name to count as a suggestion.
const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Outcome of resolving a single piece of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedLocation {
    /// The input matched this canonical node.
    Node(NodeId),
    /// No canonical name contains the input substring.
    NoMatch,
}

impl ResolvedLocation {
    /// The matched node, if any.
    pub fn node(self) -> Option<NodeId> {
        match self {
            ResolvedLocation::Node(id) => Some(id),
            ResolvedLocation::NoMatch => None,
        }
    }
}

/// Resolve free-text input to a canonical node.
///
/// Blank input never matches.
pub fn resolve(graph: &Graph, input: &str) -> ResolvedLocation {
    let needle = normalize(input);
    if needle.is_empty() {
        return ResolvedLocation::NoMatch;
    }

    // Node ids follow name order, so the id breaks length ties.
    let chosen = graph
        .nodes()
        .enumerate()
        .filter(|(_, name)| name.to_lowercase().contains(&needle))
        .min_by_key(|(id, name)| (name.chars().count(), *id))
        .map(|(id, _)| id);

    match chosen {
        Some(id) => {
            debug!(input, resolved = graph.node_name(id), "resolved landmark");
            ResolvedLocation::Node(id)
        }
        None => {
            debug!(input, "no landmark matches input");
            ResolvedLocation::NoMatch
        }
    }
}

/// Resolve input straight to its canonical name.
pub fn resolve_name<'a>(graph: &'a Graph, input: &str) -> Option<&'a str> {
    resolve(graph, input)
        .node()
        .and_then(|id| graph.node_name(id))
}

/// The first `count` canonical names in sorted order.
pub fn hint_names(graph: &Graph, count: usize) -> Vec<String> {
    graph.nodes().take(count).map(str::to_string).collect()
}

/// Canonical names that look similar to the input, best match first.
///
/// Covers typos that a substring test cannot catch, e.g. "hauz kaas".
pub fn similar_names(graph: &Graph, input: &str, limit: usize) -> Vec<String> {
    let needle = normalize(input);
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = graph
        .nodes()
        .map(|name| (strsim::jaro_winkler(&needle, &name.to_lowercase()), name))
        .filter(|(score, _)| *score >= SIMILARITY_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(b.1))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
