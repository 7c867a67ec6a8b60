use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::dataset::{Road, RoadNetwork};
use crate::error::{Error, Result};

/// Dense index of a landmark inside a [`Graph`].
///
/// Identifiers follow the lexicographic order of the canonical names, so
/// comparing two ids compares their names.
pub type NodeId = usize;

/// Edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub distance: f64,
}

#[derive(Debug, Default)]
struct GraphData {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    road_count: usize,
}

/// Immutable, undirected road graph shared by every query.
///
/// Cloning is cheap: the node arena and adjacency lists sit behind an
/// [`Arc`] and are never mutated after [`build_graph`] returns.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    data: Arc<GraphData>,
}

impl Graph {
    /// Canonical landmark names in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.names.iter().map(String::as_str)
    }

    /// Number of landmarks in the graph.
    pub fn node_count(&self) -> usize {
        self.data.names.len()
    }

    /// Number of undirected roads in the graph.
    pub fn road_count(&self) -> usize {
        self.data.road_count
    }

    /// Exact, case-sensitive membership test.
    pub fn has_node(&self, name: &str) -> bool {
        self.data.index.contains_key(name)
    }

    /// Lookup a node identifier by its case-sensitive name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.data.index.get(name).copied()
    }

    /// Lookup a landmark name by identifier.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.data.names.get(id).map(String::as_str)
    }

    /// Return the edges leaving a node, shortest first.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.data
            .adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Return `(neighbour name, distance)` pairs for a landmark name.
    ///
    /// Unknown names have no neighbours.
    pub fn neighbours_of(&self, name: &str) -> Vec<(&str, f64)> {
        let Some(id) = self.node_id(name) else {
            return Vec::new();
        };
        self.neighbours(id)
            .iter()
            .filter_map(|edge| {
                self.node_name(edge.target)
                    .map(|target| (target, edge.distance))
            })
            .collect()
    }

    /// Weight of the direct road between two nodes, if one exists.
    pub fn distance_between(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.distance)
    }
}

/// Build the routing graph from a network table.
///
/// Fails fast on blank or duplicate landmark names, roads that reference an
/// undeclared landmark, self loops, duplicate roads and distances that are not
/// strictly positive finite numbers. The distances must also have a finite sum,
/// so every route cost stays finite during the search.
pub fn build_graph(network: &RoadNetwork) -> Result<Graph> {
    let mut names = Vec::with_capacity(network.nodes.len());
    let mut seen = HashSet::new();
    for name in &network.nodes {
        if name.trim().is_empty() {
            return Err(Error::EmptyNodeName);
        }
        if !seen.insert(name.as_str()) {
            return Err(Error::DuplicateNode { name: name.clone() });
        }
        names.push(name.clone());
    }
    names.sort();

    let index: HashMap<String, NodeId> = names
        .iter()
        .enumerate()
        .map(|(id, name)| (name.clone(), id))
        .collect();

    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); names.len()];
    let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut total_km = 0.0_f64;

    for road in &network.roads {
        let from = endpoint(&index, road.from.as_str(), road)?;
        let to = endpoint(&index, road.to.as_str(), road)?;

        if from == to {
            return Err(Error::SelfLoop {
                node: road.from.clone(),
            });
        }
        if !(road.distance_km.is_finite() && road.distance_km > 0.0) {
            return Err(Error::InvalidDistance {
                from: road.from.clone(),
                to: road.to.clone(),
                distance_km: road.distance_km,
            });
        }
        if !pairs.insert((from.min(to), from.max(to))) {
            return Err(Error::DuplicateRoad {
                from: road.from.clone(),
                to: road.to.clone(),
            });
        }

        total_km += road.distance_km;
        adjacency[from].push(Edge {
            target: to,
            distance: road.distance_km,
        });
        adjacency[to].push(Edge {
            target: from,
            distance: road.distance_km,
        });
    }

    if !total_km.is_finite() {
        return Err(Error::NetworkTooLong { total_km });
    }

    for edges in &mut adjacency {
        edges.sort_by(|a, b| {
            compare_distance(a.distance, b.distance).then_with(|| a.target.cmp(&b.target))
        });
    }

    debug!(
        nodes = names.len(),
        roads = pairs.len(),
        "built road graph"
    );

    Ok(Graph {
        data: Arc::new(GraphData {
            names,
            index,
            adjacency,
            road_count: pairs.len(),
        }),
    })
}

fn endpoint(
    index: &HashMap<String, NodeId>,
    name: &str,
    road: &Road,
) -> Result<NodeId> {
    index
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownEndpoint {
            road_from: road.from.clone(),
            road_to: road.to.clone(),
            missing: name.to_string(),
        })
}

fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}
