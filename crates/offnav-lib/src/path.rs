use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Lowest-cost node sequence between two landmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Nodes from start to goal inclusive.
    pub nodes: Vec<NodeId>,
    /// Distance of each road taken; `legs[i]` joins `nodes[i]` and `nodes[i + 1]`.
    pub legs: Vec<f64>,
    /// Sum of the road distances along `nodes`.
    pub total_distance: f64,
}

/// Run Dijkstra's algorithm between `start` and `goal`.
///
/// Returns `None` when the goal lies in a different component. Among nodes
/// with equal tentative distance the one with the smallest name is settled
/// first, which makes the chosen path reproducible when several routes tie.
pub fn find_route_dijkstra(graph: &Graph, start: NodeId, goal: NodeId) -> Option<ShortestPath> {
    let node_count = graph.node_count();
    if start >= node_count || goal >= node_count {
        return None;
    }

    if start == goal {
        return Some(ShortestPath {
            nodes: vec![start],
            legs: Vec::new(),
            total_distance: 0.0,
        });
    }

    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<(NodeId, f64)>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    let mut settled_count = 0usize;
    while let Some(entry) = queue.pop() {
        if settled[entry.node] {
            continue;
        }
        settled[entry.node] = true;
        settled_count += 1;

        if entry.node == goal {
            debug!(settled = settled_count, "goal settled");
            let (nodes, legs) = reconstruct_path(&parents, start, goal);
            return Some(ShortestPath {
                nodes,
                legs,
                total_distance: distances[goal],
            });
        }

        let current_distance = distances[entry.node];
        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if settled[next] {
                continue;
            }

            let next_cost = current_distance + edge.distance;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some((entry.node, edge.distance));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(settled = settled_count, "goal unreachable");
    None
}

/// Length of the shortest path between two nodes, if one exists.
pub fn shortest_distance(graph: &Graph, start: NodeId, goal: NodeId) -> Option<f64> {
    find_route_dijkstra(graph, start, goal).map(|path| path.total_distance)
}

fn reconstruct_path(
    parents: &[Option<(NodeId, f64)>],
    start: NodeId,
    goal: NodeId,
) -> (Vec<NodeId>, Vec<f64>) {
    let mut path = vec![goal];
    let mut legs = Vec::new();
    let mut current = goal;
    while current != start {
        let Some((parent, distance)) = parents[current] else {
            break;
        };
        path.push(parent);
        legs.push(distance);
        current = parent;
    }
    path.reverse();
    legs.reverse();
    (path, legs)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then id.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
