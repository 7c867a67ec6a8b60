use tracing::debug;

use crate::dataset::RoadNetwork;
use crate::error::Result;
use crate::graph::{build_graph, Graph};
use crate::resolve::{resolve_name, DEFAULT_HINT_COUNT};
use crate::routing::{plan_route, RouteRequest, RouteResult};

/// Engine entry point used by presentation layers.
///
/// Holds the immutable graph built at startup. Cloning shares the graph, so
/// a single navigator can serve any number of threads without locking.
#[derive(Debug, Clone)]
pub struct Navigator {
    graph: Graph,
    hint_count: usize,
}

impl Navigator {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            hint_count: DEFAULT_HINT_COUNT,
        }
    }

    /// Validate a network table and wrap the resulting graph.
    pub fn from_network(network: &RoadNetwork) -> Result<Self> {
        let graph = build_graph(network)?;
        debug!(
            nodes = graph.node_count(),
            roads = graph.road_count(),
            "navigator ready"
        );
        Ok(Self::new(graph))
    }

    /// Number of canonical names offered when input does not resolve.
    pub fn with_hint_count(mut self, hint_count: usize) -> Self {
        self.hint_count = hint_count;
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Every canonical landmark name, sorted.
    pub fn locations(&self) -> Vec<String> {
        self.graph.nodes().map(str::to_string).collect()
    }

    /// Canonical name the input resolves to, if any.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        resolve_name(&self.graph, input)
    }

    /// Resolve both inputs and plan the shortest route between them.
    pub fn get_directions(&self, start: &str, end: &str) -> RouteResult {
        self.plan(&RouteRequest::new(start, end))
    }

    /// Plan a parsed request, using this navigator's hint count.
    pub fn plan(&self, request: &RouteRequest) -> RouteResult {
        let request = request.clone().with_hint_count(self.hint_count);
        plan_route(&self.graph, &request)
    }
}
