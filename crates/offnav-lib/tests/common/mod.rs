//! Shared fixtures for integration tests.

use offnav_lib::{build_graph, Graph, Navigator, Road, RoadNetwork};

/// Graph built from the builtin Delhi landmark table.
#[allow(dead_code)]
pub fn delhi_graph() -> Graph {
    build_graph(&RoadNetwork::delhi()).expect("builtin network is valid")
}

/// Navigator over the builtin Delhi landmark table.
#[allow(dead_code)]
pub fn delhi_navigator() -> Navigator {
    Navigator::from_network(&RoadNetwork::delhi()).expect("builtin network is valid")
}

/// Two disconnected islands: {North, Harbour} and {South Pier}.
#[allow(dead_code)]
pub fn islands_network() -> RoadNetwork {
    RoadNetwork {
        nodes: vec![
            "North Point".to_string(),
            "Harbour".to_string(),
            "South Pier".to_string(),
        ],
        roads: vec![Road::new("North Point", "Harbour", 4.0)],
    }
}
