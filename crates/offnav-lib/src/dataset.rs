//! Landmark tables used to build the routing graph.
//!
//! A [`RoadNetwork`] is the raw, unvalidated table of landmark names and road
//! segments. It is turned into an immutable [`crate::Graph`] by
//! [`crate::build_graph`], which performs all consistency checks.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Environment variable that points at a JSON network file.
pub const NETWORK_ENV_VAR: &str = "OFFNAV_NETWORK";

/// Road segment between two landmarks, as declared in a network table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

impl Road {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance_km: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance_km,
        }
    }
}

/// Fixed table of landmarks and the roads between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub roads: Vec<Road>,
}

impl RoadNetwork {
    /// Builtin network of major Delhi landmarks with approximate road
    /// distances in kilometres.
    pub fn delhi() -> Self {
        const NODES: &[&str] = &[
            "Connaught Place",
            "India Gate",
            "Red Fort",
            "Chandni Chowk",
            "New Delhi Rly Station",
            "Kashmiri Gate",
            "Karol Bagh",
            "Dhaula Kuan",
            "IGI Airport",
            "Dwarka Sec 21",
            "Rohini East",
            "Pitampura",
            "Hauz Khas",
            "IIT Delhi",
            "Qutub Minar",
            "Nehru Place",
            "Lotus Temple",
            "Lajpat Nagar",
            "Akshardham",
            "Mayur Vihar",
            "Noida Sec 18",
            "Gurgaon Cyber City",
            // Only reachable through Connaught Place.
            "Mandi House",
        ];

        const ROADS: &[(&str, &str, f64)] = &[
            // Central hub
            ("Connaught Place", "India Gate", 2.5),
            ("Connaught Place", "New Delhi Rly Station", 1.5),
            ("Connaught Place", "Karol Bagh", 4.0),
            ("Connaught Place", "Mandi House", 2.0),
            // Old Delhi and the north
            ("New Delhi Rly Station", "Chandni Chowk", 2.5),
            ("Chandni Chowk", "Red Fort", 1.2),
            ("Red Fort", "Kashmiri Gate", 3.0),
            ("Kashmiri Gate", "Rohini East", 12.0),
            ("Rohini East", "Pitampura", 4.0),
            // South
            ("India Gate", "Lajpat Nagar", 6.0),
            ("Lajpat Nagar", "Nehru Place", 4.5),
            ("Nehru Place", "Lotus Temple", 1.5),
            ("Nehru Place", "Hauz Khas", 5.5),
            ("Hauz Khas", "IIT Delhi", 2.0),
            ("IIT Delhi", "Qutub Minar", 3.0),
            // East and the Noida link
            ("India Gate", "Akshardham", 7.0),
            ("Akshardham", "Mayur Vihar", 3.5),
            ("Mayur Vihar", "Noida Sec 18", 5.0),
            // West and the airport link
            ("Connaught Place", "Dhaula Kuan", 8.0),
            ("Karol Bagh", "Dhaula Kuan", 6.5),
            ("Dhaula Kuan", "IGI Airport", 9.0),
            ("IGI Airport", "Dwarka Sec 21", 6.0),
            ("IGI Airport", "Gurgaon Cyber City", 14.0),
            // Ring road
            ("Dhaula Kuan", "Hauz Khas", 7.0),
        ];

        Self {
            nodes: NODES.iter().map(|name| name.to_string()).collect(),
            roads: ROADS
                .iter()
                .map(|&(from, to, distance)| Road::new(from, to, distance))
                .collect(),
        }
    }

    /// Decode a network table from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NetworkNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let network: RoadNetwork = serde_json::from_str(&contents)?;
        info!(
            nodes = network.nodes.len(),
            roads = network.roads.len(),
            "loaded road network from {}",
            path.display()
        );
        Ok(network)
    }
}

/// Resolve and load the road network table.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `OFFNAV_NETWORK` environment variable.
/// 3. The builtin Delhi landmark table.
pub fn load_network(target: Option<&Path>) -> Result<RoadNetwork> {
    if let Some(explicit) = target {
        return RoadNetwork::from_path(explicit);
    }

    if let Some(env_path) = env::var_os(NETWORK_ENV_VAR) {
        let path = PathBuf::from(env_path);
        if !path.as_os_str().is_empty() {
            return RoadNetwork::from_path(&path);
        }
    }

    debug!("using builtin Delhi road network");
    Ok(RoadNetwork::delhi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delhi_table_declares_every_road_endpoint() {
        let network = RoadNetwork::delhi();
        assert_eq!(network.nodes.len(), 23);
        assert_eq!(network.roads.len(), 24);
        for road in &network.roads {
            assert!(network.nodes.contains(&road.from), "{} missing", road.from);
            assert!(network.nodes.contains(&road.to), "{} missing", road.to);
        }
    }

    #[test]
    fn roads_default_to_empty_when_omitted() {
        let network: RoadNetwork =
            serde_json::from_str(r#"{"nodes": ["A", "B"]}"#).expect("valid json");
        assert_eq!(network.nodes, vec!["A".to_string(), "B".to_string()]);
        assert!(network.roads.is_empty());
    }
}
