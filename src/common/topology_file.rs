//! Topology file loading, parsing, and validation logic.
//!
//! A topology file is a JSON object keyed by node identifier:
//!
//! ```json
//! {
//!   "A": { "position": [0.0, 0.0], "connected_nodes": ["B", "C"] },
//!   "B": { "position": [0.0, 3.0], "connected_nodes": ["A"] }
//! }
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::network::Topology;
use crate::network::geometry::{Point, distance2};

/// Declared attributes of one node.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NodeDescription {
    /// Planar position `[x, y]`.
    pub position: [f64; 2],
    /// Identifiers of adjacent nodes. Unknown identifiers are tolerated.
    #[serde(default)]
    pub connected_nodes: Vec<String>,
}

/// In-memory shape of a topology file: node identifier → description.
pub type TopologyDescription = BTreeMap<String, NodeDescription>;

/// Error type for topology loading failures.
#[derive(Debug)]
pub enum TopologyLoadError {
    FileReadError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for TopologyLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyLoadError::FileReadError(msg) => write!(f, "Failed to read file: {}", msg),
            TopologyLoadError::ParseError(msg) => write!(f, "Failed to parse JSON: {}", msg),
            TopologyLoadError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for TopologyLoadError {}

/// Read and validate a topology description from a JSON file.
pub fn load_description(path: &Path) -> Result<TopologyDescription, TopologyLoadError> {
    let data = fs::read_to_string(path).map_err(|e| TopologyLoadError::FileReadError(format!("{}: {}", path.display(), e)))?;

    parse_description(&data)
}

/// Parse and validate a topology description from JSON text.
pub fn parse_description(data: &str) -> Result<TopologyDescription, TopologyLoadError> {
    let description: TopologyDescription = serde_json::from_str(data)
        .context("Invalid JSON format")
        .map_err(|e| TopologyLoadError::ParseError(format!("{:#}", e)))?;

    validate_description(&description).map_err(TopologyLoadError::ValidationError)?;

    Ok(description)
}

/// Load a topology file and build the connected `Topology`.
pub fn load_topology(path: &Path) -> Result<Topology, TopologyLoadError> {
    let description = load_description(path)?;
    log::info!("Loaded topology file {} with {} nodes", path.display(), description.len());
    Ok(Topology::new(&description))
}

/// Validate a topology description.
///
/// Rejects inputs that would produce a meaningless model:
/// - an empty node set
/// - empty node identifiers
/// - non-finite positions
/// - two distinct adjacent nodes at the same position (zero-length link)
///
/// References to unknown neighbors pass; construction skips them.
pub fn validate_description(description: &TopologyDescription) -> Result<(), String> {
    if description.is_empty() {
        return Err("Topology must contain at least one node".to_string());
    }

    for (id, node) in description {
        if id.is_empty() {
            return Err("Node identifiers must not be empty".to_string());
        }
        let [x, y] = node.position;
        if !x.is_finite() || !y.is_finite() {
            return Err(format!("Node {} position ({}, {}) is not finite", id, x, y));
        }
    }

    for (id, node) in description {
        let position = Point::from(node.position);
        for neighbor_id in &node.connected_nodes {
            if neighbor_id == id {
                continue;
            }
            let Some(neighbor) = description.get(neighbor_id) else {
                continue;
            };
            if distance2(&position, &Point::from(neighbor.position)) == 0.0 {
                return Err(format!(
                    "Nodes {} and {} are connected but share position ({}, {})",
                    id, neighbor_id, position.x, position.y
                ));
            }
        }
    }

    Ok(())
}
