//! Campus map model and loader
//!
//! A map is described as JSON:
//!
//! ```json
//! {
//!   "nodes":     [{"id": 1, "lat": 41.87, "lon": -87.65}],
//!   "footways":  [{"id": 100, "nodes": [1, 2]}],
//!   "buildings": [{"abbrev": "SEO", "name": "Science & Engineering Offices",
//!                  "id": 7, "lat": 41.87, "lon": -87.64}]
//! }
//! ```
//!
//! Nodes are the known positions, footways are walkable node sequences and
//! buildings are named positions that are usually not on any footway.

pub mod graph;
pub mod lookup;
pub mod route;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{NavError, Result};
use crate::geo::Coordinates;

pub use graph::MapStats;
pub use route::{plan_route, RouteReport};

/// A walkable way: an ordered sequence of node ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footway {
    pub id: i64,
    pub nodes: Vec<i64>,
}

/// A named campus building and its position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub abbrev: String,
    pub name: String,
    #[serde(flatten)]
    pub coords: Coordinates,
}

/// On-disk shape of a map description
#[derive(Debug, Default, Deserialize)]
struct MapDescription {
    #[serde(default)]
    nodes: Vec<Coordinates>,
    #[serde(default)]
    footways: Vec<Footway>,
    #[serde(default)]
    buildings: Vec<Building>,
}

/// A validated campus map
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    nodes: BTreeMap<i64, Coordinates>,
    footways: Vec<Footway>,
    buildings: Vec<Building>,
}

impl CampusMap {
    /// Load and validate a map description file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NavError::MapNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let map = Self::from_json_str(&content)?;

        info!(
            path = %path.display(),
            nodes = map.nodes.len(),
            footways = map.footways.len(),
            buildings = map.buildings.len(),
            "map_loaded"
        );
        Ok(map)
    }

    /// Parse and validate a JSON map description
    pub fn from_json_str(content: &str) -> Result<Self> {
        let description: MapDescription = serde_json::from_str(content)?;
        Self::from_parts(
            description.nodes,
            description.footways,
            description.buildings,
        )
    }

    /// Build a map from its parts, rejecting duplicate node ids and footways
    /// that reference unknown nodes.
    pub fn from_parts(
        nodes: Vec<Coordinates>,
        footways: Vec<Footway>,
        buildings: Vec<Building>,
    ) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        for node in nodes {
            if by_id.insert(node.id, node).is_some() {
                return Err(NavError::invalid_map(format!("duplicate node id {}", node.id)));
            }
        }

        for footway in &footways {
            if let Some(missing) = footway.nodes.iter().find(|id| !by_id.contains_key(*id)) {
                return Err(NavError::invalid_map(format!(
                    "footway {} references unknown node {}",
                    footway.id, missing
                )));
            }
        }

        Ok(Self {
            nodes: by_id,
            footways,
            buildings,
        })
    }

    /// All nodes keyed by id
    pub fn nodes(&self) -> &BTreeMap<i64, Coordinates> {
        &self.nodes
    }

    pub fn node(&self, id: i64) -> Option<&Coordinates> {
        self.nodes.get(&id)
    }

    pub fn footways(&self) -> &[Footway] {
        &self.footways
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }
}
