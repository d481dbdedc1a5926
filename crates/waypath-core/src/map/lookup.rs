//! Building search and nearest-node resolution

use crate::error::{NavError, Result};
use crate::geo::{distance_between, Coordinates};

use super::{Building, CampusMap};

impl CampusMap {
    /// Find a building by exact abbreviation, falling back to the first
    /// building whose full name contains `query`.
    pub fn find_building(&self, query: &str) -> Option<&Building> {
        self.buildings
            .iter()
            .find(|b| b.abbrev == query)
            .or_else(|| self.buildings.iter().find(|b| b.name.contains(query)))
    }

    /// The footway node closest to `(lat, lon)`.
    ///
    /// Footways are scanned in map order and only a strictly closer node
    /// replaces the current best, so ties keep the first node seen.
    pub fn nearest_footway_node(&self, lat: f64, lon: f64) -> Result<Coordinates> {
        let mut best: Option<(f64, Coordinates)> = None;

        for footway in &self.footways {
            for id in &footway.nodes {
                let Some(node) = self.nodes.get(id) else {
                    continue;
                };
                let dist = distance_between(lat, lon, node.lat, node.lon);
                if best.map_or(true, |(min, _)| dist < min) {
                    best = Some((dist, *node));
                }
            }
        }

        best.map(|(_, node)| node).ok_or(NavError::NoFootways)
    }
}
