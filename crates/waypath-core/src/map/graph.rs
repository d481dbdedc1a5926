//! Footway graph construction

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;
use crate::trace_time;

use super::CampusMap;

/// Counts reported after loading a map and building its graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapStats {
    pub nodes: usize,
    pub footways: usize,
    pub buildings: usize,
    pub vertices: usize,
    pub edges: usize,
}

impl CampusMap {
    /// Build the walking graph: one vertex per node and, for each pair of
    /// consecutive footway nodes, an edge in both directions weighted by
    /// their geodesic distance in miles.
    pub fn build_graph(&self) -> Graph<i64, f64> {
        let start = Instant::now();
        let mut graph = Graph::new();

        for id in self.nodes.keys() {
            graph.add_vertex(*id);
        }

        for footway in &self.footways {
            for pair in footway.nodes.windows(2) {
                let (Some(a), Some(b)) = (self.nodes.get(&pair[0]), self.nodes.get(&pair[1]))
                else {
                    continue;
                };
                graph.add_undirected_edge(a.id, b.id, a.distance_to(b));
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph_built"
        );
        trace_time!(start, "build_graph");
        graph
    }

    /// Map and graph counts for display
    pub fn stats(&self, graph: &Graph<i64, f64>) -> MapStats {
        MapStats {
            nodes: self.nodes.len(),
            footways: self.footways.len(),
            buildings: self.buildings.len(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        }
    }
}
