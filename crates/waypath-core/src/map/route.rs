//! Building-to-building route planning

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{NavError, Result};
use crate::geo::Coordinates;
use crate::graph::{dijkstra, Graph};

use super::{Building, CampusMap};

/// Outcome of a building-to-building query.
///
/// `distance` (miles) and `path` are `None` when the destination node is
/// not reachable from the start node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub start: Building,
    pub destination: Building,
    pub start_node: Coordinates,
    pub destination_node: Coordinates,
    pub distance: Option<f64>,
    pub path: Option<Vec<i64>>,
}

impl RouteReport {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Resolve both queries to buildings, snap each building to its nearest
/// footway node and run one shortest-path query from the start node.
///
/// Unmatched queries fail with [`NavError::BuildingNotFound`], checking the
/// start first. An unreachable destination is not an error.
#[tracing::instrument(skip(map, graph))]
pub fn plan_route(
    map: &CampusMap,
    graph: &Graph<i64, f64>,
    from: &str,
    to: &str,
) -> Result<RouteReport> {
    let start = map
        .find_building(from)
        .ok_or_else(|| NavError::building_not_found("Start", from))?;
    let destination = map
        .find_building(to)
        .ok_or_else(|| NavError::building_not_found("Destination", to))?;

    let start_node = map.nearest_footway_node(start.coords.lat, start.coords.lon)?;
    let destination_node =
        map.nearest_footway_node(destination.coords.lat, destination.coords.lon)?;
    debug!(
        start = %start.abbrev,
        destination = %destination.abbrev,
        start_node = start_node.id,
        destination_node = destination_node.id,
        "nearest_nodes"
    );

    let paths = dijkstra(graph, &start_node.id)?;
    let path = paths.path_to(&destination_node.id);

    info!(
        reachable = path.is_some(),
        settled = paths.settle_order().len(),
        "route_planned"
    );

    Ok(RouteReport {
        start: start.clone(),
        destination: destination.clone(),
        start_node,
        destination_node,
        distance: path.as_ref().map(|p| p.total()),
        path: path.map(|p| p.into_vertices()),
    })
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::CAMPUS_JSON;
    use super::*;
    use crate::geo::distance_between;

    fn campus() -> (CampusMap, Graph<i64, f64>) {
        let map = CampusMap::from_json_str(CAMPUS_JSON).unwrap();
        let graph = map.build_graph();
        (map, graph)
    }

    #[test]
    fn test_route_along_footways() {
        let (map, graph) = campus();
        let report = plan_route(&map, &graph, "SEO", "Library").unwrap();

        assert_eq!(report.start.abbrev, "SEO");
        assert_eq!(report.destination.abbrev, "LIB");
        assert_eq!(report.start_node.id, 1);
        assert_eq!(report.destination_node.id, 5);
        assert_eq!(report.path, Some(vec![1, 2, 3, 5]));

        let expected = distance_between(41.8700, -87.6500, 41.8700, -87.6490)
            + distance_between(41.8700, -87.6490, 41.8700, -87.6480)
            + distance_between(41.8700, -87.6480, 41.8690, -87.6480);
        assert!((report.distance.unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_route_to_same_building() {
        let (map, graph) = campus();
        let report = plan_route(&map, &graph, "LIB", "LIB").unwrap();
        assert_eq!(report.distance, Some(0.0));
        assert_eq!(report.path, Some(vec![5]));
    }

    #[test]
    fn test_unreachable_destination_is_data() {
        let (map, graph) = campus();
        let report = plan_route(&map, &graph, "SEO", "ARC").unwrap();
        assert!(!report.is_reachable());
        assert_eq!(report.path, None);
        assert_eq!(report.destination_node.id, 21);
    }

    #[test]
    fn test_unknown_start_reported_before_destination() {
        let (map, graph) = campus();
        let err = plan_route(&map, &graph, "Nowhere", "Elsewhere").unwrap_err();
        assert_eq!(err.to_string(), "Start building not found: Nowhere");

        let err = plan_route(&map, &graph, "SEO", "Elsewhere").unwrap_err();
        assert_eq!(err.to_string(), "Destination building not found: Elsewhere");
    }

    #[test]
    fn test_report_serializes() {
        let (map, graph) = campus();
        let report = plan_route(&map, &graph, "SEO", "ARC").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["start"]["abbrev"], "SEO");
        assert_eq!(json["start"]["id"], 1001);
        assert!(json["distance"].is_null());
        assert!(json["path"].is_null());
    }
}
