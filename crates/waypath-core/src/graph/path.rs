//! Shortest-path reconstruction from a predecessor map

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::types::{Distance, VertexId};

/// A reconstructed path, source first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<V, W> {
    vertices: Vec<V>,
    total: W,
}

impl<V, W: Copy> Path<V, W> {
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Sum of edge weights along the path
    pub fn total(&self) -> W {
        self.total
    }

    /// Number of vertices on the path (a path to the source itself has one)
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn source(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn destination(&self) -> Option<&V> {
        self.vertices.last()
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

impl<V: fmt::Display, W> fmt::Display for Path<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

/// Walks predecessor links back from `dest` to the source.
///
/// Returns `None` when `dest` has no distance entry or its distance is
/// [`Distance::Unreachable`]; the predecessor chain is never consulted for
/// an unreached destination. Also returns `None` if the chain is broken or
/// loops, which cannot happen for maps produced by
/// [`dijkstra`](super::dijkstra::dijkstra).
pub fn reconstruct_path<V: VertexId, W: Copy>(
    distances: &BTreeMap<V, Distance<W>>,
    predecessors: &HashMap<V, Option<V>>,
    dest: &V,
) -> Option<Path<V, W>> {
    let total = distances.get(dest)?.finite()?;

    let mut vertices = vec![dest.clone()];
    let mut current = dest;
    // A simple chain visits each predecessor entry at most once.
    for _ in 0..=predecessors.len() {
        match predecessors.get(current)? {
            None => {
                vertices.reverse();
                return Some(Path { vertices, total });
            }
            Some(prev) => {
                vertices.push(prev.clone());
                current = prev;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maps() -> (BTreeMap<i64, Distance<f64>>, HashMap<i64, Option<i64>>) {
        let distances = BTreeMap::from([
            (1, Distance::Finite(0.0)),
            (2, Distance::Finite(3.0)),
            (3, Distance::Finite(2.0)),
            (9, Distance::Unreachable),
        ]);
        let predecessors = HashMap::from([(1, None), (2, Some(3)), (3, Some(1))]);
        (distances, predecessors)
    }

    #[test]
    fn test_reconstruct_through_intermediate() {
        let (distances, predecessors) = maps();
        let path = reconstruct_path(&distances, &predecessors, &2).unwrap();
        assert_eq!(path.vertices(), &[1, 3, 2]);
        assert_eq!(path.total(), 3.0);
        assert_eq!(path.source(), Some(&1));
        assert_eq!(path.destination(), Some(&2));
        assert_eq!(path.to_string(), "1->3->2");
    }

    #[test]
    fn test_path_to_source_is_single_vertex() {
        let (distances, predecessors) = maps();
        let path = reconstruct_path(&distances, &predecessors, &1).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.total(), 0.0);
        assert_eq!(path.to_string(), "1");
    }

    #[test]
    fn test_unreachable_destination_has_no_path() {
        let (distances, predecessors) = maps();
        assert!(reconstruct_path(&distances, &predecessors, &9).is_none());
        assert!(reconstruct_path(&distances, &predecessors, &404).is_none());
    }

    #[test]
    fn test_cyclic_chain_is_rejected() {
        let distances = BTreeMap::from([(1, Distance::Finite(1u32)), (2, Distance::Finite(2))]);
        let predecessors = HashMap::from([(1, Some(2)), (2, Some(1))]);
        assert!(reconstruct_path(&distances, &predecessors, &1).is_none());
    }

    #[test]
    fn test_serialize_path() {
        let (distances, predecessors) = maps();
        let path = reconstruct_path(&distances, &predecessors, &2).unwrap();
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["vertices"], serde_json::json!([1, 3, 2]));
        assert_eq!(json["total"], serde_json::json!(3.0));
    }
}
