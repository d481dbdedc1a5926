//! Directed, weighted graph keyed by arbitrary vertex identifiers
//!
//! Adjacency is stored as nested ordered maps (vertex -> neighbor -> weight),
//! so neighbor enumeration is naturally sorted and vertex enumeration is
//! stable for a given state. Vertex and edge counters are maintained on
//! insertion and always agree with the underlying maps.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::types::VertexId;

/// A directed graph with weighted edges.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_vertex` | \(O(\log V)\) |
/// | `add_edge` | \(O(\log V + \log d)\) |
/// | `weight` | \(O(\log V + \log d)\) |
/// | `neighbors` | \(O(d)\) |
/// | `vertex_count` / `edge_count` | \(O(1)\) |
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    adjacency: BTreeMap<V, BTreeMap<V, W>>,
    vertex_count: usize,
    edge_count: usize,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            vertex_count: 0,
            edge_count: 0,
        }
    }
}

impl<V: VertexId, W: Copy> Graph<V, W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(from, to, weight)` triples, adding endpoints as
    /// vertices on first sight. Later triples overwrite earlier weights.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V, W)>) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_vertex(from.clone());
            graph.add_vertex(to.clone());
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Adds `vertex` if it is not already present.
    ///
    /// Returns `false` for a duplicate; the graph is left unchanged.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeMap::new());
        self.vertex_count += 1;
        true
    }

    /// Adds or overwrites the directed edge `from -> to`.
    ///
    /// Returns `false` without mutating anything when either endpoint is not
    /// a vertex. Re-adding an existing edge replaces its weight and leaves the
    /// edge count unchanged.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.adjacency.contains_key(&to) {
            return false;
        }
        let Some(out) = self.adjacency.get_mut(&from) else {
            return false;
        };
        if out.insert(to, weight).is_none() {
            self.edge_count += 1;
        }
        true
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    ///
    /// Both endpoints are checked first, so a `false` return means nothing
    /// was inserted in either direction.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: W) -> bool {
        if !self.contains_vertex(&a) || !self.contains_vertex(&b) {
            return false;
        }
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
        true
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|out| out.contains_key(to))
    }

    /// Returns the weight of `from -> to`, or `None` if there is no such edge.
    pub fn weight(&self, from: &V, to: &V) -> Option<W> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Returns the out-neighbors of `vertex` in ascending order.
    ///
    /// An unknown vertex or one without outgoing edges yields an empty set.
    pub fn neighbors(&self, vertex: &V) -> BTreeSet<V> {
        self.out_edges(vertex).map(|(v, _)| v.clone()).collect()
    }

    /// Iterates `(neighbor, weight)` for the outgoing edges of `vertex`,
    /// in ascending neighbor order, without allocating.
    pub fn out_edges<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, W)> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|out| out.iter().map(|(v, w)| (v, *w)))
    }

    /// Returns all vertices in ascending order.
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Borrowing iterator over the vertices in ascending order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }
}

impl<V: VertexId + fmt::Display, W: Copy + fmt::Display> fmt::Display for Graph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Num vertices: {}", self.vertex_count)?;
        writeln!(f, "**Num edges: {}", self.edge_count)?;
        writeln!(f)?;
        writeln!(f, "**Vertices:")?;
        for (i, vertex) in self.adjacency.keys().enumerate() {
            writeln!(f, " {}. {}", i, vertex)?;
        }
        writeln!(f)?;
        writeln!(f, "**Edges:")?;
        for (from, out) in &self.adjacency {
            write!(f, "{}:", from)?;
            for (to, weight) in out {
                write!(f, " ({},{},{})", from, to, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
