use crate::error::{NavError, Result};
use crate::graph::path::{reconstruct_path, Path};
use crate::graph::store::Graph;
use crate::graph::types::{Distance, EdgeWeight, SearchOptions, VertexId};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};
use tracing::{debug, trace};

/// Frontier entry for the min-heap.
///
/// Ordered by distance, then by ascending vertex id. The id tie-break makes
/// the finalize order (and therefore the choice among equal-weight paths)
/// independent of insertion order.
#[derive(Debug, Clone)]
pub struct FrontierEntry<V, W> {
    pub vertex: V,
    pub distance: Distance<W>,
}

impl<V: VertexId, W: EdgeWeight> PartialEq for FrontierEntry<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: VertexId, W: EdgeWeight> Eq for FrontierEntry<V, W> {}

impl<V: VertexId, W: EdgeWeight> PartialOrd for FrontierEntry<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: VertexId, W: EdgeWeight> Ord for FrontierEntry<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Weights are validated before they reach the frontier, so
        // distances always compare.
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Result of one single-source query: the shortest-path tree plus
/// instrumentation about how the search ran.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    source: V,
    distances: BTreeMap<V, Distance<W>>,
    predecessors: HashMap<V, Option<V>>,
    settle_order: Vec<V>,
    stale_discards: usize,
    truncated: bool,
}

impl<V: VertexId, W: EdgeWeight> ShortestPaths<V, W> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Distance for every graph vertex; unreached vertices hold
    /// [`Distance::Unreachable`].
    pub fn distances(&self) -> &BTreeMap<V, Distance<W>> {
        &self.distances
    }

    /// Predecessor of every reached vertex. The source maps to `None`;
    /// unreached vertices have no entry.
    pub fn predecessors(&self) -> &HashMap<V, Option<V>> {
        &self.predecessors
    }

    /// Distance to `vertex`; vertices outside the graph are unreachable.
    pub fn distance(&self, vertex: &V) -> Distance<W> {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// `None` if `vertex` was never reached, `Some(None)` for the source.
    pub fn predecessor(&self, vertex: &V) -> Option<Option<&V>> {
        self.predecessors.get(vertex).map(Option::as_ref)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_reachable()
    }

    /// Vertices in the order they were finalized
    pub fn settle_order(&self) -> &[V] {
        &self.settle_order
    }

    /// How many superseded frontier entries were popped and skipped
    pub fn stale_discards(&self) -> usize {
        self.stale_discards
    }

    /// Whether [`SearchOptions::max_settled`] stopped the search early.
    ///
    /// When true, distances of vertices missing from
    /// [`settle_order`](Self::settle_order) are upper bounds, not final.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Reconstructs the shortest path to `dest`, or `None` if unreachable.
    pub fn path_to(&self, dest: &V) -> Option<Path<V, W>> {
        reconstruct_path(&self.distances, &self.predecessors, dest)
    }

    /// Splits the result into its distance and predecessor maps
    pub fn into_maps(self) -> (BTreeMap<V, Distance<W>>, HashMap<V, Option<V>>) {
        (self.distances, self.predecessors)
    }
}

/// State tracked during a single Dijkstra run
struct DijkstraState<V, W> {
    finalized: HashSet<V>,
    frontier: BinaryHeap<Reverse<FrontierEntry<V, W>>>,
    distances: BTreeMap<V, Distance<W>>,
    predecessors: HashMap<V, Option<V>>,
    settle_order: Vec<V>,
    stale_discards: usize,
    truncated: bool,
}

impl<V: VertexId, W: EdgeWeight> DijkstraState<V, W> {
    /// Seeds every vertex at `Unreachable`, then the source at zero.
    fn new(graph: &Graph<V, W>, source: &V) -> Self {
        let mut distances = BTreeMap::new();
        let mut frontier = BinaryHeap::with_capacity(graph.vertex_count() + 1);
        for vertex in graph.iter_vertices() {
            distances.insert(vertex.clone(), Distance::Unreachable);
            frontier.push(Reverse(FrontierEntry {
                vertex: vertex.clone(),
                distance: Distance::Unreachable,
            }));
        }

        distances.insert(source.clone(), Distance::Finite(W::ZERO));
        frontier.push(Reverse(FrontierEntry {
            vertex: source.clone(),
            distance: Distance::Finite(W::ZERO),
        }));

        let mut predecessors = HashMap::new();
        predecessors.insert(source.clone(), None);

        Self {
            finalized: HashSet::with_capacity(graph.vertex_count()),
            frontier,
            distances,
            predecessors,
            settle_order: Vec::new(),
            stale_discards: 0,
            truncated: false,
        }
    }

    fn check_limits(&mut self, opts: &SearchOptions) -> bool {
        match opts.max_settled {
            Some(max) if self.settle_order.len() >= max => {
                self.truncated = true;
                false
            }
            _ => true,
        }
    }

    /// Relaxes every outgoing edge of a freshly finalized vertex.
    fn relax_from(&mut self, graph: &Graph<V, W>, current: &V, current_dist: W) -> Result<()> {
        for (neighbor, weight) in graph.out_edges(current) {
            if !weight.is_valid() {
                return Err(NavError::invalid_weight(current, neighbor, weight));
            }

            let Some(sum) = current_dist.checked_add(weight) else {
                return Err(NavError::distance_overflow(neighbor, current_dist, weight));
            };
            let candidate = Distance::Finite(sum);
            let Some(slot) = self.distances.get_mut(neighbor) else {
                continue;
            };
            if candidate < *slot {
                trace!(from = ?current, to = ?neighbor, distance = ?candidate, "relax");
                *slot = candidate;
                self.predecessors
                    .insert(neighbor.clone(), Some(current.clone()));
                // The old entry for `neighbor` stays in the heap and is
                // discarded as stale when popped.
                self.frontier.push(Reverse(FrontierEntry {
                    vertex: neighbor.clone(),
                    distance: candidate,
                }));
            }
        }
        Ok(())
    }

    fn finish(self, source: V) -> ShortestPaths<V, W> {
        ShortestPaths {
            source,
            distances: self.distances,
            predecessors: self.predecessors,
            settle_order: self.settle_order,
            stale_discards: self.stale_discards,
            truncated: self.truncated,
        }
    }
}

/// Single-source shortest paths from `source` over non-negative weights.
///
/// Fails with [`NavError::VertexNotFound`] when `source` is not a vertex of
/// `graph`, with [`NavError::InvalidWeight`] if a negative, NaN or infinite
/// weight is met during relaxation, and with [`NavError::DistanceOverflow`]
/// if a path length does not fit in `W`.
pub fn dijkstra<V: VertexId, W: EdgeWeight>(
    graph: &Graph<V, W>,
    source: &V,
) -> Result<ShortestPaths<V, W>> {
    dijkstra_with(graph, source, &SearchOptions::default())
}

/// [`dijkstra`] with explicit search limits.
///
/// The frontier uses lazy deletion: improved distances push a new entry and
/// superseded entries are skipped when popped for an already-finalized
/// vertex. The run ends when the frontier empties or its minimum is
/// unreachable.
#[tracing::instrument(skip(graph, source, opts), fields(source = ?source, vertices = graph.vertex_count(), edges = graph.edge_count(), max_settled = ?opts.max_settled))]
pub fn dijkstra_with<V: VertexId, W: EdgeWeight>(
    graph: &Graph<V, W>,
    source: &V,
    opts: &SearchOptions,
) -> Result<ShortestPaths<V, W>> {
    if !graph.contains_vertex(source) {
        return Err(NavError::vertex_not_found(source));
    }

    let mut state = DijkstraState::new(graph, source);

    while let Some(Reverse(FrontierEntry { vertex, distance })) = state.frontier.pop() {
        // Everything left is unreachable.
        let Distance::Finite(current_dist) = distance else {
            break;
        };

        if state.finalized.contains(&vertex) {
            state.stale_discards += 1;
            continue;
        }

        if !state.check_limits(opts) {
            break;
        }

        state.finalized.insert(vertex.clone());
        state.settle_order.push(vertex.clone());
        state.relax_from(graph, &vertex, current_dist)?;
    }

    debug!(
        settled = state.settle_order.len(),
        stale_discards = state.stale_discards,
        truncated = state.truncated,
        "dijkstra_complete"
    );

    Ok(state.finish(source.clone()))
}
