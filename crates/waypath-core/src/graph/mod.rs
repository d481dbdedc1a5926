//! Graph storage and shortest-path operations
//!
//! - `store`: generic directed, weighted graph container
//! - `dijkstra`: single-source shortest paths with a lazy-deletion frontier
//! - `path`: path reconstruction from a predecessor map
//! - `types`: vertex/weight capability traits and the distance sentinel

pub mod dijkstra;
pub mod path;
pub mod store;
pub mod types;

pub use dijkstra::{dijkstra, dijkstra_with, FrontierEntry, ShortestPaths};
pub use path::{reconstruct_path, Path};
pub use store::Graph;
pub use types::{Distance, EdgeWeight, SearchOptions, VertexId};
