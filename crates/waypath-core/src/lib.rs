//! Waypath Core Library
//!
//! Graph store and single-source shortest-path engine, plus the map,
//! geometry and configuration glue used by the `waypath` navigator.
//!
//! ```
//! use waypath_core::graph::{dijkstra, Distance, Graph};
//!
//! let mut g: Graph<i64, f64> = Graph::new();
//! for v in [1, 2, 3] {
//!     g.add_vertex(v);
//! }
//! g.add_edge(1, 2, 5.0);
//! g.add_edge(1, 3, 2.0);
//! g.add_edge(3, 2, 1.0);
//!
//! let paths = dijkstra(&g, &1).unwrap();
//! assert_eq!(paths.distance(&2), Distance::Finite(3.0));
//! assert_eq!(paths.path_to(&2).unwrap().to_string(), "1->3->2");
//! ```

pub mod config;
pub mod error;
pub mod geo;
pub mod graph;
pub mod logging;
pub mod map;
