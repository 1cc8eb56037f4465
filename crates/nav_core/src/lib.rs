//! Core of the campus navigation system: a weighted, effectively
//! undirected graph of named locations and a shortest-path engine that
//! turns a (source, destination) query into turn-by-turn route steps.
//!
//! # Basic usage
//! ```
//! use nav_core::{edge, prelude::*};
//!
//! // Build the graph once
//! let mut g = Graph::new();
//! let gate = g.add_location(Location::new("Gate")).unwrap();
//! let library = g.add_location(Location::new("Library")).unwrap();
//! g.add_edges(edge!(gate, library, 100)).unwrap();
//!
//! // Query it as often as needed
//! let mut dijkstra = Dijkstra::new(&g);
//! let route = dijkstra.search(gate, library).unwrap().expect("path exists");
//!
//! assert_eq!(route.total_distance, 100);
//! assert_eq!(route.steps.len(), 1);
//! ```
//!
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
