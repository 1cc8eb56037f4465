//! Re-exports of the most commonly used items in `nav_core`.
pub use crate::error::GraphError;
pub use crate::graph::{node_index, Edge, Graph, Location, NodeIndex};
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::route::{Route, RouteStep};

pub use crate::search;
