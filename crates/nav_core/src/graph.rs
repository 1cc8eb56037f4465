use std::path::Path;

use anyhow::Context;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::error::GraphError;

/// Location identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeIndex {
    fn from(ix: u32) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named point on the campus map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Location { name: name.into() }
    }
}

/// Directed connection between two locations. Undirected walkways are
/// stored as two edges with the same weight, one per direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Adjacency-indexed campus graph. Built once by the caller, read-only
/// during queries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub locations: Vec<Location>,
    pub edges: Vec<Edge>,
    edges_out: Vec<Vec<EdgeIndex>>,
    name_index: FxHashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            locations: Vec::new(),
            edges: Vec::new(),
            edges_out: Vec::new(),
            name_index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_locations: usize, num_edges: usize) -> Self {
        Self {
            locations: Vec::with_capacity(num_locations),
            edges: Vec::with_capacity(num_edges),
            edges_out: Vec::with_capacity(num_locations),
            name_index: FxHashMap::with_capacity_and_hasher(num_locations, Default::default()),
        }
    }

    /// Adds a new location to the graph.
    ///
    /// Fails if a location with the same name already exists; names
    /// must stay unique so `index_of` has a single answer.
    pub fn add_location(&mut self, location: Location) -> Result<NodeIndex, GraphError> {
        if self.name_index.contains_key(&location.name) {
            return Err(GraphError::DuplicateName(location.name));
        }

        let node_idx = NodeIndex::new(self.locations.len());

        // Create new entry in adjacency list for new location
        self.edges_out.push(Vec::new());
        self.name_index.insert(location.name.clone(), node_idx);
        self.locations.push(location);

        Ok(node_idx)
    }

    /// Renames an existing location slot.
    pub fn set_name(&mut self, node_idx: NodeIndex, name: &str) -> Result<(), GraphError> {
        let len = self.locations.len();
        if node_idx.index() >= len {
            return Err(GraphError::IndexOutOfRange {
                index: node_idx.index(),
                len,
            });
        }
        if let Some(&existing) = self.name_index.get(name) {
            if existing != node_idx {
                return Err(GraphError::DuplicateName(name.to_string()));
            }
        }

        let old = std::mem::replace(&mut self.locations[node_idx.index()].name, name.to_string());
        self.name_index.remove(&old);
        self.name_index.insert(name.to_string(), node_idx);

        Ok(())
    }

    /// Add a new `edge` to the graph.
    ///
    /// Both endpoints must already exist and the weight must be
    /// positive. If an edge between the same ordered pair already
    /// exists and the new edge is cheaper, the old weight is updated in
    /// place instead of storing a parallel edge.
    ///
    /// Returns the index of the edge that carries the weight.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeIndex, GraphError> {
        let len = self.locations.len();
        for endpoint in [edge.source, edge.target] {
            if endpoint.index() >= len {
                return Err(GraphError::IndexOutOfRange {
                    index: endpoint.index(),
                    len,
                });
            }
        }
        if edge.weight == 0 {
            return Err(GraphError::NonPositiveWeight);
        }

        for edge_idx in &self.edges_out[edge.source.index()] {
            let old_edge = &self.edges[edge_idx.index()];
            if edge.target == old_edge.target && edge.weight < old_edge.weight {
                let edge_idx = *edge_idx;
                self.edges[edge_idx.index()].weight = edge.weight;
                return Ok(edge_idx);
            }
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        self.edges_out[edge.source.index()].push(edge_idx);
        self.edges.push(edge);

        Ok(edge_idx)
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) -> Result<(), GraphError> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Resolves a display name to its location index. Matching is exact
    /// string equality, no case folding or trimming.
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.name_index.get(name).copied()
    }

    pub fn location(&self, node_idx: NodeIndex) -> Option<&Location> {
        self.locations.get(node_idx.index())
    }

    pub fn name(&self, node_idx: NodeIndex) -> Option<&str> {
        self.location(node_idx).map(|location| location.name.as_str())
    }

    /// Returns an iterator over all locations of the graph
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Outgoing edges of `node_idx` in insertion order.
    ///
    /// **Panics** if the location does not exist.
    pub fn neighbors_outgoing(&self, node_idx: NodeIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.edges_out[node_idx.index()]
            .iter()
            .map(move |edge_idx| &self.edges[edge_idx.index()])
    }

    /// Weight of the first stored edge from `source` to `target`, or
    /// `None` if no direct edge exists. Insertion order decides between
    /// parallel edges, so the answer is deterministic.
    pub fn edge_weight(&self, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        let out = self.edges_out.get(source.index())?;
        out.iter()
            .map(|edge_idx| &self.edges[edge_idx.index()])
            .find(|edge| edge.target == target)
            .map(|edge| edge.weight)
    }

    /// Builds a graph from two CSV files: a `name` column of locations
    /// (row order becomes the index) and `source,target,distance`
    /// walkways by name. Each walkway row is inserted in both
    /// directions. Unknown names or non-positive distances fail the
    /// whole construction.
    pub fn from_csv(path_to_locations: &Path, path_to_paths: &Path) -> anyhow::Result<Self> {
        #[derive(Deserialize)]
        struct LocationRecord {
            name: String,
        }

        #[derive(Deserialize)]
        struct PathRecord {
            source: String,
            target: String,
            distance: Weight,
        }

        let mut g = Graph::new();

        let mut reader = csv::Reader::from_path(path_to_locations)?;
        for result in reader.deserialize() {
            let record: LocationRecord = result.context("Failed to parse location")?;
            g.add_location(Location::new(record.name))?;
        }

        let mut reader = csv::Reader::from_path(path_to_paths)?;
        for result in reader.deserialize() {
            let record: PathRecord = result.context("Failed to parse walkway")?;
            let source = g
                .index_of(&record.source)
                .ok_or_else(|| GraphError::UnknownName(record.source.clone()))?;
            let target = g
                .index_of(&record.target)
                .ok_or_else(|| GraphError::UnknownName(record.target.clone()))?;

            g.add_edge(Edge::new(source, target, record.distance))?;
            g.add_edge(Edge::new(target, source, record.distance))?;
        }

        info!(
            "Graph has {} locations and {} edges",
            g.locations.len(),
            g.edges.len()
        );

        Ok(g)
    }
}

/// Macro to create an edge from source to target with a weight
///
/// edge!(a, b, 100) Returns edges in both directions
///
/// edge!(a => b, 100) Returns a directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source, $target, $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::new($source, $target, $weight),
            $crate::graph::Edge::new($target, $source, $weight),
        ]
    };
}
