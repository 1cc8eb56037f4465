use serde::Serialize;

use crate::constants::Weight;
use crate::error::GraphError;
use crate::graph::{Graph, NodeIndex};

/// One leg of a route. Step numbers are the 1-based position in
/// [`Route::steps`].
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct RouteStep {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub distance: Weight,
}

/// Result of a successful shortest-path query, in source-to-destination
/// order. A query with source == destination yields a single node and
/// no steps.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Route {
    pub nodes: Vec<NodeIndex>,
    pub steps: Vec<RouteStep>,
    pub total_distance: Weight,
}

impl Route {
    /// Derives the per-step distances for a reconstructed node sequence
    /// by looking the connecting edges up again in the graph.
    pub(crate) fn from_nodes(
        graph: &Graph,
        nodes: Vec<NodeIndex>,
        total_distance: Weight,
    ) -> Result<Self, GraphError> {
        let mut steps = Vec::with_capacity(nodes.len().saturating_sub(1));

        for pair in nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let distance =
                graph
                    .edge_weight(from, to)
                    .ok_or(GraphError::MissingStepEdge {
                        from: from.index(),
                        to: to.index(),
                    })?;
            steps.push(RouteStep { from, to, distance });
        }

        debug_assert_eq!(
            total_distance,
            steps.iter().map(|step| step.distance).sum::<Weight>()
        );

        Ok(Route {
            nodes,
            steps,
            total_distance,
        })
    }
}
