use crate::graph::NodeIndex;

pub mod dijkstra;
pub mod route;

/// Walks the predecessor labels from `target` back to `source` and
/// returns the locations in source-to-target order. Only valid once
/// `target` carries a finite distance label.
pub(crate) fn reconstruct_path(
    prev: &[Option<NodeIndex>],
    source: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![target];
    let mut current = target;

    while let Some(prev_node) = prev[current.index()] {
        path.push(prev_node);
        current = prev_node;
    }
    debug_assert_eq!(current, source);

    path.reverse();
    path
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_nodes: Vec<usize>,
    expected_total: crate::constants::Weight,
    result: Result<Option<route::Route>, crate::error::GraphError>,
) {
    let route = result.expect("search failed").expect("expected a path");
    let nodes: Vec<usize> = route.nodes.iter().map(|n| n.index()).collect();
    assert_eq!(expected_nodes, nodes);
    assert_eq!(expected_total, route.total_distance);
    assert_eq!(
        expected_total,
        route
            .steps
            .iter()
            .map(|step| step.distance)
            .sum::<crate::constants::Weight>()
    );
}

#[cfg(test)]
pub(crate) fn assert_no_path(
    result: Result<Option<route::Route>, crate::error::GraphError>,
) {
    assert!(result.expect("search failed").is_none());
}
