use log::{debug, info};

use crate::constants::{Weight, INFINITY};
use crate::error::GraphError;
use crate::graph::{node_index, Graph, NodeIndex};
use crate::search::route::Route;
use crate::statistics::SearchStats;

/// Label-setting single-source shortest-path search.
///
/// Uses the O(N²) scan-minimum variant: the campus graphs this serves
/// are a handful of locations, so dense `dist`/`prev`/`visited` arrays
/// beat a priority queue. All working state is local to one `search`
/// call; the borrowed graph is never mutated.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Computes the minimum-distance route from `source` to `target`.
    ///
    /// Returns `Ok(None)` when `target` is unreachable; that is a
    /// normal outcome, not an error. Out-of-range indices are rejected
    /// before the search runs.
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<Option<Route>, GraphError> {
        let n = self.g.locations.len();
        for endpoint in [source, target] {
            if endpoint.index() >= n {
                return Err(GraphError::IndexOutOfRange {
                    index: endpoint.index(),
                    len: n,
                });
            }
        }

        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(Some(Route {
                nodes: vec![source],
                steps: Vec::new(),
                total_distance: 0,
            }));
        }

        let mut dist: Vec<Weight> = vec![INFINITY; n];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
        let mut visited = vec![false; n];
        dist[source.index()] = 0;

        for _ in 0..n {
            // Select the unvisited location with the smallest finite
            // label. The strict `<` keeps the lowest index on ties.
            let mut u = None;
            let mut min_dist = INFINITY;
            for j in 0..n {
                if !visited[j] && dist[j] < min_dist {
                    min_dist = dist[j];
                    u = Some(j);
                }
            }

            // Everything still unvisited is unreachable from source
            let Some(u) = u else { break };

            visited[u] = true;
            self.stats.nodes_settled += 1;

            for edge in self.g.neighbors_outgoing(node_index(u)) {
                let v = edge.target.index();
                let new_distance = dist[u].saturating_add(edge.weight);
                if !visited[v] && new_distance < dist[v] {
                    dist[v] = new_distance;
                    prev[v] = Some(node_index(u));
                }
            }
        }
        self.stats.finish();

        if dist[target.index()] == INFINITY {
            info!("No path found: {}", self.stats);
            return Ok(None);
        }

        let nodes = super::reconstruct_path(&prev, source, target);
        let route = Route::from_nodes(self.g, nodes, dist[target.index()])?;

        debug!("Path found: {:?}", route.nodes);
        info!("Path found: {}", self.stats);

        Ok(Some(route))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::edge;
    use crate::graph::Location;
    use crate::search::{assert_no_path, assert_path};
    use crate::util::test_graphs::{graph_campus, graph_two_yards};

    #[test]
    fn campus_gate_to_cafeteria() {
        let g = graph_campus();
        let mut d = Dijkstra::new(&g);

        // 100 + 30 + 80 beats both detours through Admin
        assert_path(
            vec![0, 1, 3, 4],
            210,
            d.search(node_index(0), node_index(4)),
        );
    }

    #[test]
    fn campus_gate_to_admin() {
        let g = graph_campus();
        let mut d = Dijkstra::new(&g);

        // Going through the Library (100 + 50) beats the direct 200m edge
        assert_path(
            vec![0, 1, 2],
            150,
            d.search(node_index(0), node_index(2)),
        );
    }

    #[test]
    fn campus_routes_are_symmetric() {
        let g = graph_campus();
        let mut d = Dijkstra::new(&g);

        for a in 0..g.locations.len() {
            for b in 0..g.locations.len() {
                let there = d.search(node_index(a), node_index(b)).unwrap().unwrap();
                let back = d.search(node_index(b), node_index(a)).unwrap().unwrap();
                assert_eq!(there.total_distance, back.total_distance);
            }
        }
    }

    #[test]
    fn same_source_and_target() {
        let g = graph_campus();
        let mut d = Dijkstra::new(&g);

        let route = d.search(node_index(3), node_index(3)).unwrap().unwrap();
        assert_eq!(route.nodes, vec![node_index(3)]);
        assert!(route.steps.is_empty());
        assert_eq!(route.total_distance, 0);
    }

    #[test]
    fn disconnected_graph() {
        let g = graph_two_yards();
        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search(node_index(0), node_index(3)));
        assert_no_path(d.search(node_index(3), node_index(0)));
        assert_path(vec![0, 1, 2], 2, d.search(node_index(0), node_index(2)));
        assert_path(vec![3, 4, 5], 4, d.search(node_index(3), node_index(5)));
    }

    #[test]
    fn directed_one_way() {
        // 0 -> 1 -> 2, no way back
        let mut g = Graph::new();
        let a = g.add_location(Location::new("A")).unwrap();
        let b = g.add_location(Location::new("B")).unwrap();
        let c = g.add_location(Location::new("C")).unwrap();
        g.add_edge(edge!(a => b, 1)).unwrap();
        g.add_edge(edge!(b => c, 1)).unwrap();

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 1, 2], 2, d.search(a, c));
        assert_no_path(d.search(c, a));
    }

    #[test]
    fn go_around() {
        // 0 -> 1
        // |    |
        // 2 -> 3
        let mut g = Graph::new();
        let a = g.add_location(Location::new("A")).unwrap();
        let b = g.add_location(Location::new("B")).unwrap();
        let c = g.add_location(Location::new("C")).unwrap();
        let d = g.add_location(Location::new("D")).unwrap();

        g.add_edge(edge!(a => b, 10)).unwrap();
        g.add_edge(edge!(a => c, 1)).unwrap();
        g.add_edge(edge!(c => d, 1)).unwrap();
        g.add_edge(edge!(d => b, 1)).unwrap();

        let mut dijkstra = Dijkstra::new(&g);

        assert_path(vec![0, 2, 3, 1], 3, dijkstra.search(a, b));
    }

    #[test]
    fn out_of_range_rejected() {
        let g = graph_campus();
        let mut d = Dijkstra::new(&g);

        assert_eq!(
            d.search(node_index(0), node_index(9)),
            Err(GraphError::IndexOutOfRange { index: 9, len: 5 })
        );
        assert_eq!(
            d.search(node_index(9), node_index(0)),
            Err(GraphError::IndexOutOfRange { index: 9, len: 5 })
        );
    }

    /// Minimum cost over all simple paths, by exhaustive search.
    fn brute_force(g: &Graph, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        fn visit(
            g: &Graph,
            current: NodeIndex,
            target: NodeIndex,
            seen: &mut Vec<bool>,
            cost: Weight,
            best: &mut Option<Weight>,
        ) {
            if current == target {
                if best.map_or(true, |b| cost < b) {
                    *best = Some(cost);
                }
                return;
            }
            seen[current.index()] = true;
            for edge in g.neighbors_outgoing(current) {
                if !seen[edge.target.index()] {
                    visit(g, edge.target, target, seen, cost + edge.weight, best);
                }
            }
            seen[current.index()] = false;
        }

        let mut best = None;
        let mut seen = vec![false; g.locations.len()];
        visit(g, source, target, &mut seen, 0, &mut best);
        best
    }

    fn arbitrary_graph() -> impl Strategy<Value = Graph> {
        prop::collection::vec((0..6usize, 0..6usize, 1..50u32), 1..20).prop_map(|raw_edges| {
            let mut g = Graph::new();
            for i in 0..6 {
                g.add_location(Location::new(format!("L{i}"))).unwrap();
            }
            for (a, b, w) in raw_edges {
                if a == b {
                    continue;
                }
                g.add_edges(edge!(node_index(a), node_index(b), w)).unwrap();
            }
            g
        })
    }

    proptest! {
        #[test]
        fn total_matches_brute_force(g in arbitrary_graph()) {
            let mut d = Dijkstra::new(&g);
            for s in 0..6 {
                for t in 0..6 {
                    let route = d.search(node_index(s), node_index(t)).unwrap();
                    let expected = brute_force(&g, node_index(s), node_index(t));
                    prop_assert_eq!(route.map(|r| r.total_distance), expected);
                }
            }
        }

        #[test]
        fn undirected_distances_are_symmetric(g in arbitrary_graph()) {
            let mut d = Dijkstra::new(&g);
            for s in 0..6 {
                for t in 0..6 {
                    let there = d.search(node_index(s), node_index(t)).unwrap();
                    let back = d.search(node_index(t), node_index(s)).unwrap();
                    prop_assert_eq!(
                        there.map(|r| r.total_distance),
                        back.map(|r| r.total_distance)
                    );
                }
            }
        }

        #[test]
        fn step_distances_sum_to_total(g in arbitrary_graph()) {
            let mut d = Dijkstra::new(&g);
            for s in 0..6 {
                for t in 0..6 {
                    if let Some(route) = d.search(node_index(s), node_index(t)).unwrap() {
                        let sum: Weight = route.steps.iter().map(|step| step.distance).sum();
                        prop_assert_eq!(sum, route.total_distance);
                    }
                }
            }
        }
    }
}
