//! Shortest paths over the perimeter graph
//!
//! The perimeter graph is mirrored into a petgraph `UnGraph` weighted by
//! Euclidean edge length, and searched with `astar` under a zero heuristic
//! (Dijkstra that stops at the target).

use petgraph::algo::astar;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::graph::AdjacencyGraph;
use crate::node::Node;

/// Weighted view of the perimeter graph for repeated path queries
///
/// Node `i` of the petgraph graph is node id `i`. Ids beyond the shorter of
/// `nodes` and the adjacency graph are left out.
#[derive(Debug, Clone)]
pub struct PathFinder {
    graph: UnGraph<(), f32>,
}

impl PathFinder {
    /// Build the weighted graph once; each edge weighs its Euclidean length
    pub fn new(nodes: &[Node], graph: &AdjacencyGraph) -> Self {
        let n = graph.node_count().min(nodes.len());
        let mut weighted = UnGraph::<(), f32>::with_capacity(n, graph.edge_count());
        for _ in 0..n {
            weighted.add_node(());
        }
        for (a, b) in graph.edges().filter(|&(a, b)| a < n && b < n) {
            weighted.add_edge(
                NodeIndex::new(a),
                NodeIndex::new(b),
                nodes[a].distance_to(&nodes[b]),
            );
        }
        Self { graph: weighted }
    }

    /// Number of searchable nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Shortest path from `source` to `target`
    ///
    /// Returns the node sequence including both endpoints, or `None` if the
    /// target cannot be reached or either id is out of range.
    pub fn shortest_path(&self, source: usize, target: usize) -> Option<Vec<usize>> {
        let n = self.node_count();
        if source >= n || target >= n {
            return None;
        }

        let goal = NodeIndex::new(target);
        let (_, path) = astar(
            &self.graph,
            NodeIndex::new(source),
            |node| node == goal,
            |edge| *edge.weight(),
            |_| 0.0,
        )?;
        Some(path.into_iter().map(|ix| ix.index()).collect())
    }
}

/// Shortest path from `source` to `target` with Euclidean edge weights
///
/// One-off form of [`PathFinder::shortest_path`]. Build a [`PathFinder`]
/// instead when querying the same graph repeatedly.
pub fn shortest_path(
    nodes: &[Node],
    graph: &AdjacencyGraph,
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    PathFinder::new(nodes, graph).shortest_path(source, target)
}

/// Total Euclidean length of a node path
pub fn path_length(nodes: &[Node], path: &[usize]) -> f32 {
    path.windows(2)
        .map(|w| nodes[w[0]].distance_to(&nodes[w[1]]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn nodes_at(points: &[(i32, i32)]) -> Vec<Node> {
        points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Node::new(id, 0, 0, IVec2::new(x, y)))
            .collect()
    }

    fn graph_with(node_count: usize, edges: &[(usize, usize)]) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(node_count);
        for &(a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    #[test]
    fn test_prefers_shorter_detour() {
        //   1 ------ 2
        //   |        |
        //   0 - 3 -- 4
        let nodes = nodes_at(&[(0, 0), (0, 10), (10, 10), (3, 0), (10, 0)]);
        let graph = graph_with(5, &[(0, 1), (1, 2), (2, 4), (0, 3), (3, 4)]);

        let path = shortest_path(&nodes, &graph, 0, 4).unwrap();
        assert_eq!(path, vec![0, 3, 4]);
        assert_eq!(path_length(&nodes, &path), 10.0);
    }

    #[test]
    fn test_same_source_and_target() {
        let nodes = nodes_at(&[(0, 0), (1, 0)]);
        let graph = graph_with(2, &[(0, 1)]);
        assert_eq!(shortest_path(&nodes, &graph, 1, 1), Some(vec![1]));
    }

    #[test]
    fn test_unreachable_returns_none() {
        let nodes = nodes_at(&[(0, 0), (1, 0), (5, 5), (6, 5)]);
        let graph = graph_with(4, &[(0, 1), (2, 3)]);
        assert_eq!(shortest_path(&nodes, &graph, 0, 3), None);
        assert_eq!(shortest_path(&nodes, &graph, 0, 42), None);
    }

    #[test]
    fn test_path_is_walkable() {
        let nodes = nodes_at(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        let graph = graph_with(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let path = shortest_path(&nodes, &graph, 4, 0).unwrap();

        assert_eq!(path, vec![4, 3, 2, 1, 0]);
        assert!(path.windows(2).all(|w| graph.contains_edge(w[0], w[1])));
    }

    #[test]
    fn test_path_finder_reuse() {
        let nodes = nodes_at(&[(0, 0), (0, 10), (10, 10), (3, 0), (10, 0)]);
        let graph = graph_with(5, &[(0, 1), (1, 2), (2, 4), (0, 3), (3, 4)]);
        let finder = PathFinder::new(&nodes, &graph);

        assert_eq!(finder.node_count(), 5);
        assert_eq!(finder.shortest_path(1, 3), Some(vec![1, 0, 3]));
        assert_eq!(finder.shortest_path(2, 3), Some(vec![2, 4, 3]));
        assert_eq!(finder.shortest_path(0, 5), None);
    }

    #[test]
    fn test_edges_beyond_node_list_ignored() {
        // adjacency knows 3 nodes, positions only 2
        let nodes = nodes_at(&[(0, 0), (1, 0)]);
        let graph = graph_with(3, &[(0, 1), (1, 2)]);
        let finder = PathFinder::new(&nodes, &graph);

        assert_eq!(finder.node_count(), 2);
        assert_eq!(finder.shortest_path(0, 1), Some(vec![0, 1]));
        assert_eq!(finder.shortest_path(0, 2), None);
    }
}
