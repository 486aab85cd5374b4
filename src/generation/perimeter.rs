//! Perimeter graph construction from cell boundaries

use crate::cell::HexCell;
use crate::graph::AdjacencyGraph;

/// Build the perimeter graph: one edge per pair of consecutive cell corners
///
/// Edges shared by two cells are added once.
pub fn build_perimeter_graph(cells: &[HexCell], node_count: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(node_count);
    for cell in cells {
        for (a, b) in cell.perimeter_edges() {
            graph.add_edge(a, b);
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_single_cell_is_a_ring() {
        let cell = HexCell::new(0, Vec2::ZERO, 1.0, [0, 1, 2, 3, 4, 5]);
        let graph = build_perimeter_graph(&[cell], 6);

        assert_eq!(graph.edge_count(), 6);
        for node in 0..6 {
            assert_eq!(graph.degree(node), 2);
        }
        assert!(graph.contains_edge(5, 0));
    }

    #[test]
    fn test_shared_edge_counted_once() {
        let a = HexCell::new(0, Vec2::ZERO, 1.0, [0, 1, 2, 3, 4, 5]);
        // shares corners 0 and 1 with the first cell
        let b = HexCell::new(1, Vec2::ONE, 1.0, [6, 7, 1, 0, 8, 9]);
        let graph = build_perimeter_graph(&[a, b], 10);

        assert_eq!(graph.edge_count(), 11);
        assert_eq!(graph.degree(0), 3);
        assert_eq!(graph.degree(1), 3);
        assert!(graph.is_symmetric());
    }
}
