//! Euclidean minimum spanning tree over terminals (Kruskal)

use petgraph::unionfind::UnionFind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::node::Node;

/// An accepted spanning tree edge between two terminals
///
/// The edge is abstract: it joins the terminals by straight-line distance and
/// is realized later as a path over the perimeter graph.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge {
    /// Lower terminal id
    pub a: usize,
    /// Higher terminal id
    pub b: usize,
    /// Euclidean distance between the terminals
    pub weight: f32,
}

/// Compute the minimum spanning tree of the complete graph on `terminals`
///
/// Candidates are enumerated as pairs `(terminals[i], terminals[j])` with
/// `i < j` and sorted by weight with a stable sort, so ties are broken by
/// enumeration order. Stops after `terminals.len() - 1` edges.
///
/// Terminal ids index into `nodes`.
pub fn kruskal(nodes: &[Node], terminals: &[usize]) -> Vec<TreeEdge> {
    let target = terminals.len().saturating_sub(1);
    if target == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<TreeEdge> = Vec::with_capacity(terminals.len() * target / 2);
    for (i, &a) in terminals.iter().enumerate() {
        for &b in &terminals[i + 1..] {
            candidates.push(TreeEdge {
                a: a.min(b),
                b: a.max(b),
                weight: nodes[a].distance_to(&nodes[b]),
            });
        }
    }
    candidates.sort_by(|x, y| x.weight.total_cmp(&y.weight));

    let mut components = UnionFind::<usize>::new(nodes.len());
    let mut tree = Vec::with_capacity(target);
    for edge in candidates {
        if components.union(edge.a, edge.b) {
            tree.push(edge);
            if tree.len() == target {
                break;
            }
        }
    }
    tree
}

/// Sum of tree edge weights
pub fn total_weight(tree: &[TreeEdge]) -> f32 {
    tree.iter().map(|e| e.weight).sum()
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

    #[test]
    fn test_unit_square_never_uses_diagonal() {
        let nodes = nodes_at(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let tree = kruskal(&nodes, &[0, 1, 2, 3]);

        assert_eq!(tree.len(), 3);
        assert_eq!(total_weight(&tree), 3.0);
        assert!(tree.iter().all(|e| e.weight == 1.0));
        // ties resolve in enumeration order: (0,1), (0,2), then (1,3)
        let pairs: Vec<_> = tree.iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 3)]);
    }

    #[test]
    fn test_hand_computed_tree() {
        // 0 --3-- 1, 2 far right, 3 below 0
        let nodes = nodes_at(&[(0, 0), (3, 0), (10, 0), (0, 4)]);
        let tree = kruskal(&nodes, &[0, 1, 2, 3]);

        let pairs: Vec<_> = tree.iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 3), (1, 2)]);
        assert_eq!(total_weight(&tree), 14.0);
    }

    #[test]
    fn test_subset_of_nodes() {
        let nodes = nodes_at(&[(0, 0), (50, 50), (2, 0), (0, 2), (60, 60)]);
        let tree = kruskal(&nodes, &[0, 2, 3]);
        assert_eq!(tree.len(), 2);
        assert!(tree.iter().all(|e| e.a != 1 && e.b != 1 && e.b != 4));
    }

    #[test]
    fn test_degenerate_inputs() {
        let nodes = nodes_at(&[(0, 0), (1, 1)]);
        assert!(kruskal(&nodes, &[]).is_empty());
        assert!(kruskal(&nodes, &[1]).is_empty());
        assert_eq!(kruskal(&nodes, &[0, 1]).len(), 1);
    }
}
