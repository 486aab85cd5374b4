//! Perimeter adjacency graph
//!
//! An undirected graph over node ids, stored as one sorted neighbor list per
//! node so that every relation is a plain index into the node arena.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Undirected, simple graph over dense node ids
///
/// Invariants:
/// - no self-loops
/// - no parallel edges (each neighbor appears once per list)
/// - symmetric: `b` is in `neighbors(a)` iff `a` is in `neighbors(b)`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Create a graph with `node_count` nodes and no edges
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Add the undirected edge `a - b`
    ///
    /// Returns `true` if the edge was new. Existing edges, self-loops and out
    /// of range ids are ignored.
    pub fn add_edge(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.adjacency.len() || b >= self.adjacency.len() {
            return false;
        }
        let slot = match self.adjacency[a].binary_search(&b) {
            Ok(_) => return false,
            Err(slot) => slot,
        };
        self.adjacency[a].insert(slot, b);
        if let Err(slot) = self.adjacency[b].binary_search(&a) {
            self.adjacency[b].insert(slot, a);
        }
        true
    }

    /// Neighbor ids of a node, in ascending order
    ///
    /// Returns an empty slice if the node id is invalid.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency
            .get(node)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether `a` and `b` are adjacent
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Number of neighbors of a node
    #[inline]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Number of nodes
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Every undirected edge once, as `(low id, high id)`, in ascending order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }

    /// Verify the symmetry invariant
    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .enumerate()
            .all(|(a, neighbors)| neighbors.iter().all(|&b| self.contains_edge(b, a)))
    }
}
