//! Coordinate-keyed corner deduplication

use glam::IVec2;
use std::collections::HashMap;

use crate::node::Node;

/// Assigns one node id per distinct rounded corner coordinate
///
/// Lookups are keyed by the exact integer coordinate, so resolving every
/// corner of every cell is linear in the number of cells.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    index: HashMap<IVec2, usize>,
    nodes: Vec<Node>,
}

impl NodeRegistry {
    /// Create an empty registry sized for `cell_count` hexagons
    pub fn with_cell_capacity(cell_count: usize) -> Self {
        // interior corners are shared by three cells
        let expected = cell_count * 2 + 4;
        Self {
            index: HashMap::with_capacity(expected),
            nodes: Vec::with_capacity(expected),
        }
    }

    /// Resolve a corner to its node id, creating the node on first sight
    pub fn resolve(&mut self, position: IVec2, cell: usize, vertex: usize) -> usize {
        let nodes = &mut self.nodes;
        *self.index.entry(position).or_insert_with(|| {
            let id = nodes.len();
            nodes.push(Node::new(id, cell, vertex, position));
            id
        })
    }

    /// Number of distinct nodes registered
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node has been registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finish registration and return the node list
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
