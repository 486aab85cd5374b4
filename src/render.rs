//! Render data export for HexCluster
//!
//! Produces engine-agnostic index and position arrays. Visual encoding
//! (colors, sizes, fading) is left to the presentation layer.

use crate::cell::HEX_SIDES;
use crate::cluster::HexCluster;

/// Snapshot of everything a presentation layer needs to draw a cluster
///
/// All node references are indices into `positions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderData {
    /// Node positions (2D drawing coordinates), indexed by node id
    pub positions: Vec<[f32; 2]>,
    /// Cell outlines as a line list: pairs of node indices
    pub outline_indices: Vec<u32>,
    /// Corner node indices of each cell, in angular order
    pub cell_corners: Vec<[u32; HEX_SIDES]>,
    /// Terminal node indices
    pub terminals: Vec<u32>,
    /// Relay node indices
    pub relays: Vec<u32>,
    /// Realized edges as a line list: pairs of node indices
    pub edge_indices: Vec<u32>,
}

impl RenderData {
    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of outline segments
    pub fn outline_segment_count(&self) -> usize {
        self.outline_indices.len() / 2
    }

    /// Get the number of realized edge segments
    pub fn edge_segment_count(&self) -> usize {
        self.edge_indices.len() / 2
    }

    /// Check if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Export the current state of a cluster
///
/// Cell outlines come from the perimeter graph, so an edge shared by two
/// cells is emitted once.
pub fn generate_render_data(cluster: &HexCluster) -> RenderData {
    let positions = cluster
        .nodes()
        .iter()
        .map(|node| node.pos().to_array())
        .collect();

    let cell_corners = cluster
        .cells()
        .iter()
        .map(|cell| cell.nodes.map(|id| id as u32))
        .collect();

    let outline_indices = cluster
        .graph()
        .edges()
        .flat_map(|(a, b)| [a as u32, b as u32])
        .collect();

    let solution = cluster.solution();
    let edge_indices = solution
        .edges()
        .iter()
        .flat_map(|edge| [edge.low() as u32, edge.high() as u32])
        .collect();

    RenderData {
        positions,
        outline_indices,
        cell_corners,
        terminals: solution.terminals().iter().map(|id| id as u32).collect(),
        relays: solution.relays().iter().map(|&id| id as u32).collect(),
        edge_indices,
    }
}
