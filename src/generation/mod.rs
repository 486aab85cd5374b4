//! Tessellation generation
//!
//! Places hexagons on an offset lattice, resolves their corners to shared
//! nodes and derives the perimeter graph from the cell boundaries.

mod dedup;
mod lattice;
mod perimeter;

pub use dedup::NodeRegistry;
pub use lattice::{generate_centers, LatticeSpacing};
pub use perimeter::build_perimeter_graph;

use glam::Vec2;
use tracing::debug;

use crate::cell::{hex_vertex_offsets, HexCell, HEX_SIDES};
use crate::config::validate_layout;
use crate::error::Result;
use crate::node::Node;

/// Cells and deduplicated corner nodes of one tessellation
///
/// `cells[i].nodes` holds the node id of each corner of cell `i` in angular
/// order.
#[derive(Debug, Clone, Default)]
pub struct Tessellation {
    /// Cells in row-major placement order
    pub cells: Vec<HexCell>,
    /// Canonical nodes in order of first discovery
    pub nodes: Vec<Node>,
}

impl Tessellation {
    /// Number of corner collisions resolved during deduplication
    pub fn shared_corner_count(&self) -> usize {
        self.cells.len() * HEX_SIDES - self.nodes.len()
    }
}

/// Build a tessellation of `cell_count` hexagons over a `cols x rows` grid
///
/// # Errors
///
/// Returns `InvalidConfig` if the parameters are rejected by
/// [`validate_layout`]; no partial tessellation is produced.
///
/// # Example
///
/// ```
/// use hex_relay_mesh::generation::build_tessellation;
/// use glam::Vec2;
///
/// // two cells sharing one edge
/// let tessellation = build_tessellation(1, 2, 2, 44.0, Vec2::ZERO).unwrap();
/// assert_eq!(tessellation.cells.len(), 2);
/// assert_eq!(tessellation.nodes.len(), 10);
/// ```
pub fn build_tessellation(
    rows: usize,
    cols: usize,
    cell_count: usize,
    radius: f32,
    origin: Vec2,
) -> Result<Tessellation> {
    validate_layout(rows, cols, cell_count, radius)?;

    let offsets = hex_vertex_offsets(radius);
    let centers = generate_centers(rows, cols, cell_count, radius, origin);
    let mut registry = NodeRegistry::with_cell_capacity(centers.len());

    let cells: Vec<HexCell> = centers
        .iter()
        .enumerate()
        .map(|(id, &center)| {
            let mut nodes = [0; HEX_SIDES];
            for (k, offset) in offsets.iter().enumerate() {
                nodes[k] = registry.resolve(center + *offset, id, k);
            }
            HexCell::new(id, center.as_vec2(), radius, nodes)
        })
        .collect();

    let tessellation = Tessellation {
        cells,
        nodes: registry.into_nodes(),
    };

    debug!(
        cells = tessellation.cells.len(),
        nodes = tessellation.nodes.len(),
        shared = tessellation.shared_corner_count(),
        "built tessellation"
    );

    Ok(tessellation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use std::collections::HashSet;

    #[test]
    fn test_two_cells_share_an_edge() {
        let tessellation = build_tessellation(1, 2, 2, 44.0, Vec2::new(70.0, 70.0)).unwrap();

        assert_eq!(tessellation.nodes.len(), 10);
        assert_eq!(tessellation.shared_corner_count(), 2);

        let a: HashSet<_> = tessellation.cells[0].nodes.iter().copied().collect();
        let b: HashSet<_> = tessellation.cells[1].nodes.iter().copied().collect();
        assert_eq!(a.intersection(&b).count(), 2);
    }

    #[test]
    fn test_classic_layout_dedup() {
        let tessellation = build_tessellation(4, 5, 20, 44.0, Vec2::new(70.0, 70.0)).unwrap();
        assert_eq!(tessellation.cells.len(), 20);

        let distinct: HashSet<_> = tessellation
            .cells
            .iter()
            .flat_map(|cell| {
                let offsets = hex_vertex_offsets(cell.radius);
                let center = cell.center.as_ivec2();
                offsets.map(|o| center + o)
            })
            .collect();
        assert_eq!(tessellation.nodes.len(), distinct.len());
    }

    #[test]
    fn test_node_ids_are_dense_and_positions_unique() {
        let tessellation = build_tessellation(3, 3, 9, 20.0, Vec2::ZERO).unwrap();

        let positions: HashSet<_> = tessellation.nodes.iter().map(|n| n.position).collect();
        assert_eq!(positions.len(), tessellation.nodes.len());
        for (i, node) in tessellation.nodes.iter().enumerate() {
            assert_eq!(node.id, i);
            assert!(tessellation.cells[node.cell].contains_node(node.id));
            assert_eq!(tessellation.cells[node.cell].nodes[node.vertex], node.id);
        }
    }

    #[test]
    fn test_corner_positions_match_formula() {
        let tessellation = build_tessellation(2, 2, 4, 44.0, Vec2::new(70.0, 70.0)).unwrap();
        for cell in &tessellation.cells {
            for (k, exact) in cell.vertex_positions().iter().enumerate() {
                let node = &tessellation.nodes[cell.nodes[k]];
                assert!(node.pos().distance(*exact) <= 1.0);
            }
        }
    }

    #[test]
    fn test_invalid_parameters_fail_fast() {
        assert!(matches!(
            build_tessellation(2, 2, 0, 44.0, Vec2::ZERO),
            Err(MeshError::InvalidConfig(_))
        ));
        assert!(matches!(
            build_tessellation(2, 2, 4, 0.0, Vec2::ZERO),
            Err(MeshError::InvalidConfig(_))
        ));
        assert!(matches!(
            build_tessellation(2, 2, 4, -44.0, Vec2::ZERO),
            Err(MeshError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_smallest_radius_keeps_corners_distinct() {
        assert!(matches!(
            build_tessellation(2, 2, 4, 0.4, Vec2::ZERO),
            Err(MeshError::InvalidConfig(_))
        ));

        let tessellation = build_tessellation(2, 2, 4, 1.5, Vec2::ZERO).unwrap();
        let graph = build_perimeter_graph(&tessellation.cells, tessellation.nodes.len());
        for cell in &tessellation.cells {
            let distinct: HashSet<usize> = cell.nodes.iter().copied().collect();
            assert_eq!(distinct.len(), HEX_SIDES);
        }
        for node in 0..graph.node_count() {
            assert!(graph.degree(node) >= 2, "node {} degree {}", node, graph.degree(node));
        }
    }
}
