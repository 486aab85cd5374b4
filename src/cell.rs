//! Hexagonal Cell Structure
//!
//! Represents one flat-top hexagon of the tessellation and the canonical nodes
//! sitting on its corners.

use glam::{IVec2, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of corners of a hexagon
pub const HEX_SIDES: usize = 6;

/// `sin 60°`
const SIN_60: f32 = 0.866_025_4;

/// Rounded offsets from a cell center to each of its six corners
///
/// Corner `k` lies at angle `60° * k`, so corner 0 points along +x and the
/// corners run in increasing angle order. Offsets are rounded to whole units,
/// which is what makes corners shared by neighbouring cells produce identical
/// integer coordinates.
///
/// Only three magnitudes are rounded (`r`, `r·cos 60°`, `r·sin 60°`) and the
/// six offsets are built from them by sign, so the result is exactly
/// symmetric whatever trigonometric rounding would have done per angle.
pub fn hex_vertex_offsets(radius: f32) -> [IVec2; HEX_SIDES] {
    let a = radius.round() as i32;
    let b = (radius * 0.5).round() as i32;
    let c = (radius * SIN_60).round() as i32;
    [
        IVec2::new(a, 0),
        IVec2::new(b, c),
        IVec2::new(-b, c),
        IVec2::new(-a, 0),
        IVec2::new(-b, -c),
        IVec2::new(b, -c),
    ]
}

/// A single hexagon of the tessellation
///
/// Corner geometry is not owned by the cell: each corner resolves to a shared
/// [`Node`](crate::Node), and `nodes[k]` is the node id of corner `k`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    /// Unique identifier for this cell (0 to cell_count-1), in row-major order
    pub id: usize,

    /// Center of the hexagon in drawing coordinates
    pub center: Vec2,

    /// Circumradius
    pub radius: f32,

    /// Node ids of the six corners, in angular order
    pub nodes: [usize; HEX_SIDES],
}

impl HexCell {
    /// Create a new cell
    ///
    /// This is typically called during tessellation, not by user code.
    pub fn new(id: usize, center: Vec2, radius: f32, nodes: [usize; HEX_SIDES]) -> Self {
        Self {
            id,
            center,
            radius,
            nodes,
        }
    }

    /// Exact (unrounded) corner positions, `center + radius * (cos 60k°, sin 60k°)`
    pub fn vertex_positions(&self) -> [Vec2; HEX_SIDES] {
        let mut vertices = [Vec2::ZERO; HEX_SIDES];
        for (k, vertex) in vertices.iter_mut().enumerate() {
            let angle = (60.0 * k as f32).to_radians();
            *vertex = self.center + self.radius * Vec2::new(angle.cos(), angle.sin());
        }
        vertices
    }

    /// Check if a node sits on one of this cell's corners
    #[inline]
    pub fn contains_node(&self, node_id: usize) -> bool {
        self.nodes.contains(&node_id)
    }

    /// The six boundary edges as node id pairs `(corner k, corner k+1 mod 6)`
    pub fn perimeter_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..HEX_SIDES).map(move |k| (self.nodes[k], self.nodes[(k + 1) % HEX_SIDES]))
    }

    /// Area of the regular hexagon, `3√3/2 · r²`
    pub fn area(&self) -> f32 {
        1.5 * 3.0_f32.sqrt() * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_radius_44() {
        let offsets = hex_vertex_offsets(44.0);
        assert_eq!(offsets[0], IVec2::new(44, 0));
        assert_eq!(offsets[1], IVec2::new(22, 38));
        assert_eq!(offsets[2], IVec2::new(-22, 38));
        assert_eq!(offsets[3], IVec2::new(-44, 0));
        assert_eq!(offsets[4], IVec2::new(-22, -38));
        assert_eq!(offsets[5], IVec2::new(22, -38));
    }

    #[test]
    fn test_perimeter_edges_wrap() {
        let cell = HexCell::new(0, Vec2::ZERO, 10.0, [10, 11, 12, 13, 14, 15]);
        let edges: Vec<_> = cell.perimeter_edges().collect();

        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0], (10, 11));
        assert_eq!(edges[5], (15, 10));
        assert!(cell.contains_node(13));
        assert!(!cell.contains_node(16));
    }

    #[test]
    fn test_vertex_positions_on_circle() {
        let cell = HexCell::new(0, Vec2::new(5.0, -3.0), 20.0, [0; HEX_SIDES]);
        for vertex in cell.vertex_positions() {
            assert!((vertex.distance(cell.center) - 20.0).abs() < 1e-4);
        }
        assert!((cell.vertex_positions()[0] - Vec2::new(25.0, -3.0)).length() < 1e-4);
    }

    #[test]
    fn test_area() {
        let cell = HexCell::new(0, Vec2::ZERO, 2.0, [0; HEX_SIDES]);
        let expected = 6.0 * 3.0_f32.sqrt();
        assert!((cell.area() - expected).abs() < 1e-4);
    }
}
