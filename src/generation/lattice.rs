//! Offset-column hexagon lattice
//!
//! Flat-top hexagons tile the plane when columns are spaced `1.5·r` apart and
//! rows `√3·r` apart, with every odd column pushed down by half a row.
//!
//! Spacings are derived from the rounded corner offsets rather than from the
//! exact formulas, so that two neighbouring cells compute the same integer
//! coordinate for the corner they share.

use glam::{IVec2, Vec2};

use crate::cell::hex_vertex_offsets;

/// Integer spacing of the lattice for a given radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeSpacing {
    /// Distance between column centers (≈ 1.5·r)
    pub horizontal: i32,
    /// Distance between row centers (≈ √3·r)
    pub vertical: i32,
}

impl LatticeSpacing {
    /// Compute spacing from the hexagon radius
    pub fn for_radius(radius: f32) -> Self {
        let offsets = hex_vertex_offsets(radius);
        // corner 0 of one column meets corner 4 of the next
        let horizontal = offsets[0].x - offsets[4].x;
        // corner 1 of one row meets corner 5 of the row below
        let vertical = offsets[1].y - offsets[5].y;
        Self {
            horizontal,
            vertical,
        }
    }

    /// Vertical shift applied to odd columns
    #[inline]
    pub fn column_offset(&self) -> i32 {
        self.vertical / 2
    }
}

/// Generate `cell_count` cell centers, filled row-major over a `cols x rows` grid
///
/// Centers are integer lattice points relative to the (rounded) origin.
/// Generation stops as soon as `cell_count` centers have been produced.
pub fn generate_centers(
    rows: usize,
    cols: usize,
    cell_count: usize,
    radius: f32,
    origin: Vec2,
) -> Vec<IVec2> {
    let spacing = LatticeSpacing::for_radius(radius);
    let origin = origin.round().as_ivec2();

    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .take(cell_count)
        .map(|(row, col)| {
            let shift = if col % 2 == 1 {
                spacing.column_offset()
            } else {
                0
            };
            origin
                + IVec2::new(
                    col as i32 * spacing.horizontal,
                    row as i32 * spacing.vertical + shift,
                )
        })
        .collect()
}
