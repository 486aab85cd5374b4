//! Canonical tessellation vertices

use glam::{IVec2, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A deduplicated hexagon corner
///
/// Two corners with the same rounded coordinate are the same node. The cell
/// and corner index record where the node was first discovered and play no
/// part in identity.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    /// Node id, assigned in order of first discovery
    pub id: usize,
    /// Cell that first produced this corner
    pub cell: usize,
    /// Corner index (0..6) within that cell
    pub vertex: usize,
    /// Rounded position in drawing coordinates
    pub position: IVec2,
}

impl Node {
    /// Create a new node
    pub fn new(id: usize, cell: usize, vertex: usize, position: IVec2) -> Self {
        Self {
            id,
            cell,
            vertex,
            position,
        }
    }

    /// Position as floating point coordinates
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.position.as_vec2()
    }

    /// Straight-line distance to another node
    #[inline]
    pub fn distance_to(&self, other: &Node) -> f32 {
        self.pos().distance(other.pos())
    }
}
