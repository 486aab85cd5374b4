//! Spatial indexing for coordinate-to-node lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::Vec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Wrapper around a 2D KD-tree of node positions
///
/// Resolves a point in drawing coordinates (a click, a cursor position) to
/// the closest node.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: Option<ImmutableKdTree<f32, usize, 2, 32>>,
    len: usize,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build the index from node positions, indexed by node id
    ///
    /// # Example
    ///
    /// ```
    /// use hex_relay_mesh::SpatialIndex;
    /// use glam::Vec2;
    ///
    /// let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
    /// let index = SpatialIndex::new(&positions);
    /// let (id, distance) = index.nearest(Vec2::new(9.0, 0.0)).unwrap();
    /// assert_eq!(id, 1);
    /// assert!((distance - 1.0).abs() < 1e-5);
    /// ```
    pub fn new(positions: &[Vec2]) -> Self {
        let points: Vec<[f32; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();

        Self {
            tree: (!points.is_empty()).then(|| ImmutableKdTree::new_from_slice(&points)),
            len: points.len(),
        }
    }

    /// Nearest node id and its straight-line distance to `position`
    ///
    /// Returns `None` for an empty index.
    pub fn nearest(&self, position: Vec2) -> Option<(usize, f32)> {
        let tree = self.tree.as_ref()?;
        let result = tree.nearest_one::<SquaredEuclidean>(&[position.x, position.y]);
        Some((result.item as usize, result.distance.sqrt()))
    }

    /// Nearest node within `tolerance` of `position`
    pub fn nearest_within(&self, position: Vec2, tolerance: f32) -> Option<usize> {
        self.nearest(position)
            .filter(|&(_, distance)| distance <= tolerance)
            .map(|(id, _)| id)
    }

    /// Number of indexed nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index holds no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
