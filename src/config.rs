//! Hex Cluster Configuration and Builder
//!
//! This module provides configuration types for reproducible cluster generation.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::hex_vertex_offsets;
use crate::error::{MeshError, Result};

/// Upper bound on nearest terminals linked per terminal in the redundancy pass
pub const MAX_REDUNDANCY: usize = 8;

/// Grid layout presets
///
/// Each preset maps to a row/column grid, a cell count and a hexagon radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClusterLayout {
    /// 3 columns x 2 rows, 6 cells
    Compact,
    /// 5 columns x 4 rows, 20 cells (default)
    Classic,
    /// 8 columns x 5 rows, 40 cells
    Wide,
    /// Custom grid with explicit dimensions
    Custom {
        /// Number of grid rows
        rows: usize,
        /// Number of grid columns
        cols: usize,
        /// Number of cells to place, filled row-major
        cell_count: usize,
        /// Hexagon circumradius in drawing units
        radius: f32,
    },
}

impl ClusterLayout {
    /// Radius shared by all presets
    pub const PRESET_RADIUS: f32 = 44.0;

    /// Number of grid rows
    pub fn rows(self) -> usize {
        match self {
            ClusterLayout::Compact => 2,
            ClusterLayout::Classic => 4,
            ClusterLayout::Wide => 5,
            ClusterLayout::Custom { rows, .. } => rows,
        }
    }

    /// Number of grid columns
    pub fn cols(self) -> usize {
        match self {
            ClusterLayout::Compact => 3,
            ClusterLayout::Classic => 5,
            ClusterLayout::Wide => 8,
            ClusterLayout::Custom { cols, .. } => cols,
        }
    }

    /// Number of hexagons placed on the grid
    pub fn cell_count(self) -> usize {
        match self {
            ClusterLayout::Custom { cell_count, .. } => cell_count,
            preset => preset.rows() * preset.cols(),
        }
    }

    /// Hexagon circumradius
    pub fn radius(self) -> f32 {
        match self {
            ClusterLayout::Custom { radius, .. } => radius,
            _ => Self::PRESET_RADIUS,
        }
    }

    /// Get a human-readable name for this layout
    pub fn name(self) -> &'static str {
        match self {
            ClusterLayout::Compact => "Compact",
            ClusterLayout::Classic => "Classic",
            ClusterLayout::Wide => "Wide",
            ClusterLayout::Custom { .. } => "Custom",
        }
    }

    /// Check that this layout describes a buildable tessellation
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for the same conditions as [`validate_layout`].
    pub fn validate(self) -> Result<()> {
        validate_layout(self.rows(), self.cols(), self.cell_count(), self.radius())
    }
}

impl Default for ClusterLayout {
    fn default() -> Self {
        ClusterLayout::Classic
    }
}

/// Validate raw grid parameters
///
/// # Errors
///
/// Returns `InvalidConfig` if the cell count is zero, the radius is not a
/// positive finite number, the radius is too small for its rounded corner
/// offsets to stay distinct (below 1.5), either grid dimension is zero, or
/// the grid has fewer slots than requested cells.
pub fn validate_layout(rows: usize, cols: usize, cell_count: usize, radius: f32) -> Result<()> {
    if cell_count == 0 {
        return Err(MeshError::InvalidConfig(
            "cell count must be positive (got 0)".to_string(),
        ));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(MeshError::InvalidConfig(format!(
            "radius must be positive (got {})",
            radius
        )));
    }
    let offsets = hex_vertex_offsets(radius);
    let (a, b, c) = (offsets[0].x, offsets[1].x, offsets[1].y);
    if !(a > b && b > 0 && c > 0) {
        return Err(MeshError::InvalidConfig(format!(
            "radius {} is too small: corner offsets round to ({}, {}, {})",
            radius, a, b, c
        )));
    }
    if rows == 0 || cols == 0 {
        return Err(MeshError::InvalidConfig(format!(
            "grid must have at least one row and column (got {}x{})",
            cols, rows
        )));
    }
    if rows.saturating_mul(cols) < cell_count {
        return Err(MeshError::InvalidConfig(format!(
            "{}x{} grid cannot hold {} cells",
            cols, rows, cell_count
        )));
    }
    Ok(())
}

/// Configuration for a hex cluster
///
/// The same configuration always produces the same tessellation, and the same
/// sequence of random terminal placements.
///
/// # Example
///
/// ```rust
/// use hex_relay_mesh::*;
///
/// let config = ClusterConfigBuilder::new()
///     .seed(42)
///     .layout(ClusterLayout::Compact)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.layout.cell_count(), 6);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    /// Grid layout (rows, columns, cell count, radius)
    pub layout: ClusterLayout,

    /// Center of the first cell in drawing coordinates
    pub origin: Vec2,

    /// Random seed for terminal placement
    pub seed: u32,

    /// Number of terminals placed on generation and regeneration
    ///
    /// Clamped to the node count at placement time.
    pub terminal_count: usize,

    /// How many nearest other terminals each terminal is linked to after
    /// the spanning tree is realized
    pub redundancy: usize,

    /// Maximum distance between a query point and a node for the point to
    /// resolve to that node
    pub click_tolerance: f32,
}

impl ClusterConfig {
    /// Get the cell count for this configuration
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.layout.cell_count()
    }

    /// Get the hexagon radius for this configuration
    #[inline]
    pub fn radius(&self) -> f32 {
        self.layout.radius()
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            layout: ClusterLayout::default(),
            origin: ClusterConfigBuilder::DEFAULT_ORIGIN,
            seed: 0,
            terminal_count: ClusterConfigBuilder::DEFAULT_TERMINALS,
            redundancy: ClusterConfigBuilder::DEFAULT_REDUNDANCY,
            click_tolerance: ClusterConfigBuilder::DEFAULT_CLICK_TOLERANCE,
        }
    }
}

/// Builder for creating ClusterConfig with validation
///
/// # Example
///
/// ```rust
/// use hex_relay_mesh::*;
///
/// let config = ClusterConfigBuilder::new()
///     .seed(7)
///     .layout(ClusterLayout::Custom { rows: 1, cols: 2, cell_count: 2, radius: 30.0 })
///     .terminal_count(4)
///     .redundancy(1)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.terminal_count, 4);
/// ```
#[derive(Debug, Clone)]
pub struct ClusterConfigBuilder {
    layout: ClusterLayout,
    origin: Vec2,
    seed: Option<u32>,
    terminal_count: usize,
    redundancy: usize,
    click_tolerance: f32,
}

impl ClusterConfigBuilder {
    const DEFAULT_ORIGIN: Vec2 = Vec2::new(70.0, 70.0);
    const DEFAULT_TERMINALS: usize = 20;
    const DEFAULT_REDUNDANCY: usize = 2;
    const DEFAULT_CLICK_TOLERANCE: f32 = 10.0;

    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - layout: Classic (5x4 grid, 20 cells, radius 44)
    /// - origin: (70, 70)
    /// - seed: Random (generated from thread_rng)
    /// - terminal_count: 20
    /// - redundancy: 2
    /// - click_tolerance: 10
    pub fn new() -> Self {
        Self {
            layout: ClusterLayout::default(),
            origin: Self::DEFAULT_ORIGIN,
            seed: None,
            terminal_count: Self::DEFAULT_TERMINALS,
            redundancy: Self::DEFAULT_REDUNDANCY,
            click_tolerance: Self::DEFAULT_CLICK_TOLERANCE,
        }
    }

    /// Set the grid layout
    ///
    /// The layout is validated in [`build`](Self::build).
    pub fn layout(mut self, layout: ClusterLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the center of the first cell
    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Set the random seed for terminal placement
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of terminals placed on generation
    pub fn terminal_count(mut self, count: usize) -> Self {
        self.terminal_count = count;
        self
    }

    /// Set how many nearest terminals each terminal is linked to
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `count > MAX_REDUNDANCY`
    pub fn redundancy(mut self, count: usize) -> Result<Self> {
        if count > MAX_REDUNDANCY {
            return Err(MeshError::InvalidConfig(format!(
                "redundancy must be <= {} (got {})",
                MAX_REDUNDANCY, count
            )));
        }
        self.redundancy = count;
        Ok(self)
    }

    /// Set the coordinate-to-node resolution tolerance
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the tolerance is not a positive finite number
    pub fn click_tolerance(mut self, tolerance: f32) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(MeshError::InvalidConfig(format!(
                "click tolerance must be positive (got {})",
                tolerance
            )));
        }
        self.click_tolerance = tolerance;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the layout cannot be tessellated.
    pub fn build(self) -> Result<ClusterConfig> {
        self.layout.validate()?;
        let seed = self.seed.unwrap_or_else(rand::random);

        Ok(ClusterConfig {
            layout: self.layout,
            origin: self.origin,
            seed,
            terminal_count: self.terminal_count,
            redundancy: self.redundancy,
            click_tolerance: self.click_tolerance,
        })
    }
}

impl Default for ClusterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
