//! Hexagonal tessellation connectivity engine
//!
//! Builds a tessellation of flat-top hexagons with shared corners, marks some
//! corners as terminals and connects them with a minimum-cost network that
//! only uses hexagon boundary edges, plus redundant paths to nearby terminals.
//!
//! # Quick Start
//!
//! ```rust
//! use hex_relay_mesh::*;
//!
//! // 20 hexagons on a 5x4 grid with 20 random terminals
//! let config = ClusterConfigBuilder::new()
//!     .seed(42)
//!     .layout(ClusterLayout::Classic)
//!     .build()
//!     .unwrap();
//!
//! let mut cluster = HexCluster::generate(config).unwrap();
//! let report = cluster.solve();
//! println!(
//!     "{} terminals, {} relays, {} edges",
//!     report.terminal_count, report.relay_count, report.edge_count
//! );
//!
//! // Highlight the active neighbors of a terminal
//! let terminal = cluster.terminals().iter().next().unwrap();
//! let highlighted = cluster.bloom(terminal);
//! assert!(highlighted.contains(&terminal));
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables coordinate-to-node lookups using a KD-tree
//! - `serde`: Enables serialization support for configuration, geometry and solutions

// Modules
pub mod error;
pub mod config;
pub mod cell;
pub mod node;
pub mod graph;
pub mod generation;
pub mod terminals;
pub mod solver;
pub mod bloom;
pub mod cluster;
pub mod render;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{MeshError, Result};
pub use config::{ClusterConfig, ClusterConfigBuilder, ClusterLayout};
pub use cell::HexCell;
pub use node::Node;
pub use graph::AdjacencyGraph;
pub use generation::Tessellation;
pub use terminals::TerminalSet;
pub use solver::{EdgeKey, SolveReport, SolveStatus, Solution, TreeEdge};
pub use bloom::bloom;
pub use cluster::HexCluster;
pub use render::{generate_render_data, RenderData};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam vector types for convenience
pub use glam::{IVec2, Vec2};
