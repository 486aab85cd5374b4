//! HexCluster main structure

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;
use tracing::{debug, error, info, warn};

use crate::cell::HexCell;
use crate::config::ClusterConfig;
use crate::error::Result;
use crate::generation::{build_perimeter_graph, build_tessellation};
use crate::graph::AdjacencyGraph;
use crate::node::Node;
use crate::solver::{self, EdgeKey, SolveReport, SolveStatus, Solution};
use crate::terminals::TerminalSet;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;
#[cfg(feature = "spatial-index")]
use glam::Vec2;

/// A hexagon tessellation together with its terminals and current solution
///
/// The cluster owns everything the connectivity engine works on. Topology
/// (cells, nodes, graph) only changes through [`regenerate`](Self::regenerate);
/// the solution is only replaced as a whole by [`solve`](Self::solve) or when
/// terminals change.
///
/// # Examples
///
/// ```
/// use hex_relay_mesh::*;
///
/// let config = ClusterConfigBuilder::new()
///     .seed(42)
///     .layout(ClusterLayout::Classic)
///     .build()
///     .unwrap();
///
/// let mut cluster = HexCluster::generate(config).unwrap();
/// assert_eq!(cluster.cell_count(), 20);
///
/// let report = cluster.solve();
/// assert_eq!(report.status, SolveStatus::Solved);
/// assert!(cluster.solution().is_connected());
/// ```
#[derive(Clone)]
pub struct HexCluster {
    /// Configuration used to generate this cluster
    config: ClusterConfig,

    /// All cells (indexed by cell ID)
    cells: Vec<HexCell>,

    /// All canonical nodes (indexed by node ID)
    nodes: Vec<Node>,

    /// Perimeter adjacency over nodes
    graph: AdjacencyGraph,

    /// Current terminal placement
    terminals: TerminalSet,

    /// Result of the last solve, or an unsolved placeholder
    solution: Solution,

    /// Source of random terminal placements
    rng: ChaCha8Rng,

    /// Spatial index over node positions (requires spatial-index feature)
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl HexCluster {
    /// Build the tessellation and place the configured number of terminals
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the layout cannot be tessellated.
    pub fn generate(config: ClusterConfig) -> Result<Self> {
        let mut cluster = Self {
            config,
            cells: Vec::new(),
            nodes: Vec::new(),
            graph: AdjacencyGraph::default(),
            terminals: TerminalSet::new(),
            solution: Solution::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed as u64),
            #[cfg(feature = "spatial-index")]
            spatial_index: SpatialIndex::new(&[]),
        };
        cluster.regenerate()?;
        Ok(cluster)
    }

    /// Rebuild cells, nodes and graph from the configuration, re-place
    /// terminals and clear the previous solution
    ///
    /// On error the cluster is left unchanged.
    pub fn regenerate(&mut self) -> Result<()> {
        let layout = self.config.layout;
        let tessellation = build_tessellation(
            layout.rows(),
            layout.cols(),
            layout.cell_count(),
            layout.radius(),
            self.config.origin,
        )?;
        let graph = build_perimeter_graph(&tessellation.cells, tessellation.nodes.len());

        #[cfg(feature = "spatial-index")]
        {
            let positions: Vec<Vec2> = tessellation.nodes.iter().map(Node::pos).collect();
            self.spatial_index = SpatialIndex::new(&positions);
        }

        self.cells = tessellation.cells;
        self.nodes = tessellation.nodes;
        self.graph = graph;

        info!(
            layout = layout.name(),
            cells = self.cells.len(),
            nodes = self.nodes.len(),
            edges = self.graph.edge_count(),
            "regenerated cluster"
        );

        self.place_terminals(self.config.terminal_count);
        Ok(())
    }

    /// Replace the terminals with `count` distinct random nodes
    ///
    /// `count` is clamped to the node count. Clears the current solution.
    pub fn place_terminals(&mut self, count: usize) -> &TerminalSet {
        let terminals = TerminalSet::random(self.nodes.len(), count, &mut self.rng);
        if terminals.len() < count {
            debug!(
                requested = count,
                placed = terminals.len(),
                "terminal count clamped to node count"
            );
        }
        self.replace_terminals(terminals);
        &self.terminals
    }

    /// Replace the terminals with an explicit set of node ids
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if any id is out of range; the current
    /// terminals are kept in that case.
    pub fn set_terminals<I>(&mut self, ids: I) -> Result<&TerminalSet>
    where
        I: IntoIterator<Item = usize>,
    {
        let terminals = TerminalSet::from_ids(ids, self.nodes.len())?;
        self.replace_terminals(terminals);
        Ok(&self.terminals)
    }

    fn replace_terminals(&mut self, terminals: TerminalSet) {
        self.solution = Solution::unsolved(&terminals);
        self.terminals = terminals;
    }

    /// Connect the current terminals and store the result
    ///
    /// Returns the size of the new solution.
    pub fn solve(&mut self) -> SolveReport {
        let solution = solver::solve(
            &self.nodes,
            &self.graph,
            &self.terminals,
            self.config.redundancy,
        );

        for pair in solution.unreachable() {
            error!(
                from = pair.low(),
                to = pair.high(),
                "terminals not connected in perimeter graph"
            );
        }

        let report = solution.report();
        match report.status {
            SolveStatus::InsufficientTerminals => warn!(
                terminals = report.terminal_count,
                "need at least two terminals to solve"
            ),
            _ => info!(
                terminals = report.terminal_count,
                relays = report.relay_count,
                edges = report.edge_count,
                raw_edges = solution.raw_edge_count(),
                "solved terminal connectivity"
            ),
        }

        self.solution = solution;
        report
    }

    /// Active nodes highlighted by selecting `node`
    ///
    /// The active set is the terminals plus the relays of the current solution.
    pub fn bloom(&self, node: usize) -> BTreeSet<usize> {
        crate::bloom::bloom(node, &self.graph, &self.solution.active_set())
    }

    /// Resolve a drawing-space point to the nearest node within the
    /// configured click tolerance (requires spatial-index feature)
    ///
    /// # Example
    ///
    /// ```
    /// # use hex_relay_mesh::*;
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let cluster = HexCluster::generate(ClusterConfig::default()).unwrap();
    /// let node = cluster.nodes()[0];
    /// assert_eq!(cluster.node_at(node.pos() + glam::Vec2::new(2.0, 1.0)), Some(node.id));
    /// # }
    /// ```
    #[cfg(feature = "spatial-index")]
    pub fn node_at(&self, position: Vec2) -> Option<usize> {
        self.spatial_index
            .nearest_within(position, self.config.click_tolerance)
    }

    /// Get the configuration used to generate this cluster
    #[inline]
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Get the number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the number of nodes
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get all cells as a slice
    #[inline]
    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    /// Get all nodes as a slice
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get a node by ID
    #[inline]
    pub fn get_node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get the perimeter graph
    #[inline]
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Get the current terminals
    #[inline]
    pub fn terminals(&self) -> &TerminalSet {
        &self.terminals
    }

    /// Get the current solution
    #[inline]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Relays of the current solution
    #[inline]
    pub fn relays(&self) -> &BTreeSet<usize> {
        self.solution.relays()
    }

    /// Realized edges of the current solution
    #[inline]
    pub fn realized_edges(&self) -> &BTreeSet<EdgeKey> {
        self.solution.edges()
    }
}
