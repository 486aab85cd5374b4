//! Terminal connectivity solver
//!
//! Connects a terminal set using only perimeter edges:
//!
//! 1. Build the complete graph on terminals, weighted by straight-line distance
//! 2. Take its minimum spanning tree (Kruskal)
//! 3. Realize each tree edge as a shortest perimeter path (Dijkstra); the
//!    non-terminal nodes on those paths become relays
//! 4. Link every terminal to its nearest `redundancy` other terminals the same way
//! 5. Close over perimeter edges whose endpoints are both active
//! 6. Collapse duplicate undirected edges
//!
//! The solver is pure: it reads nodes, graph and terminals and returns a fresh
//! [`Solution`].

pub mod mst;
pub mod path;
mod solution;

pub use mst::{kruskal, TreeEdge};
pub use path::{shortest_path, PathFinder};
pub use solution::{EdgeKey, SolveReport, SolveStatus, Solution};

use std::collections::BTreeSet;

use crate::graph::AdjacencyGraph;
use crate::node::Node;
use crate::terminals::TerminalSet;

/// Accumulates realized paths before deduplication
struct Realizer<'a> {
    finder: PathFinder,
    graph: &'a AdjacencyGraph,
    terminals: &'a TerminalSet,
    relays: BTreeSet<usize>,
    raw_edges: Vec<(usize, usize)>,
    unreachable: Vec<EdgeKey>,
}

impl<'a> Realizer<'a> {
    fn new(nodes: &'a [Node], graph: &'a AdjacencyGraph, terminals: &'a TerminalSet) -> Self {
        Self {
            finder: PathFinder::new(nodes, graph),
            graph,
            terminals,
            relays: BTreeSet::new(),
            raw_edges: Vec::new(),
            unreachable: Vec::new(),
        }
    }

    /// Realize the shortest perimeter path between two terminals
    fn realize(&mut self, from: usize, to: usize) {
        let Some(path) = self.finder.shortest_path(from, to) else {
            self.unreachable.push(EdgeKey::new(from, to));
            return;
        };
        for &node in &path {
            if !self.terminals.contains(node) {
                self.relays.insert(node);
            }
        }
        self.raw_edges
            .extend(path.windows(2).map(|step| (step[0], step[1])));
    }

    fn is_active(&self, node: usize) -> bool {
        self.terminals.contains(node) || self.relays.contains(&node)
    }

    /// Add every perimeter edge joining two active nodes
    fn close_over_active(&mut self) {
        let closure: Vec<(usize, usize)> = self
            .graph
            .edges()
            .filter(|&(a, b)| self.is_active(a) && self.is_active(b))
            .collect();
        self.raw_edges.extend(closure);
    }
}

/// Other terminals ordered by distance from `terminal`, ties by ascending id
fn nearest_terminals(nodes: &[Node], terminals: &[usize], terminal: usize) -> Vec<usize> {
    let origin = &nodes[terminal];
    let mut others: Vec<(f32, usize)> = terminals
        .iter()
        .copied()
        .filter(|&t| t != terminal)
        .map(|t| (origin.distance_to(&nodes[t]), t))
        .collect();
    others.sort_by(|x, y| x.0.total_cmp(&y.0));
    others.into_iter().map(|(_, t)| t).collect()
}

/// Connect `terminals` over the perimeter graph
///
/// Terminal ids that name no node are left out and listed in
/// [`Solution::unknown_terminals`]. With fewer than two remaining terminals
/// the result has status [`SolveStatus::InsufficientTerminals`] and no relays
/// or edges. Terminal pairs that cannot be joined are skipped and listed in
/// [`Solution::unreachable`].
///
/// `redundancy` is the number of nearest other terminals each terminal is
/// additionally linked to. Pairs already joined by the tree are realized
/// again and merged by the final deduplication.
///
/// # Example
///
/// ```
/// use hex_relay_mesh::generation::{build_perimeter_graph, build_tessellation};
/// use hex_relay_mesh::solver::{solve, SolveStatus};
/// use hex_relay_mesh::TerminalSet;
/// use glam::Vec2;
///
/// let tessellation = build_tessellation(1, 2, 2, 44.0, Vec2::ZERO).unwrap();
/// let graph = build_perimeter_graph(&tessellation.cells, tessellation.nodes.len());
/// let terminals = TerminalSet::from_ids([0, 3], tessellation.nodes.len()).unwrap();
///
/// let solution = solve(&tessellation.nodes, &graph, &terminals, 2);
/// assert_eq!(solution.status(), SolveStatus::Solved);
/// assert!(solution.is_connected());
/// ```
pub fn solve(
    nodes: &[Node],
    graph: &AdjacencyGraph,
    terminals: &TerminalSet,
    redundancy: usize,
) -> Solution {
    let node_limit = nodes.len().min(graph.node_count());
    let (ids, unknown_terminals): (Vec<usize>, Vec<usize>) =
        terminals.iter().partition(|&t| t < node_limit);
    let terminals: TerminalSet = ids.iter().copied().collect();

    if ids.len() <= 1 {
        return Solution {
            status: SolveStatus::InsufficientTerminals,
            unknown_terminals,
            ..Solution::unsolved(&terminals)
        };
    }

    let tree = kruskal(nodes, &ids);

    let mut realizer = Realizer::new(nodes, graph, &terminals);
    for edge in &tree {
        realizer.realize(edge.a, edge.b);
    }

    for &terminal in &ids {
        for other in nearest_terminals(nodes, &ids, terminal)
            .into_iter()
            .take(redundancy)
        {
            realizer.realize(terminal, other);
        }
    }

    realizer.close_over_active();

    let raw_edge_count = realizer.raw_edges.len();
    let edges: BTreeSet<EdgeKey> = realizer
        .raw_edges
        .iter()
        .map(|&(a, b)| EdgeKey::new(a, b))
        .collect();

    let relays = realizer.relays;
    let mut unreachable = realizer.unreachable;
    unreachable.sort();
    unreachable.dedup();

    Solution {
        status: SolveStatus::Solved,
        terminals,
        tree,
        relays,
        edges,
        unreachable,
        unknown_terminals,
        raw_edge_count,
    }
}
