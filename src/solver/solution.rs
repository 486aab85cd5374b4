//! Solver output types

use std::collections::{BTreeSet, VecDeque};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::mst::TreeEdge;
use crate::terminals::TerminalSet;

/// Orientation-independent edge key, always stored as `(low, high)`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(usize, usize);

impl EdgeKey {
    /// Normalize an undirected pair
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }

    /// Lower endpoint
    #[inline]
    pub fn low(&self) -> usize {
        self.0
    }

    /// Higher endpoint
    #[inline]
    pub fn high(&self) -> usize {
        self.1
    }

    /// Both endpoints as a tuple
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.0, self.1)
    }
}

/// Outcome of a solve
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveStatus {
    /// No solve has run against the current terminals
    #[default]
    Unsolved,
    /// Terminals were connected
    Solved,
    /// Fewer than two terminals; nothing to connect
    InsufficientTerminals,
}

/// Size summary of a solution, for reporting back to the caller
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveReport {
    /// Outcome of the solve
    pub status: SolveStatus,
    /// Terminals that took part in the solve
    pub terminal_count: usize,
    /// Non-terminal nodes on realized paths
    pub relay_count: usize,
    /// Realized perimeter edges after deduplication
    pub edge_count: usize,
    /// Accepted spanning tree edges
    pub tree_edge_count: usize,
    /// Terminal pairs with no perimeter path
    pub unreachable_count: usize,
    /// Terminal ids that name no node and were left out
    pub unknown_terminal_count: usize,
}

/// Point-in-time result of connecting a terminal set
///
/// A solution is built completely by the solver and then only read; callers
/// replace it wholesale on the next solve.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    pub(crate) status: SolveStatus,
    pub(crate) terminals: TerminalSet,
    pub(crate) tree: Vec<TreeEdge>,
    pub(crate) relays: BTreeSet<usize>,
    pub(crate) edges: BTreeSet<EdgeKey>,
    pub(crate) unreachable: Vec<EdgeKey>,
    pub(crate) unknown_terminals: Vec<usize>,
    pub(crate) raw_edge_count: usize,
}

impl Solution {
    /// Solution for terminals that have not been solved yet
    ///
    /// The active set is just the terminals.
    pub fn unsolved(terminals: &TerminalSet) -> Self {
        Self {
            terminals: terminals.clone(),
            ..Self::default()
        }
    }

    /// Outcome of the solve
    #[inline]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// Terminals this solution was computed for
    #[inline]
    pub fn terminals(&self) -> &TerminalSet {
        &self.terminals
    }

    /// Accepted spanning tree edges, in acceptance order
    #[inline]
    pub fn tree_edges(&self) -> &[TreeEdge] {
        &self.tree
    }

    /// Non-terminal nodes lying on realized paths
    #[inline]
    pub fn relays(&self) -> &BTreeSet<usize> {
        &self.relays
    }

    /// Realized perimeter edges, each undirected pair once
    #[inline]
    pub fn edges(&self) -> &BTreeSet<EdgeKey> {
        &self.edges
    }

    /// Terminal pairs whose path could not be realized
    #[inline]
    pub fn unreachable(&self) -> &[EdgeKey] {
        &self.unreachable
    }

    /// Requested terminal ids outside the node range, ascending
    ///
    /// These take no part in the solve and are not in [`Solution::terminals`].
    #[inline]
    pub fn unknown_terminals(&self) -> &[usize] {
        &self.unknown_terminals
    }

    /// Number of edges produced before deduplication
    #[inline]
    pub fn raw_edge_count(&self) -> usize {
        self.raw_edge_count
    }

    /// Check if a node is a terminal or a relay
    pub fn is_active(&self, node: usize) -> bool {
        self.terminals.contains(node) || self.relays.contains(&node)
    }

    /// Terminals together with relays
    pub fn active_set(&self) -> BTreeSet<usize> {
        self.terminals
            .iter()
            .chain(self.relays.iter().copied())
            .collect()
    }

    /// Summary counts
    pub fn report(&self) -> SolveReport {
        SolveReport {
            status: self.status,
            terminal_count: self.terminals.len(),
            relay_count: self.relays.len(),
            edge_count: self.edges.len(),
            tree_edge_count: self.tree.len(),
            unreachable_count: self.unreachable.len(),
            unknown_terminal_count: self.unknown_terminals.len(),
        }
    }

    /// Check that every terminal is reachable from every other one using
    /// realized edges between active nodes only
    ///
    /// Trivially true for zero or one terminal.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.terminals.iter().next() else {
            return true;
        };

        let mut visited = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for next in self.realized_neighbors(node) {
                if self.is_active(next) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        self.terminals.iter().all(|t| visited.contains(&t))
    }

    fn realized_neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().filter_map(move |edge| match edge.endpoints() {
            (a, b) if a == node => Some(b),
            (a, b) if b == node => Some(a),
            _ => None,
        })
    }
}
