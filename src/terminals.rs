//! Terminal placement
//!
//! Terminals are the nodes a solution has to connect. They are either drawn
//! uniformly at random or supplied explicitly by the caller.

use rand::Rng;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};

/// Ordered set of terminal node ids
///
/// Iteration is always in ascending id order, which keeps everything
/// downstream (candidate enumeration, tie-breaking) reproducible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalSet {
    ids: BTreeSet<usize>,
}

impl TerminalSet {
    /// Empty terminal set
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `count` distinct nodes uniformly at random
    ///
    /// `count` is clamped to `node_count`.
    ///
    /// # Example
    ///
    /// ```
    /// use hex_relay_mesh::TerminalSet;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(1);
    /// let terminals = TerminalSet::random(10, 25, &mut rng);
    /// assert_eq!(terminals.len(), 10);
    /// ```
    pub fn random<R: Rng + ?Sized>(node_count: usize, count: usize, rng: &mut R) -> Self {
        let amount = count.min(node_count);
        let ids = rand::seq::index::sample(rng, node_count, amount)
            .into_iter()
            .collect();
        Self { ids }
    }

    /// Use an explicit set of node ids
    ///
    /// Duplicate ids collapse into one terminal.
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` for the first id that is not below `node_count`.
    pub fn from_ids<I>(ids: I, node_count: usize) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = BTreeSet::new();
        for id in ids {
            if id >= node_count {
                return Err(MeshError::NodeNotFound(id));
            }
            set.insert(id);
        }
        Ok(Self { ids: set })
    }

    /// Check if a node is a terminal
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.ids.contains(&id)
    }

    /// Number of terminals
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if there are no terminals
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Terminal ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.ids.iter().copied()
    }
}

/// Collect ids without range checks; [`crate::solver::solve`] leaves out ids
/// that name no node
impl FromIterator<usize> for TerminalSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
