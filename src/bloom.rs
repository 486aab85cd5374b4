//! One-hop neighbor highlight ("bloom")

use std::collections::BTreeSet;

use crate::graph::AdjacencyGraph;

/// Active nodes highlighted by selecting `clicked`
///
/// Returns `clicked` together with each of its perimeter neighbors that is
/// also active. Selecting an inactive node highlights nothing. How long the
/// highlight stays visible is up to the caller.
///
/// # Example
///
/// ```
/// use hex_relay_mesh::{bloom, AdjacencyGraph};
/// use std::collections::BTreeSet;
///
/// let mut graph = AdjacencyGraph::new(3);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
///
/// let active = BTreeSet::from([0, 1]);
/// assert_eq!(bloom(1, &graph, &active), BTreeSet::from([0, 1]));
/// assert!(bloom(2, &graph, &active).is_empty());
/// ```
pub fn bloom(clicked: usize, graph: &AdjacencyGraph, active: &BTreeSet<usize>) -> BTreeSet<usize> {
    if !active.contains(&clicked) {
        return BTreeSet::new();
    }
    std::iter::once(clicked)
        .chain(
            graph
                .neighbors(clicked)
                .iter()
                .copied()
                .filter(|n| active.contains(n)),
        )
        .collect()
}
