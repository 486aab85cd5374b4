//! End-to-end scenarios over generated clusters.

use hex_relay_mesh::*;
use std::collections::{BTreeSet, HashSet};

fn classic(seed: u32) -> HexCluster {
    let config = ClusterConfigBuilder::new()
        .seed(seed)
        .layout(ClusterLayout::Classic)
        .terminal_count(20)
        .build()
        .unwrap();
    HexCluster::generate(config).unwrap()
}

/// Corner coordinates counted without deduplication, collapsed by a plain set
fn distinct_corner_count(cluster: &HexCluster) -> usize {
    let offsets = cell::hex_vertex_offsets(cluster.config().radius());
    cluster
        .cells()
        .iter()
        .flat_map(|cell| {
            let center = cell.center.as_ivec2();
            offsets.map(|o| center + o)
        })
        .collect::<HashSet<_>>()
        .len()
}

#[test]
fn classic_layout_node_count() {
    let cluster = classic(42);
    assert_eq!(cluster.cell_count(), 20);

    // 120 corners, each interior corner shared by up to three cells
    let collisions = 20 * 6 - cluster.node_count();
    assert_eq!(cluster.node_count(), distinct_corner_count(&cluster));
    assert_eq!(cluster.node_count(), 58);
    assert_eq!(collisions, 62);
}

#[test]
fn every_node_has_two_perimeter_edges() {
    let cluster = classic(42);
    for node in cluster.nodes() {
        assert!(cluster.graph().degree(node.id) >= 2, "node {} is isolated", node.id);
    }
    assert!(cluster.graph().is_symmetric());
}

#[test]
fn twenty_terminals_are_connected() {
    for seed in [1, 2, 3, 42, 1234] {
        let mut cluster = classic(seed);
        let report = cluster.solve();

        assert_eq!(report.status, SolveStatus::Solved);
        assert_eq!(report.terminal_count, 20);
        assert_eq!(report.unreachable_count, 0);
        assert!(cluster.solution().is_connected(), "seed {} left terminals apart", seed);
    }
}

#[test]
fn realized_edges_contain_active_closure() {
    let mut cluster = classic(8);
    cluster.solve();
    let solution = cluster.solution();

    for (a, b) in cluster.graph().edges() {
        if solution.is_active(a) && solution.is_active(b) {
            assert!(solution.edges().contains(&EdgeKey::new(a, b)));
        }
    }
}

#[test]
fn realized_edges_are_unique_pairs() {
    let mut cluster = classic(21);
    cluster.solve();

    let unordered: HashSet<(usize, usize)> = cluster
        .realized_edges()
        .iter()
        .map(|e| e.endpoints())
        .collect();
    assert_eq!(unordered.len(), cluster.realized_edges().len());
    assert!(cluster.realized_edges().iter().all(|e| e.low() < e.high()));
    assert!(cluster.solution().raw_edge_count() > cluster.realized_edges().len());
}

#[test]
fn resolving_is_idempotent() {
    let mut cluster = classic(77);
    cluster.solve();
    let first = cluster.solution().clone();

    cluster.solve();
    assert_eq!(cluster.solution().edges(), first.edges());
    assert_eq!(cluster.solution().relays(), first.relays());
}

#[test]
fn unit_square_tree() {
    let nodes: Vec<Node> = [(0, 0), (1, 0), (0, 1), (1, 1)]
        .iter()
        .enumerate()
        .map(|(id, &(x, y))| Node::new(id, 0, 0, IVec2::new(x, y)))
        .collect();
    let tree = solver::kruskal(&nodes, &[0, 1, 2, 3]);

    assert_eq!(tree.len(), 3);
    assert_eq!(solver::mst::total_weight(&tree), 3.0);
    assert!(tree.iter().all(|e| !matches!((e.a, e.b), (0, 3) | (1, 2))));
}

#[test]
fn bloom_with_mixed_neighbors() {
    let mut cluster = classic(3);
    // pick a node with at least three perimeter neighbors
    let center = cluster
        .nodes()
        .iter()
        .map(|n| n.id)
        .find(|&id| cluster.graph().degree(id) == 3)
        .unwrap();
    let neighbors = cluster.graph().neighbors(center).to_vec();

    cluster
        .set_terminals([center, neighbors[0], neighbors[1]])
        .unwrap();
    let expected = BTreeSet::from([center, neighbors[0], neighbors[1]]);
    assert_eq!(cluster.bloom(center), expected);
    assert!(cluster.bloom(neighbors[2]).is_empty());
}

#[cfg(feature = "spatial-index")]
#[test]
fn click_resolves_to_bloom() {
    let mut cluster = classic(5);
    cluster.solve();

    let terminal = cluster.terminals().iter().next().unwrap();
    let position = cluster.get_node(terminal).unwrap().pos() + Vec2::new(1.5, -2.0);
    let clicked = cluster.node_at(position).unwrap();

    assert_eq!(clicked, terminal);
    assert!(cluster.bloom(clicked).contains(&terminal));
    assert_eq!(cluster.node_at(Vec2::new(-1000.0, 0.0)), None);
}

#[test]
fn render_export_reflects_solution() {
    let mut cluster = classic(9);
    cluster.solve();
    let data = generate_render_data(&cluster);

    assert_eq!(data.terminals.len(), 20);
    assert_eq!(data.edge_segment_count(), cluster.realized_edges().len());
    assert_eq!(data.outline_segment_count(), cluster.graph().edge_count());
}
