//! Demonstration of HexCluster generation, solving and neighbor queries

use hex_relay_mesh::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClusterConfigBuilder::new()
        .seed(42)
        .layout(ClusterLayout::Classic)
        .terminal_count(20)
        .build()?;

    let mut cluster = HexCluster::generate(config)?;
    println!(
        "Generated {} cells with {} nodes and {} perimeter edges",
        cluster.cell_count(),
        cluster.node_count(),
        cluster.graph().edge_count()
    );

    let report = cluster.solve();
    println!("\nSolve: {:?}", report.status);
    println!("  terminals: {}", report.terminal_count);
    println!("  relays:    {}", report.relay_count);
    println!("  edges:     {}", report.edge_count);
    println!("  connected: {}", cluster.solution().is_connected());

    // Click next to the first terminal
    #[cfg(feature = "spatial-index")]
    {
        if let Some(terminal) = cluster.terminals().iter().next() {
            let position = cluster.nodes()[terminal].pos() + Vec2::new(2.0, 2.0);
            if let Some(node) = cluster.node_at(position) {
                let highlighted = cluster.bloom(node);
                println!("\nClicked {:?} -> node {}, highlights {:?}", position, node, highlighted);
            }
        }
    }

    // Fewer terminals, fresh placement
    cluster.place_terminals(6);
    let report = cluster.solve();
    println!(
        "\nWith {} terminals: {} relays, {} edges",
        report.terminal_count, report.relay_count, report.edge_count
    );

    let data = generate_render_data(&cluster);
    println!(
        "Render export: {} nodes, {} outline segments, {} solution segments",
        data.node_count(),
        data.outline_segment_count(),
        data.edge_segment_count()
    );

    Ok(())
}
