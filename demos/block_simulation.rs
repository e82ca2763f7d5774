//! Walk through the classic block scenarios and print what the simulator reports.
//!
//! Run with `RUST_LOG=blocksim=debug` to see the library's tracing events.

use blocksim::{
    identify_components, BlockSimulator, GraphError, HubChoice, Profile, ReconnectConfig,
    Representative, SocialGraph, User, UserId,
};
use tracing_subscriber::EnvFilter;

fn network(
    names: &[&str],
    edges: &[(usize, usize)],
) -> Result<(SocialGraph, Vec<UserId>), GraphError> {
    let ids: Vec<UserId> = (1..=names.len() as u32).map(UserId).collect();
    let users = names.iter().zip(&ids).map(|(name, &id)| User::new(id, *name, Profile::Student));
    let graph = SocialGraph::from_edges(users, edges.iter().map(|&(a, b)| (ids[a], ids[b], 1)))?;
    Ok((graph, ids))
}

fn run(
    title: &str,
    sim: &mut BlockSimulator,
    graph: &SocialGraph,
    blocker: UserId,
    blocked: UserId,
) {
    println!("--- {title} ---");
    print!("{graph}");

    let result = sim.simulate_block(graph, blocker, blocked);
    println!("{}", result.report(graph));
    let stats = sim.stats();
    println!(
        "explored={} pruned={} ({:.1}%) operations={} elapsed={:?}\n",
        stats.nodes_explored,
        stats.nodes_pruned,
        stats.prune_ratio() * 100.0,
        stats.operations,
        stats.elapsed
    );
}

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut sim = BlockSimulator::new(ReconnectConfig {
        representative: Representative::LowestId,
        hub: HubChoice::Largest,
    });
    println!("simulator config: {:?}\n", sim.config());

    let names = ["Ana", "Bruno", "Carlos", "Diana"];
    let (ring, ids) = network(&names, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
    run("ring", &mut sim, &ring, ids[0], ids[1]);

    let (bridge, ids) = network(&["Ana", "Bruno", "Carlos"], &[(0, 1), (1, 2)])?;
    run("bridge", &mut sim, &bridge, ids[0], ids[1]);

    let (chain, ids) = network(
        &["Ana", "Bruno", "Gloria", "Carlos", "Diana", "Elena", "Franco"],
        &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)],
    )?;
    run("long chain", &mut sim, &chain, ids[1], ids[2]);

    let mut cut = chain.copy();
    cut.remove_edge(ids[1], ids[2]);
    for (i, component) in identify_components(&cut).iter().enumerate() {
        let names: Vec<String> = component.iter().map(|&id| cut.label(id)).collect();
        println!("component {}: {}", i + 1, names.join(", "));
    }
    let greedy = sim.find_fast_reconnection(&cut);
    let minimal = sim.find_minimal_reconnection(&cut);
    println!("greedy suggests {} connection(s), backtracking {}", greedy.len(), minimal.len());

    // Ana and Carlos sit opposite each other on the ring.
    run("no relationship", &mut sim, &ring, UserId(1), UserId(3));

    Ok(())
}
