//! Greedy star reconnection.
//!
//! Sort components by size, take one as the hub and join every other component's
//! representative to the hub's representative. Always `K - 1` edges, like the exhaustive
//! search, but the topology is fixed to a star. Meant for comparison against
//! [`crate::search`], not as a replacement for it.

use std::cmp::Reverse;
use std::time::Instant;

use crate::candidates::representative;
use crate::config::{HubChoice, ReconnectConfig};
use crate::connectivity::identify_components;
use crate::graph::{SocialGraph, UserPair};
use crate::search::{Reconnection, SearchStats};

pub fn find_fast_reconnection(graph: &SocialGraph) -> Vec<UserPair> {
    find_fast_reconnection_with(graph, ReconnectConfig::default()).edges
}

pub fn find_fast_reconnection_with(
    graph: &SocialGraph,
    config: ReconnectConfig,
) -> Reconnection {
    let start = Instant::now();
    let mut components = identify_components(graph);
    let count = components.len();
    let mut stats =
        SearchStats { operations: graph.vertex_count() as u64, ..SearchStats::default() };

    if count <= 1 {
        stats.elapsed = start.elapsed();
        return Reconnection { edges: Vec::new(), components: count, stats };
    }

    // Stable sorts: equal sizes keep component order.
    match config.hub {
        HubChoice::Smallest => components.sort_by_key(|c| c.len()),
        HubChoice::Largest => components.sort_by_key(|c| Reverse(c.len())),
    }

    let reps: Vec<_> = components
        .iter()
        .filter_map(|c| representative(graph, c, config.representative))
        .collect();
    let edges: Vec<UserPair> = match reps.split_first() {
        Some((&hub, rest)) => rest.iter().map(|&r| UserPair::new(hub, r)).collect(),
        None => Vec::new(),
    };
    stats.elapsed = start.elapsed();

    tracing::debug!(components = count, edges = edges.len(), "greedy reconnection built");
    Reconnection { edges, components: count, stats }
}
