//! Block simulation: remove one relationship from a snapshot and report what it takes to keep
//! everyone connected.
//!
//! The caller's graph is never mutated; every simulation works on its own deep copy, so
//! simulations over the same snapshot are independent of each other.

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::ReconnectConfig;
use crate::connectivity::{connectivity_with_visits, Component};
use crate::graph::{SocialGraph, UserPair};
use crate::search::{find_minimal_reconnection_with, SearchStats};
use crate::user::UserId;

pub const MSG_NO_RELATIONSHIP: &str = "no connection to remove";
pub const MSG_STILL_CONNECTED: &str = "graph remains connected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockOutcome {
    /// The two users were not directly related; nothing was removed.
    NoRelationship,
    StillConnected,
    /// Removing the relationship split the graph into `components` pieces.
    Disconnected { components: usize },
}

/// Immutable record of one block simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockResult {
    blocker: UserId,
    blocked: UserId,
    outcome: BlockOutcome,
    suggested_edges: Vec<UserPair>,
    message: String,
}

impl BlockResult {
    fn connected(blocker: UserId, blocked: UserId, outcome: BlockOutcome, message: &str) -> Self {
        Self {
            blocker,
            blocked,
            outcome,
            suggested_edges: Vec::new(),
            message: message.to_string(),
        }
    }

    fn disconnected(
        blocker: UserId,
        blocked: UserId,
        components: usize,
        edges: Vec<UserPair>,
    ) -> Self {
        let message = format!("{} new connections required", edges.len());
        Self {
            blocker,
            blocked,
            outcome: BlockOutcome::Disconnected { components },
            suggested_edges: edges,
            message,
        }
    }

    pub fn blocker(&self) -> UserId {
        self.blocker
    }

    pub fn blocked(&self) -> UserId {
        self.blocked
    }

    pub fn outcome(&self) -> BlockOutcome {
        self.outcome
    }

    pub fn still_connected(&self) -> bool {
        !matches!(self.outcome, BlockOutcome::Disconnected { .. })
    }

    pub fn edges_needed(&self) -> usize {
        self.suggested_edges.len()
    }

    pub fn suggested_edges(&self) -> &[UserPair] {
        &self.suggested_edges
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The [`Display`](fmt::Display) report with user names from `graph` instead of ids.
    pub fn report(&self, graph: &SocialGraph) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_report(&mut out, |id| graph.label(id));
        out
    }

    fn write_report<W: fmt::Write>(
        &self,
        out: &mut W,
        name: impl Fn(UserId) -> String,
    ) -> fmt::Result {
        let connected = if self.still_connected() { "yes" } else { "no" };
        writeln!(out, "=== Block simulation ===")?;
        writeln!(out, "Blocker: {}", name(self.blocker))?;
        writeln!(out, "Blocked: {}", name(self.blocked))?;
        writeln!(out, "Graph still connected: {connected}")?;
        if !self.still_connected() {
            writeln!(out, "Connections needed: {}", self.edges_needed())?;
            writeln!(out, "Suggested connections:")?;
            for (i, pair) in self.suggested_edges.iter().enumerate() {
                writeln!(out, "  {}. {} <-> {}", i + 1, name(pair.first), name(pair.second))?;
            }
        }
        write!(out, "{}", self.message)
    }
}

impl fmt::Display for BlockResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f, |id| id.to_string())
    }
}

/// Runs simulations and keeps the instrumentation of the most recent call.
///
/// Every public method resets the statistics before doing any work.
#[derive(Debug, Clone, Default)]
pub struct BlockSimulator {
    config: ReconnectConfig,
    last: SearchStats,
}

impl BlockSimulator {
    pub fn new(config: ReconnectConfig) -> Self {
        Self { config, last: SearchStats::default() }
    }

    pub fn config(&self) -> ReconnectConfig {
        self.config
    }

    pub fn simulate_block(
        &mut self,
        graph: &SocialGraph,
        blocker: UserId,
        blocked: UserId,
    ) -> BlockResult {
        let (result, stats) = run_block(graph, blocker, blocked, self.config);
        self.last = stats;
        result
    }

    pub fn verify_connectivity(&mut self, graph: &SocialGraph) -> bool {
        let start = Instant::now();
        let (connected, visited) = connectivity_with_visits(graph);
        self.last = SearchStats {
            operations: visited as u64,
            elapsed: start.elapsed(),
            ..SearchStats::default()
        };
        connected
    }

    pub fn identify_components(&mut self, graph: &SocialGraph) -> Vec<Component> {
        let start = Instant::now();
        let components = crate::connectivity::identify_components(graph);
        self.last = SearchStats {
            operations: graph.vertex_count() as u64,
            elapsed: start.elapsed(),
            ..SearchStats::default()
        };
        components
    }

    pub fn find_minimal_reconnection(&mut self, graph: &SocialGraph) -> Vec<UserPair> {
        let r = find_minimal_reconnection_with(graph, self.config);
        self.last = r.stats;
        r.edges
    }

    pub fn find_fast_reconnection(&mut self, graph: &SocialGraph) -> Vec<UserPair> {
        let r = crate::greedy::find_fast_reconnection_with(graph, self.config);
        self.last = r.stats;
        r.edges
    }

    pub fn stats(&self) -> SearchStats {
        self.last
    }

    pub fn operations(&self) -> u64 {
        self.last.operations
    }

    pub fn nodes_explored(&self) -> u64 {
        self.last.nodes_explored
    }

    pub fn nodes_pruned(&self) -> u64 {
        self.last.nodes_pruned
    }

    pub fn elapsed(&self) -> Duration {
        self.last.elapsed
    }
}

/// Simulate `blocker` blocking `blocked` with the default configuration.
pub fn simulate_block(graph: &SocialGraph, blocker: UserId, blocked: UserId) -> BlockResult {
    run_block(graph, blocker, blocked, ReconnectConfig::default()).0
}

fn run_block(
    graph: &SocialGraph,
    blocker: UserId,
    blocked: UserId,
    config: ReconnectConfig,
) -> (BlockResult, SearchStats) {
    let start = Instant::now();
    let mut stats = SearchStats::default();
    let mut working = graph.copy();

    if !working.remove_edge(blocker, blocked) {
        stats.elapsed = start.elapsed();
        tracing::debug!(%blocker, %blocked, "no relationship to block");
        let outcome = BlockOutcome::NoRelationship;
        return (BlockResult::connected(blocker, blocked, outcome, MSG_NO_RELATIONSHIP), stats);
    }
    stats.operations += 1;

    let (connected, visited) = connectivity_with_visits(&working);
    stats.operations += visited as u64;
    if connected {
        stats.elapsed = start.elapsed();
        tracing::debug!(%blocker, %blocked, "graph remains connected after block");
        let outcome = BlockOutcome::StillConnected;
        return (BlockResult::connected(blocker, blocked, outcome, MSG_STILL_CONNECTED), stats);
    }

    let reconnection = find_minimal_reconnection_with(&working, config);
    stats.operations += reconnection.stats.operations;
    stats.nodes_explored = reconnection.stats.nodes_explored;
    stats.nodes_pruned = reconnection.stats.nodes_pruned;
    stats.elapsed = start.elapsed();

    tracing::debug!(
        %blocker,
        %blocked,
        components = reconnection.components,
        edges_needed = reconnection.edges.len(),
        "block disconnects the graph"
    );
    let result =
        BlockResult::disconnected(blocker, blocked, reconnection.components, reconnection.edges);
    (result, stats)
}

/// Simulate blocking every relationship of the snapshot and keep the ones that disconnect it.
///
/// Results are in [`SocialGraph::edges`] order.
pub fn critical_relationships(graph: &SocialGraph) -> Vec<BlockResult> {
    graph
        .edges()
        .iter()
        .map(|rel| simulate_block(graph, rel.pair.first, rel.pair.second))
        .filter(|r| !r.still_connected())
        .collect()
}

/// Parallel [`critical_relationships`]. Output is identical to the sequential version,
/// independent of the Rayon thread count.
#[cfg(feature = "parallel")]
pub fn critical_relationships_parallel(graph: &SocialGraph) -> Vec<BlockResult> {
    use rayon::prelude::*;

    graph
        .edges()
        .par_iter()
        .map(|rel| simulate_block(graph, rel.pair.first, rel.pair.second))
        .filter(|r| !r.still_connected())
        .collect()
}
