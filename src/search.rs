//! Minimum-cardinality reconnection by backtracking.
//!
//! Given a disconnected graph with `K` components, find the smallest subset of candidate edges
//! (see [`crate::candidates`]) whose addition makes the graph connected.
//!
//! The search walks a binary include/exclude decision tree over the ordered candidate list:
//! - a non-empty accumulated subset is tested on a trial copy of the graph; a feasible subset
//!   ends its branch, and replaces the best solution only if strictly smaller;
//! - reaching the lower bound `K - 1` stops the whole search;
//! - a branch whose subset is already as large as the best solution is pruned.
//!
//! Ties go to the first minimal solution in enumeration order. Worst case is \(O(2^C)\) trial
//! connectivity checks for `C` candidates; with the default candidate order the first
//! include-only path is a star of size `K - 1` and the search stops there.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crate::candidates::generate_candidates;
use crate::config::ReconnectConfig;
use crate::connectivity::{connectivity_with_visits, identify_components};
use crate::graph::{SocialGraph, UserPair};

/// Weight given to suggested edges when they are tried on a trial graph.
pub const SUGGESTED_EDGE_WEIGHT: u32 = 1;

/// Per-call instrumentation. Informative only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices visited by connectivity checks plus edge mutations on working copies.
    pub operations: u64,
    /// Decision-tree nodes entered.
    pub nodes_explored: u64,
    /// Branches abandoned without being entered: size-bound prunes, plus the exclusion
    /// branches skipped once the lower bound is reached.
    pub nodes_pruned: u64,
    pub elapsed: Duration,
}

impl SearchStats {
    /// Share of decision-tree nodes cut off, in `[0, 1]`.
    pub fn prune_ratio(&self) -> f64 {
        let total = self.nodes_explored + self.nodes_pruned;
        if total == 0 {
            return 0.0;
        }
        self.nodes_pruned as f64 / total as f64
    }
}

/// Edges proposed to reconnect a graph, with the component count they were computed for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconnection {
    pub edges: Vec<UserPair>,
    pub components: usize,
    pub stats: SearchStats,
}

/// Optimal (minimum-cardinality) reconnection with the default configuration.
pub fn find_minimal_reconnection(graph: &SocialGraph) -> Vec<UserPair> {
    find_minimal_reconnection_with(graph, ReconnectConfig::default()).edges
}

/// Optimal reconnection; empty when the graph already has at most one component.
pub fn find_minimal_reconnection_with(
    graph: &SocialGraph,
    config: ReconnectConfig,
) -> Reconnection {
    let start = Instant::now();
    let components = identify_components(graph);
    let mut stats =
        SearchStats { operations: graph.vertex_count() as u64, ..SearchStats::default() };

    if components.len() <= 1 {
        stats.elapsed = start.elapsed();
        return Reconnection { edges: Vec::new(), components: components.len(), stats };
    }

    let candidates = generate_candidates(graph, &components, config.representative);
    let (best, search_stats) = backtrack_minimal(graph, &candidates, components.len() - 1);
    stats.operations += search_stats.operations;
    stats.nodes_explored = search_stats.nodes_explored;
    stats.nodes_pruned = search_stats.nodes_pruned;
    stats.elapsed = start.elapsed();

    let edges = best.unwrap_or_default();
    tracing::debug!(
        components = components.len(),
        candidates = candidates.len(),
        edges = edges.len(),
        explored = stats.nodes_explored,
        pruned = stats.nodes_pruned,
        "minimal reconnection search finished"
    );
    Reconnection { edges, components: components.len(), stats }
}

/// Run the decision-tree search over `candidates`, stopping early at `lower_bound`.
pub(crate) fn backtrack_minimal(
    graph: &SocialGraph,
    candidates: &[UserPair],
    lower_bound: usize,
) -> (Option<Vec<UserPair>>, SearchStats) {
    let mut ctx = SearchContext {
        graph,
        candidates,
        lower_bound,
        current: Vec::with_capacity(candidates.len()),
        best: None,
        stats: SearchStats::default(),
    };
    let _ = ctx.explore(0);
    (ctx.best, ctx.stats)
}

struct SearchContext<'a> {
    graph: &'a SocialGraph,
    candidates: &'a [UserPair],
    lower_bound: usize,
    current: Vec<UserPair>,
    best: Option<Vec<UserPair>>,
    stats: SearchStats,
}

impl SearchContext<'_> {
    /// `Break` means the lower bound was reached and nothing else may be explored.
    fn explore(&mut self, index: usize) -> ControlFlow<()> {
        self.stats.nodes_explored += 1;

        if !self.current.is_empty() && self.trial_is_connected() {
            let improves = self.best.as_ref().map_or(true, |best| self.current.len() < best.len());
            if improves {
                tracing::trace!(size = self.current.len(), "improved reconnection found");
                self.best = Some(self.current.clone());
                if self.current.len() == self.lower_bound {
                    return ControlFlow::Break(());
                }
            }
            return ControlFlow::Continue(());
        }

        if index >= self.candidates.len() {
            return ControlFlow::Continue(());
        }

        if let Some(best) = &self.best {
            if self.current.len() >= best.len() {
                self.stats.nodes_pruned += 1;
                return ControlFlow::Continue(());
            }
        }

        self.current.push(self.candidates[index]);
        let included = self.explore(index + 1);
        self.current.pop();
        if included.is_break() {
            // The exclusion branch is never entered.
            self.stats.nodes_pruned += 1;
            return included;
        }

        self.explore(index + 1)
    }

    fn trial_is_connected(&mut self) -> bool {
        let mut trial = self.graph.copy();
        for pair in &self.current {
            if trial.add_edge(pair.first, pair.second, SUGGESTED_EDGE_WEIGHT) {
                self.stats.operations += 1;
            }
        }
        let (connected, visited) = connectivity_with_visits(&trial);
        self.stats.operations += visited as u64;
        connected
    }
}
