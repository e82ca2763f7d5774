//! Candidate edges between components.
//!
//! One candidate per unordered pair of components, `K * (K - 1) / 2` in total, each joining the
//! two components' representatives. Joining any single vertex pair merges two components, so
//! restricting candidates to representatives keeps the optimal edge *count* at `K - 1`; only the
//! resulting topology depends on the representative choice.
//!
//! Order: pairs `(i, j)` with `i < j`, lexicographic over component order, so the first
//! `K - 1` candidates form a star around component 0.

use crate::config::Representative;
use crate::connectivity::Component;
use crate::graph::{SocialGraph, UserPair};
use crate::user::UserId;

/// Pick the representative of one component. `None` only for an empty component.
pub fn representative(
    graph: &SocialGraph,
    component: &Component,
    strategy: Representative,
) -> Option<UserId> {
    match strategy {
        Representative::LowestId => component.first().copied(),
        // `max_by_key` keeps the last maximum; iterate in reverse so ties go to the lowest id.
        Representative::HighestDegree => {
            component.iter().rev().copied().max_by_key(|&id| graph.degree(id))
        }
    }
}

pub fn generate_candidates(
    graph: &SocialGraph,
    components: &[Component],
    strategy: Representative,
) -> Vec<UserPair> {
    let reps: Vec<UserId> =
        components.iter().filter_map(|c| representative(graph, c, strategy)).collect();
    let mut candidates = Vec::with_capacity(reps.len() * reps.len().saturating_sub(1) / 2);
    for (i, &a) in reps.iter().enumerate() {
        for &b in &reps[i + 1..] {
            candidates.push(UserPair::new(a, b));
        }
    }
    candidates
}
