//! Connectivity analysis: reachability, connectivity test and component decomposition.
//!
//! Traversal is an explicit-stack depth-first search, so deep graphs (long chains) do not
//! grow the call stack. Each public call is \(O(V + E)\) adjacency work.
//!
//! Public invariant:
//! - [`identify_components`] returns a partition of the vertex set: components are pairwise
//!   disjoint, their union is every vertex, and each is internally connected.
//! - Components are ordered by their lowest member id.

use std::collections::BTreeSet;

use crate::graph::Graph;
use crate::user::UserId;

/// A maximal set of mutually reachable users.
pub type Component = BTreeSet<UserId>;

/// All vertices reachable from `start`, including `start` itself.
pub(crate) fn reachable_from<G: Graph + ?Sized>(graph: &G, start: UserId) -> Component {
    let mut visited = Component::new();
    let mut stack = vec![start];
    while let Some(cur) = stack.pop() {
        if !visited.insert(cur) {
            continue;
        }
        for nx in graph.neighbor_ids(cur) {
            if !visited.contains(&nx) {
                stack.push(nx);
            }
        }
    }
    visited
}

/// Connectivity test that also reports how many vertices the traversal touched.
pub(crate) fn connectivity_with_visits<G: Graph + ?Sized>(graph: &G) -> (bool, usize) {
    let ids = graph.node_ids();
    match ids.first() {
        None => (true, 0),
        Some(&start) => {
            let visited = reachable_from(graph, start).len();
            (visited == ids.len(), visited)
        }
    }
}

/// `true` iff every vertex is reachable from the first one.
///
/// Graphs with zero or one vertex are connected.
pub fn verify_connectivity<G: Graph + ?Sized>(graph: &G) -> bool {
    connectivity_with_visits(graph).0
}

/// Split the graph into its connected components.
pub fn identify_components<G: Graph + ?Sized>(graph: &G) -> Vec<Component> {
    let mut assigned = Component::new();
    let mut components = Vec::new();
    for id in graph.node_ids() {
        if assigned.contains(&id) {
            continue;
        }
        let component = reachable_from(graph, id);
        assigned.extend(component.iter().copied());
        components.push(component);
    }
    components
}

/// The component containing `user`; empty when the user is not in the graph.
pub fn component_of<G: Graph + ?Sized>(graph: &G, user: UserId) -> Component {
    if !graph.node_ids().contains(&user) {
        return Component::new();
    }
    reachable_from(graph, user)
}
