//! Social graph storage plus the minimal adapter trait the analyzers run on.
//!
//! [`SocialGraph`] is an undirected, weighted adjacency-list graph keyed by [`UserId`].
//! Invariants maintained by every mutator:
//! - an edge `(u, v)` is present in both `u`'s and `v`'s lists, with the same weight;
//! - there is at most one edge per unordered pair and never a self-loop;
//! - `edge_count()` equals the number of unordered pairs stored.
//!
//! Operations naming a user that is not in the graph are no-ops (or return an empty/`None`
//! answer). Use [`SocialGraph::try_add_edge`] when a construction mistake should be reported.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::GraphError;
use crate::user::{User, UserId};

/// Read-only adjacency view used by the connectivity analyzer.
///
/// Edges are interpreted as undirected; implementors should list each neighbor on both sides.
pub trait Graph {
    fn node_count(&self) -> usize;
    /// All node ids, in a stable order.
    fn node_ids(&self) -> Vec<UserId>;
    fn neighbor_ids(&self, node: UserId) -> Vec<UserId>;
}

/// One entry of an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub user: UserId,
    pub weight: u32,
}

/// An unordered pair of users.
///
/// `first`/`second` keep the order the pair was built with (used for display), but equality
/// and hashing are symmetric: `UserPair::new(a, b) == UserPair::new(b, a)`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPair {
    pub first: UserId,
    pub second: UserId,
}

impl UserPair {
    pub fn new(first: UserId, second: UserId) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.first == user || self.second == user
    }

    fn ordered(&self) -> (UserId, UserId) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

impl PartialEq for UserPair {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for UserPair {}

impl Hash for UserPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl fmt::Display for UserPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

/// A stored undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    pub pair: UserPair,
    pub weight: u32,
}

#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    users: BTreeMap<UserId, User>,
    adjacency: BTreeMap<UserId, Vec<Neighbor>>,
    edge_count: usize,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph through the strict path: every edge must join two listed users,
    /// must not be a self-loop and must not repeat a pair.
    pub fn from_edges<U, E>(users: U, edges: E) -> Result<Self, GraphError>
    where
        U: IntoIterator<Item = User>,
        E: IntoIterator<Item = (UserId, UserId, u32)>,
    {
        let mut graph = Self::new();
        for user in users {
            graph.add_user(user);
        }
        for (u, v, weight) in edges {
            graph.try_add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Add a user. Returns `false` (and keeps the existing entry) if the id is already present.
    pub fn add_user(&mut self, user: User) -> bool {
        if self.users.contains_key(&user.id) {
            return false;
        }
        self.adjacency.insert(user.id, Vec::new());
        self.users.insert(user.id, user);
        true
    }

    /// Add an undirected edge. Returns `true` only if a new edge was stored; an existing edge
    /// keeps its weight, and self-loops or unknown endpoints are ignored.
    pub fn add_edge(&mut self, u: UserId, v: UserId, weight: u32) -> bool {
        if u == v || !self.contains_user(u) || !self.contains_user(v) || self.has_edge(u, v) {
            return false;
        }
        self.link(u, v, weight);
        true
    }

    pub fn try_add_edge(&mut self, u: UserId, v: UserId, weight: u32) -> Result<(), GraphError> {
        for id in [u, v] {
            if !self.contains_user(id) {
                return Err(GraphError::UnknownUser(id));
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge(u, v));
        }
        self.link(u, v, weight);
        Ok(())
    }

    /// Add an edge whose weight shrinks as the number of interactions grows:
    /// `max(1, 100 - interactions)`.
    pub fn add_edge_by_interactions(&mut self, u: UserId, v: UserId, interactions: u32) -> bool {
        self.add_edge(u, v, 100u32.saturating_sub(interactions).max(1))
    }

    fn link(&mut self, u: UserId, v: UserId, weight: u32) {
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.push(Neighbor { user: v, weight });
        }
        if let Some(list) = self.adjacency.get_mut(&v) {
            list.push(Neighbor { user: u, weight });
        }
        self.edge_count += 1;
    }

    /// Remove the edge between `u` and `v`. Returns whether an edge was actually removed.
    pub fn remove_edge(&mut self, u: UserId, v: UserId) -> bool {
        if !self.has_edge(u, v) {
            return false;
        }
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.retain(|n| n.user != v);
        }
        if let Some(list) = self.adjacency.get_mut(&v) {
            list.retain(|n| n.user != u);
        }
        self.edge_count -= 1;
        true
    }

    /// Neighbors of `user` with edge weights, in insertion order. Empty for unknown users.
    pub fn neighbors(&self, user: UserId) -> &[Neighbor] {
        self.adjacency.get(&user).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, u: UserId, v: UserId) -> bool {
        self.neighbors(u).iter().any(|n| n.user == v)
    }

    /// Weight of the edge between `u` and `v`, `None` when there is no such edge.
    pub fn edge_weight(&self, u: UserId, v: UserId) -> Option<u32> {
        self.neighbors(u).iter().find(|n| n.user == v).map(|n| n.weight)
    }

    pub fn degree(&self, user: UserId) -> usize {
        self.neighbors(user).len()
    }

    pub fn vertex_count(&self) -> usize {
        self.users.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains_user(&self, user: UserId) -> bool {
        self.users.contains_key(&user)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.users.values()
    }

    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }

    /// Every edge exactly once, ordered by its lower endpoint and then insertion order.
    pub fn edges(&self) -> Vec<Relationship> {
        self.adjacency
            .iter()
            .flat_map(|(&u, list)| {
                list.iter()
                    .filter(move |n| u < n.user)
                    .map(move |n| Relationship { pair: UserPair::new(u, n.user), weight: n.weight })
            })
            .collect()
    }

    /// Fully independent deep copy; mutating it never affects `self`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Display name of a user, falling back to its id.
    pub fn label(&self, id: UserId) -> String {
        self.user(id).map(|u| u.name.clone()).unwrap_or_else(|| id.to_string())
    }

    /// Export to `petgraph`, with node weights carrying the user id.
    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(&self) -> petgraph::graph::UnGraph<UserId, u32> {
        let mut out = petgraph::graph::UnGraph::new_undirected();
        let index: BTreeMap<UserId, petgraph::graph::NodeIndex> =
            self.user_ids().map(|id| (id, out.add_node(id))).collect();
        for rel in self.edges() {
            out.add_edge(index[&rel.pair.first], index[&rel.pair.second], rel.weight);
        }
        out
    }
}

impl Graph for SocialGraph {
    fn node_count(&self) -> usize {
        self.vertex_count()
    }

    fn node_ids(&self) -> Vec<UserId> {
        self.user_ids().collect()
    }

    fn neighbor_ids(&self, node: UserId) -> Vec<UserId> {
        self.neighbors(node).iter().map(|n| n.user).collect()
    }
}

impl fmt::Display for SocialGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (users, relationships) = (self.vertex_count(), self.edge_count());
        writeln!(f, "Social graph: {users} users, {relationships} relationships")?;
        for (id, user) in &self.users {
            let friends: Vec<String> =
                self.neighbors(*id).iter().map(|n| self.label(n.user)).collect();
            if friends.is_empty() {
                writeln!(f, "  {user} -> (no friends)")?;
            } else {
                writeln!(f, "  {user} -> {}", friends.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Node `i` of a petgraph graph is exposed as `UserId(i)`.
#[cfg(feature = "petgraph")]
impl<N, E, Ix> Graph for petgraph::Graph<N, E, petgraph::Undirected, Ix>
where
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn node_ids(&self) -> Vec<UserId> {
        self.node_indices().map(|idx| UserId(idx.index() as u32)).collect()
    }
    fn neighbor_ids(&self, node: UserId) -> Vec<UserId> {
        // Check before building the index: narrow `Ix` types truncate.
        let raw = node.0 as usize;
        if raw >= self.node_count() {
            return Vec::new();
        }
        self.neighbors(petgraph::graph::NodeIndex::<Ix>::new(raw))
            .map(|n| UserId(n.index() as u32))
            .collect()
    }
}
