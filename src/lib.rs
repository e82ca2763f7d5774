//! # blocksim
//!
//! Simulate one user blocking another on a social-graph snapshot, check whether everyone is
//! still reachable, and if not, find the fewest new relationships that reconnect the graph.
//!
//! - [`simulate_block`]: the one-shot request/response operation.
//! - [`verify_connectivity`] / [`identify_components`]: connectivity analysis.
//! - [`find_minimal_reconnection`]: exhaustive backtracking with pruning (optimal count).
//! - [`find_fast_reconnection`]: greedy star, for comparison.
//!
//! Inputs are read-only snapshots; all work happens on private copies.
//!
//! Optional features:
//! - `serde`: derive `Serialize`/`Deserialize` for configs, users and results.
//! - `petgraph`: run the connectivity analyzer on `petgraph` undirected graphs.
//! - `parallel`: `critical_relationships_parallel` via Rayon.

pub mod candidates;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod search;
pub mod simulate;
pub mod user;

pub use candidates::generate_candidates;
pub use config::{HubChoice, ReconnectConfig, Representative};
pub use connectivity::{component_of, identify_components, verify_connectivity, Component};
pub use error::GraphError;
pub use graph::{Graph, Neighbor, Relationship, SocialGraph, UserPair};
pub use greedy::{find_fast_reconnection, find_fast_reconnection_with};
pub use search::{
    find_minimal_reconnection, find_minimal_reconnection_with, Reconnection, SearchStats,
};
#[cfg(feature = "parallel")]
pub use simulate::critical_relationships_parallel;
pub use simulate::{
    critical_relationships, simulate_block, BlockOutcome, BlockResult, BlockSimulator,
};
pub use user::{Profile, User, UserId};
