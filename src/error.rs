use crate::user::UserId;

/// Rejections reported by the strict graph-construction path
/// ([`SocialGraph::try_add_edge`](crate::SocialGraph::try_add_edge),
/// [`SocialGraph::from_edges`](crate::SocialGraph::from_edges)).
///
/// The tolerant mutators never produce these; they report "nothing changed" instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("user {0} is not part of the graph")]
    UnknownUser(UserId),
    #[error("user {0} cannot be related to itself")]
    SelfLoop(UserId),
    #[error("users {0} and {1} are already related")]
    DuplicateEdge(UserId, UserId),
}
