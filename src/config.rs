//! Knobs that pick *which* edges are suggested. None of them change how many are needed.

/// How a component's representative vertex is chosen for candidate edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Representative {
    /// The member with the lowest id. Reproducible across runs.
    #[default]
    LowestId,
    /// The member with the most remaining relationships; ties go to the lowest id.
    HighestDegree,
}

/// Which component becomes the hub of the greedy star.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HubChoice {
    #[default]
    Smallest,
    Largest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReconnectConfig {
    pub representative: Representative,
    pub hub: HubChoice,
}
