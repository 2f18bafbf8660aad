use serde::{Deserialize, Serialize};

/// User satisfaction label on a shown recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Satisfaction {
    Liked,
    Disliked,
}

/// One feedback submission tied to a shown listing
///
/// Records are append-only and insertion-ordered; there is no uniqueness
/// constraint, so repeated submissions for the same listing all persist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRecord {
    pub menu: String,
    pub restaurant: String,
    pub satisfaction: Satisfaction,
    pub comment: String,
}
