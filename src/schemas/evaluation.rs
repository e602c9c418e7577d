//! Evaluation schema - Append-only review entries attached to an idea

use serde::{Deserialize, Serialize};

use super::IdeaStatus;

/// One entry in an idea's evaluation history.
///
/// Entries are created once, when a status change or comment is accepted,
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Board-assigned identifier, unique across all ideas
    pub id: u64,

    /// Idea this entry belongs to
    pub idea_id: u64,

    /// Identity of the evaluator
    pub actor: String,

    /// Display label of the evaluator's role at the time of the entry
    pub actor_role: String,

    /// Free-text comment (may be empty on transitions that do not require one)
    pub comment: String,

    /// Status the idea was moved to by this entry, None for comment-only entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_snapshot: Option<IdeaStatus>,

    /// ISO 8601 creation timestamp
    pub created_at: String,
}

impl Evaluation {
    /// Whether the entry recorded a status change
    pub fn is_transition(&self) -> bool {
        self.status_snapshot.is_some()
    }
}
