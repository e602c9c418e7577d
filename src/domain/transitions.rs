//! Status transition logic
//!
//! Pure functions for applying status transitions to ideas.

use serde::{Deserialize, Serialize};

use crate::schemas::{Idea, IdeaStatus};

use super::validation::{validate_transition, CommentPolicy, TransitionViolation};

/// A request to move an idea to a new status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// Status the evaluator wants to move the idea to
    pub target: IdeaStatus,

    /// Justification; required for some targets depending on policy
    #[serde(default)]
    pub comment: Option<String>,

    /// Version the caller last saw; checked by the board when present
    #[serde(default)]
    pub expected_version: Option<u64>,
}

impl TransitionRequest {
    pub fn new(target: IdeaStatus) -> Self {
        TransitionRequest {
            target,
            comment: None,
            expected_version: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_expected_version(mut self, version: u64) -> Self {
        self.expected_version = Some(version);
        self
    }
}

/// Result of a status transition attempt
#[derive(Debug)]
pub enum TransitionResult {
    /// Successful transition with the new idea state
    Success {
        /// The idea with updated status, version and timestamp
        next_idea: Idea,
    },
    /// Refused transition
    Error {
        /// Why the transition was refused
        violation: TransitionViolation,
    },
}

impl TransitionResult {
    /// Check if the transition was successful
    pub fn is_success(&self) -> bool {
        matches!(self, TransitionResult::Success { .. })
    }

    /// Check if the transition failed
    pub fn is_error(&self) -> bool {
        matches!(self, TransitionResult::Error { .. })
    }

    /// Get the next idea if the transition was successful
    pub fn idea(self) -> Option<Idea> {
        match self {
            TransitionResult::Success { next_idea } => Some(next_idea),
            TransitionResult::Error { .. } => None,
        }
    }

    /// Get the violation if the transition failed
    pub fn violation(self) -> Option<TransitionViolation> {
        match self {
            TransitionResult::Success { .. } => None,
            TransitionResult::Error { violation } => Some(violation),
        }
    }
}

/// Pure function that applies a status transition to an idea.
///
/// Never mutates the input. On success the returned idea carries the target
/// status, a bumped version and a fresh `updated_at`.
pub fn apply_status_transition(
    idea: &Idea,
    request: &TransitionRequest,
    policy: CommentPolicy,
) -> TransitionResult {
    let validation = validate_transition(
        idea.status,
        request.target,
        request.comment.as_deref(),
        policy,
    );
    if let Some(violation) = validation.violation {
        return TransitionResult::Error { violation };
    }

    TransitionResult::Success {
        next_idea: idea.clone().with_status(request.target),
    }
}
