//! Validation rules for status transitions

use serde::{Deserialize, Serialize};

use crate::errors::IdeaflowError;
use crate::schemas::IdeaStatus;

use super::get_allowed_next_statuses;

/// Which target statuses require an evaluator comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentPolicy {
    /// Only rejections need a justification
    #[default]
    RejectedOnly,
    /// Both final decisions need a justification
    AcceptedAndRejected,
}

impl CommentPolicy {
    /// Whether moving an idea to `target` requires a comment under this policy
    pub fn requires_comment(&self, target: IdeaStatus) -> bool {
        match self {
            CommentPolicy::RejectedOnly => target == IdeaStatus::Rejected,
            CommentPolicy::AcceptedAndRejected => {
                matches!(target, IdeaStatus::Accepted | IdeaStatus::Rejected)
            }
        }
    }
}

impl std::fmt::Display for CommentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentPolicy::RejectedOnly => write!(f, "rejected_only"),
            CommentPolicy::AcceptedAndRejected => write!(f, "accepted_and_rejected"),
        }
    }
}

/// Check if a comment is mandatory for `target` under the default policy.
pub fn is_comment_required(target: IdeaStatus) -> bool {
    CommentPolicy::default().requires_comment(target)
}

/// Treat missing, empty, and whitespace-only comments alike.
pub fn is_blank(comment: Option<&str>) -> bool {
    comment.map_or(true, |c| c.trim().is_empty())
}

/// Why a transition was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionViolation {
    /// Target is not an outgoing edge of the current status
    NotAllowed { from: IdeaStatus, to: IdeaStatus },
    /// Policy requires a comment and none was given
    CommentRequired { status: IdeaStatus },
}

impl std::fmt::Display for TransitionViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionViolation::NotAllowed { from, to } => {
                write!(f, "cannot transition from {} to {}", from, to)
            }
            TransitionViolation::CommentRequired { status } => {
                write!(f, "comment required when moving an idea to {}", status)
            }
        }
    }
}

impl From<TransitionViolation> for IdeaflowError {
    fn from(violation: TransitionViolation) -> Self {
        match violation {
            TransitionViolation::NotAllowed { from, to } => {
                IdeaflowError::InvalidTransition { from, to }
            }
            TransitionViolation::CommentRequired { status } => {
                IdeaflowError::CommentRequired { status }
            }
        }
    }
}

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// What failed (if valid is false)
    pub violation: Option<TransitionViolation>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            violation: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(violation: TransitionViolation) -> Self {
        ValidationResult {
            valid: false,
            violation: Some(violation),
        }
    }

    /// Human-readable reason for failure
    pub fn reason(&self) -> Option<String> {
        self.violation.map(|v| v.to_string())
    }

    /// Convert into a Result, mapping the violation to an error
    pub fn into_result(self) -> crate::errors::Result<()> {
        match self.violation {
            Some(violation) => Err(violation.into()),
            None => Ok(()),
        }
    }
}

/// Validate a status transition request.
///
/// The edge is checked first, so an illegal target is reported as such even
/// when the comment is also missing.
pub fn validate_transition(
    current: IdeaStatus,
    target: IdeaStatus,
    comment: Option<&str>,
    policy: CommentPolicy,
) -> ValidationResult {
    let allowed = get_allowed_next_statuses(current);
    if !allowed.contains(&target) {
        return ValidationResult::failure(TransitionViolation::NotAllowed {
            from: current,
            to: target,
        });
    }

    if policy.requires_comment(target) && is_blank(comment) {
        return ValidationResult::failure(TransitionViolation::CommentRequired { status: target });
    }

    ValidationResult::success()
}
