//! Idea status state machine definitions
//!
//! ```text
//! SUBMITTED    -> UNDER_REVIEW | REJECTED
//! UNDER_REVIEW -> ACCEPTED | REJECTED
//! ACCEPTED, REJECTED: terminal
//! ```

use crate::schemas::IdeaStatus;

/// All statuses in workflow order.
pub const IDEA_STATUSES: &[IdeaStatus] = &[
    IdeaStatus::Submitted,
    IdeaStatus::UnderReview,
    IdeaStatus::Accepted,
    IdeaStatus::Rejected,
];

/// Returns the allowed next statuses for a given current status.
///
/// The order is the display order (forward step first, rejection last).
/// Terminal statuses return an empty Vec.
pub fn get_allowed_next_statuses(current: IdeaStatus) -> Vec<IdeaStatus> {
    match current {
        IdeaStatus::Submitted => vec![IdeaStatus::UnderReview, IdeaStatus::Rejected],
        IdeaStatus::UnderReview => vec![IdeaStatus::Accepted, IdeaStatus::Rejected],
        IdeaStatus::Accepted | IdeaStatus::Rejected => vec![],
    }
}

/// Same as [`get_allowed_next_statuses`] for raw status text.
///
/// Only exact wire text is recognised; anything else has no allowed transitions.
pub fn get_allowed_next_statuses_for(current: &str) -> Vec<IdeaStatus> {
    IdeaStatus::from_wire(current)
        .map(get_allowed_next_statuses)
        .unwrap_or_default()
}

/// Check whether `target` is reachable from `current` in one step.
pub fn is_valid_transition(current: IdeaStatus, target: IdeaStatus) -> bool {
    get_allowed_next_statuses(current).contains(&target)
}

/// Check if a status is terminal (accepted or rejected).
pub fn is_terminal_status(status: IdeaStatus) -> bool {
    get_allowed_next_statuses(status).is_empty()
}
