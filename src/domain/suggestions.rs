//! Display metadata for statuses: labels and next-step suggestions

use serde::Serialize;

use crate::schemas::IdeaStatus;

/// A suggested next status, as offered to an evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSuggestion {
    /// Status the idea would move to
    pub target: IdeaStatus,

    /// Short action label ("Start Review")
    pub label: &'static str,

    /// One-line description of the action
    pub description: &'static str,
}

impl StatusSuggestion {
    const fn new(target: IdeaStatus, label: &'static str, description: &'static str) -> Self {
        StatusSuggestion {
            target,
            label,
            description,
        }
    }
}

/// Next-step suggestions for an idea in `current`, in display order.
pub fn get_status_suggestions(current: IdeaStatus) -> Vec<StatusSuggestion> {
    match current {
        IdeaStatus::Submitted => vec![
            StatusSuggestion::new(
                IdeaStatus::UnderReview,
                "Start Review",
                "Begin evaluating this idea",
            ),
            StatusSuggestion::new(
                IdeaStatus::Rejected,
                "Reject",
                "Decline with feedback required",
            ),
        ],
        IdeaStatus::UnderReview => vec![
            StatusSuggestion::new(IdeaStatus::Accepted, "Accept", "Approve for implementation"),
            StatusSuggestion::new(IdeaStatus::Rejected, "Reject", "Decline with feedback"),
        ],
        IdeaStatus::Accepted | IdeaStatus::Rejected => vec![],
    }
}

/// Suggestions for exact wire text; anything else yields none.
pub fn get_status_suggestions_for(current: &str) -> Vec<StatusSuggestion> {
    IdeaStatus::from_wire(current)
        .map(get_status_suggestions)
        .unwrap_or_default()
}

/// Human-readable label for a status
pub fn display_label(status: IdeaStatus) -> &'static str {
    match status {
        IdeaStatus::Submitted => "Submitted",
        IdeaStatus::UnderReview => "Under Review",
        IdeaStatus::Accepted => "Accepted",
        IdeaStatus::Rejected => "Rejected",
    }
}

/// Label for raw wire text. Anything other than the four exact wire values
/// is returned unchanged.
pub fn display_label_for(status: &str) -> String {
    match IdeaStatus::from_wire(status) {
        Some(known) => display_label(known).to_string(),
        None => status.to_string(),
    }
}
