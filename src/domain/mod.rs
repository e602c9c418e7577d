//! Domain logic for role resolution, idea statuses and transitions

mod roles;
mod states;
mod suggestions;
mod transitions;
mod validation;


pub use roles::{
    can_evaluate, can_submit, capabilities, has_admin_capability, has_evaluate_capability,
    is_exact_submitter, normalize, role_label, Capabilities, Capability,
};
pub use states::{
    get_allowed_next_statuses, get_allowed_next_statuses_for, is_terminal_status,
    is_valid_transition, IDEA_STATUSES,
};
pub use suggestions::{
    display_label, display_label_for, get_status_suggestions, get_status_suggestions_for,
    StatusSuggestion,
};
pub use transitions::{apply_status_transition, TransitionRequest, TransitionResult};
pub use validation::{
    is_blank, is_comment_required, validate_transition, CommentPolicy, TransitionViolation,
    ValidationResult,
};
