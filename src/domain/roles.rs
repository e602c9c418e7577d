//! Role resolution
//!
//! Roles arrive as free-form text from the identity token and may combine
//! several capabilities in one value (`"evaluator/admin"`). Every check goes
//! through [`normalize`] and then matches substrings, never whole constants.

use serde::Serialize;

/// A permission derived from a role string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// May create new ideas
    Submit,
    /// May change idea status and leave evaluation comments
    Evaluate,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Submit => write!(f, "submit ideas"),
            Capability::Evaluate => write!(f, "evaluate ideas"),
        }
    }
}

/// Capability set resolved from a single role string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Capabilities {
    pub can_submit: bool,
    pub can_evaluate: bool,
}

impl Capabilities {
    /// Check a single capability
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::Submit => self.can_submit,
            Capability::Evaluate => self.can_evaluate,
        }
    }
}

/// Normalize a role for comparison: trimmed and lowercased, empty when absent.
pub fn normalize(role: Option<&str>) -> String {
    match role {
        Some(role) => role.trim().to_lowercase(),
        None => String::new(),
    }
}

/// Role text contains "admin" (e.g. "ADMIN", "evaluator/admin").
pub fn has_admin_capability(role: Option<&str>) -> bool {
    normalize(role).contains("admin")
}

/// Role text contains "evaluator".
pub fn has_evaluate_capability(role: Option<&str>) -> bool {
    normalize(role).contains("evaluator")
}

/// Role text is exactly "submitter".
pub fn is_exact_submitter(role: Option<&str>) -> bool {
    normalize(role) == "submitter"
}

/// Evaluators and admins may review ideas.
pub fn can_evaluate(role: Option<&str>) -> bool {
    has_evaluate_capability(role) || has_admin_capability(role)
}

/// Submitters and admins may create ideas. A bare "evaluator" may not.
pub fn can_submit(role: Option<&str>) -> bool {
    is_exact_submitter(role) || has_admin_capability(role)
}

/// Resolve both capabilities at once
pub fn capabilities(role: Option<&str>) -> Capabilities {
    Capabilities {
        can_submit: can_submit(role),
        can_evaluate: can_evaluate(role),
    }
}

/// Human-readable label for a role.
///
/// Unrecognised roles are shown with their first character uppercased and
/// the rest lowercased, taken from the original (untrimmed) text.
pub fn role_label(role: Option<&str>) -> String {
    let raw = match role {
        Some(raw) if !raw.is_empty() => raw,
        _ => return "Unknown".to_string(),
    };

    let normalized = normalize(role);
    let evaluator = normalized.contains("evaluator");
    let admin = normalized.contains("admin");

    if evaluator && admin {
        return "Admin (Evaluator)".to_string();
    }
    if evaluator {
        return "Evaluator".to_string();
    }
    if admin {
        return "Admin".to_string();
    }
    if normalized == "submitter" {
        return "Submitter".to_string();
    }

    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
