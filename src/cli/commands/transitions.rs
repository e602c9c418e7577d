//! Transitions command - List allowed next statuses

use serde::Serialize;

use crate::domain::{display_label, get_allowed_next_statuses};
use crate::errors::{IdeaflowError, Result};
use crate::schemas::IdeaStatus;

#[derive(Debug, Serialize)]
struct TransitionsView {
    status: String,
    label: String,
    allowed: Vec<IdeaStatus>,
}

/// Print the statuses reachable from `status`. Unknown text has none.
pub async fn run(status: &str, json: bool) -> Result<()> {
    println!("{}", render(status, json)?);
    Ok(())
}

fn render(status: &str, json: bool) -> Result<String> {
    let (label, allowed) = match IdeaStatus::parse(status) {
        Some(current) => (
            display_label(current).to_string(),
            get_allowed_next_statuses(current),
        ),
        None => (status.to_string(), Vec::new()),
    };
    let view = TransitionsView {
        status: status.to_string(),
        label,
        allowed,
    };

    if json {
        return serde_json::to_string_pretty(&view)
            .map_err(|e| IdeaflowError::InvalidJson(e.to_string()));
    }

    if view.allowed.is_empty() {
        return Ok(format!("{}: no further transitions", view.label));
    }
    let targets: Vec<String> = view
        .allowed
        .iter()
        .map(|s| format!("{} ({})", display_label(*s), s))
        .collect();
    Ok(format!("{} -> {}", view.label, targets.join(", ")))
}
