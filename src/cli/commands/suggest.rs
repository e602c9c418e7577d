//! Suggest command - Show next-step suggestions for a status

use crate::domain::{get_status_suggestions, is_comment_required};
use crate::errors::{IdeaflowError, Result};
use crate::schemas::IdeaStatus;

/// Print the suggested actions for an idea in `status`
pub async fn run(status: &str, json: bool) -> Result<()> {
    println!("{}", render(status, json)?);
    Ok(())
}

fn render(status: &str, json: bool) -> Result<String> {
    let suggestions = IdeaStatus::parse(status)
        .map(get_status_suggestions)
        .unwrap_or_default();

    if json {
        return serde_json::to_string_pretty(&suggestions)
            .map_err(|e| IdeaflowError::InvalidJson(e.to_string()));
    }

    if suggestions.is_empty() {
        return Ok("No actions available".to_string());
    }
    let lines: Vec<String> = suggestions
        .iter()
        .map(|s| {
            let marker = if is_comment_required(s.target) { " *" } else { "" };
            format!("{:<14} {:<13} {}{}", s.label, s.target.as_str(), s.description, marker)
        })
        .collect();
    Ok(lines.join("\n"))
}
