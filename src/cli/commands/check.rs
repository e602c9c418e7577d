//! Check command - Validate a status change without applying it

use std::path::Path;

use tracing::debug;

use crate::config::load_config;
use crate::domain::validate_transition;
use crate::errors::{IdeaflowError, Result};
use crate::fs::resolve_cwd;
use crate::schemas::{Config, IdeaStatus};

/// Check `current -> target` under the configured comment policy.
///
/// Prints `OK` when the change would be accepted and returns the rejection
/// as an error otherwise.
pub async fn run(cwd: Option<&Path>, current: &str, target: &str, comment: Option<&str>) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;
    check(&config, current, target, comment)?;
    println!("OK");
    Ok(())
}

fn check(config: &Config, current: &str, target: &str, comment: Option<&str>) -> Result<()> {
    let from = parse_status(current)?;
    let to = parse_status(target)?;
    debug!(%from, %to, policy = %config.comment_policy, "Checking transition");

    validate_transition(from, to, comment, config.comment_policy).into_result()?;

    if let Some(comment) = comment {
        let length = comment.chars().count();
        if length > config.max_comment_length {
            return Err(IdeaflowError::CommentTooLong {
                length,
                max: config.max_comment_length,
            });
        }
    }
    Ok(())
}

fn parse_status(text: &str) -> Result<IdeaStatus> {
    IdeaStatus::parse(text).ok_or_else(|| IdeaflowError::UnknownStatus(text.to_string()))
}
