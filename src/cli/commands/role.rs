//! Role command - Show how a role string is interpreted

use serde::Serialize;

use crate::domain::{capabilities, normalize, role_label, Capabilities};
use crate::errors::{IdeaflowError, Result};

#[derive(Debug, Serialize)]
struct RoleView {
    role: String,
    normalized: String,
    label: String,
    #[serde(flatten)]
    capabilities: Capabilities,
}

/// Print the capabilities resolved from `role`
pub async fn run(role: &str, json: bool) -> Result<()> {
    println!("{}", render(role, json)?);
    Ok(())
}

fn render(role: &str, json: bool) -> Result<String> {
    let view = RoleView {
        role: role.to_string(),
        normalized: normalize(Some(role)),
        label: role_label(Some(role)),
        capabilities: capabilities(Some(role)),
    };

    if json {
        return serde_json::to_string_pretty(&view)
            .map_err(|e| IdeaflowError::InvalidJson(e.to_string()));
    }

    Ok(format!(
        "{}\n  submit:   {}\n  evaluate: {}",
        view.label,
        yes_no(view.capabilities.can_submit),
        yes_no(view.capabilities.can_evaluate)
    ))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
