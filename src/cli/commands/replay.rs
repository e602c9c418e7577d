//! Replay command - Run a scripted session against an in-memory board
//!
//! A script is a JSON array of actions:
//!
//! ```json
//! [
//!   {"action": "submit", "actor": {"id": "ann", "role": "submitter"},
//!    "title": "Dark mode", "description": "Add a dark theme", "category": "UI"},
//!   {"action": "status", "actor": {"id": "eve", "role": "evaluator"},
//!    "idea": 1, "status": "UNDER_REVIEW"},
//!   {"action": "comment", "actor": {"id": "eve", "role": "evaluator"},
//!    "idea": 1, "comment": "Looks feasible"}
//! ]
//! ```
//!
//! Rejected actions are recorded in the report and the replay continues.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::{Actor, IdeaBoard};
use crate::config::load_config;
use crate::domain::{display_label, CommentPolicy, TransitionRequest};
use crate::errors::{IdeaflowError, Result};
use crate::fs::{read_json, read_json_from, resolve_cwd};
use crate::schemas::{Evaluation, Idea, IdeaStatus, NewIdea};

/// One scripted action
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayAction {
    Submit {
        actor: Actor,
        title: String,
        description: String,
        category: String,
    },
    Status {
        actor: Actor,
        idea: u64,
        status: String,
        #[serde(default)]
        comment: Option<String>,
        #[serde(default)]
        expected_version: Option<u64>,
    },
    Comment {
        actor: Actor,
        idea: u64,
        comment: String,
    },
}

impl ReplayAction {
    fn name(&self) -> &'static str {
        match self {
            ReplayAction::Submit { .. } => "submit",
            ReplayAction::Status { .. } => "status",
            ReplayAction::Comment { .. } => "comment",
        }
    }
}

/// Outcome of one action
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub action: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An idea with its evaluation history
#[derive(Debug, Clone, Serialize)]
pub struct IdeaReport {
    pub idea: Idea,
    pub history: Vec<Evaluation>,
}

/// Full result of a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub comment_policy: CommentPolicy,
    pub steps: Vec<StepReport>,
    pub ideas: Vec<IdeaReport>,
}

impl ReplayReport {
    /// Number of actions the board refused
    pub fn rejected(&self) -> usize {
        self.steps.iter().filter(|s| !s.ok).count()
    }
}

/// Replay a script from `file`, or stdin when no file is given
pub async fn run(cwd: Option<&Path>, file: Option<PathBuf>, json: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;

    let actions: Vec<ReplayAction> = match file {
        Some(path) => read_json(&resolve_script_path(&root, &path))?,
        None => read_json_from(std::io::stdin().lock())?,
    };

    let board = IdeaBoard::new(config);
    let report = replay(&board, actions).await?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| IdeaflowError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        println!("{}", render_text(&report));
    }
    Ok(())
}

fn resolve_script_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Apply `actions` in order and collect the outcome of each.
pub async fn replay(board: &IdeaBoard, actions: Vec<ReplayAction>) -> Result<ReplayReport> {
    let total = actions.len();
    let mut steps = Vec::with_capacity(total);

    for (index, action) in actions.into_iter().enumerate() {
        let step = index + 1;
        let name = action.name();
        let report = match apply(board, action).await {
            Ok(idea_id) => StepReport {
                step,
                action: name,
                ok: true,
                idea_id: Some(idea_id),
                code: None,
                message: None,
            },
            Err(e) => {
                warn!(step, action = name, code = e.code(), "Replay step refused: {}", e);
                StepReport {
                    step,
                    action: name,
                    ok: false,
                    idea_id: None,
                    code: Some(e.code()),
                    message: Some(e.to_string()),
                }
            }
        };
        steps.push(report);
    }

    let mut ideas = Vec::new();
    for idea in board.list_ideas().await {
        let history = board.evaluation_history(idea.id).await?;
        ideas.push(IdeaReport { idea, history });
    }

    let report = ReplayReport {
        comment_policy: board.config().comment_policy,
        steps,
        ideas,
    };
    info!(steps = total, rejected = report.rejected(), "Replay finished");
    Ok(report)
}

async fn apply(board: &IdeaBoard, action: ReplayAction) -> Result<u64> {
    match action {
        ReplayAction::Submit {
            actor,
            title,
            description,
            category,
        } => {
            let idea = board
                .submit_idea(&actor, NewIdea::new(title, description, category))
                .await?;
            Ok(idea.id)
        }
        ReplayAction::Status {
            actor,
            idea,
            status,
            comment,
            expected_version,
        } => {
            let target = IdeaStatus::parse(&status)
                .ok_or_else(|| IdeaflowError::UnknownStatus(status.clone()))?;
            let mut request = TransitionRequest::new(target);
            if let Some(comment) = comment {
                request = request.with_comment(comment);
            }
            if let Some(version) = expected_version {
                request = request.with_expected_version(version);
            }
            board.update_status(idea, &actor, request).await?;
            Ok(idea)
        }
        ReplayAction::Comment {
            actor,
            idea,
            comment,
        } => {
            board.add_comment(idea, &actor, &comment).await?;
            Ok(idea)
        }
    }
}

fn render_text(report: &ReplayReport) -> String {
    let mut lines = Vec::new();

    for step in &report.steps {
        match (&step.code, &step.message) {
            (Some(code), Some(message)) => {
                lines.push(format!("#{} {:<8} {} {}", step.step, step.action, code, message))
            }
            _ => lines.push(format!(
                "#{} {:<8} ok (idea {})",
                step.step,
                step.action,
                step.idea_id.unwrap_or_default()
            )),
        }
    }

    for entry in &report.ideas {
        let idea = &entry.idea;
        lines.push(String::new());
        lines.push(format!(
            "[{}] {} ({}, v{}) by {}",
            idea.id,
            idea.title,
            display_label(idea.status),
            idea.version,
            idea.submitter
        ));
        for evaluation in &entry.history {
            let change = evaluation
                .status_snapshot
                .map(|s| format!(" -> {}", display_label(s)))
                .unwrap_or_default();
            let comment = if evaluation.comment.is_empty() {
                String::new()
            } else {
                format!(": {}", evaluation.comment)
            };
            lines.push(format!(
                "    {} ({}){}{}",
                evaluation.actor, evaluation.actor_role, change, comment
            ));
        }
    }

    lines.join("\n")
}
