//! In-memory idea board
//!
//! Holds ideas and their evaluation histories, and is the only place where
//! an idea's status changes. Each idea sits behind its own async mutex, held
//! across read, validate and write, so the status and the evaluation record
//! that justifies it are always committed together.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::domain::{
    apply_status_transition, capabilities, is_blank, role_label, Capability, TransitionRequest,
    TransitionResult,
};
use crate::errors::{IdeaflowError, Result};
use crate::schemas::{Config, Evaluation, Idea, IdeaStatus, NewIdea};

/// The user performing an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Stable identity (e.g. email)
    pub id: String,

    /// Raw role claim, possibly compound ("evaluator/admin") or absent
    #[serde(default)]
    pub role: Option<String>,
}

impl Actor {
    pub fn new(id: impl Into<String>, role: Option<&str>) -> Self {
        Actor {
            id: id.into(),
            role: role.map(str::to_string),
        }
    }

    fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

/// Outcome of an accepted status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    /// The idea after the transition
    pub idea: Idea,

    /// The evaluation record appended for it
    pub evaluation: Evaluation,
}

#[derive(Debug)]
struct IdeaEntry {
    idea: Idea,
    evaluations: Vec<Evaluation>,
}

/// Concurrency-safe store of ideas and evaluations
#[derive(Debug)]
pub struct IdeaBoard {
    config: Config,
    ideas: RwLock<BTreeMap<u64, Arc<Mutex<IdeaEntry>>>>,
    next_idea_id: AtomicU64,
    next_evaluation_id: AtomicU64,
}

impl IdeaBoard {
    /// Create an empty board governed by `config`
    pub fn new(config: Config) -> Self {
        IdeaBoard {
            config,
            ideas: RwLock::new(BTreeMap::new()),
            next_idea_id: AtomicU64::new(1),
            next_evaluation_id: AtomicU64::new(1),
        }
    }

    /// Configuration the board was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Create a new idea in the Submitted state.
    ///
    /// # Errors
    /// * `Forbidden` - If the actor cannot submit
    /// * `Validation` - If a field is blank or too long
    pub async fn submit_idea(&self, actor: &Actor, fields: NewIdea) -> Result<Idea> {
        self.require(actor, Capability::Submit)?;
        let fields = self.validate_new_idea(fields)?;

        let id = self.next_idea_id.fetch_add(1, Ordering::SeqCst);
        let idea = Idea::new(id, fields, actor.id.clone());

        let entry = IdeaEntry {
            idea: idea.clone(),
            evaluations: Vec::new(),
        };
        self.ideas.write().await.insert(id, Arc::new(Mutex::new(entry)));

        info!(idea_id = id, submitter = %actor.id, "Idea submitted");
        Ok(idea)
    }

    /// Fetch a snapshot of one idea.
    pub async fn get_idea(&self, id: u64) -> Result<Idea> {
        let entry = self.entry(id).await?;
        let guard = entry.lock().await;
        Ok(guard.idea.clone())
    }

    /// Snapshot of all ideas, ordered by id.
    pub async fn list_ideas(&self) -> Vec<Idea> {
        let entries: Vec<_> = self.ideas.read().await.values().cloned().collect();
        let mut ideas = Vec::with_capacity(entries.len());
        for entry in entries {
            ideas.push(entry.lock().await.idea.clone());
        }
        ideas
    }

    /// Move an idea to a new status and append the justifying evaluation.
    ///
    /// Nothing is changed or recorded unless every check passes.
    ///
    /// # Errors
    /// Checks run in order: role, idea lookup, version, edge, comment
    /// requirement, comment length.
    ///
    /// * `Forbidden` - If the actor cannot evaluate
    /// * `IdeaNotFound` - If no idea has this id
    /// * `VersionConflict` - If `expected_version` is stale
    /// * `InvalidTransition` - If the target is not reachable from the current status
    /// * `CommentRequired` - If the policy requires a comment and it is blank
    /// * `CommentTooLong` - If the comment exceeds the configured limit
    pub async fn update_status(
        &self,
        id: u64,
        actor: &Actor,
        request: TransitionRequest,
    ) -> Result<StatusUpdate> {
        self.require(actor, Capability::Evaluate)?;

        let entry = self.entry(id).await?;
        let mut guard = entry.lock().await;

        if let Some(expected) = request.expected_version {
            if expected != guard.idea.version {
                warn!(idea_id = id, expected, actual = guard.idea.version, "Stale status update refused");
                return Err(IdeaflowError::VersionConflict {
                    id,
                    expected,
                    actual: guard.idea.version,
                });
            }
        }

        let from = guard.idea.status;
        let next_idea =
            match apply_status_transition(&guard.idea, &request, self.config.comment_policy) {
                TransitionResult::Success { next_idea } => next_idea,
                TransitionResult::Error { violation } => {
                    warn!(idea_id = id, from = %from, to = %request.target, reason = %violation, "Status update refused");
                    return Err(violation.into());
                }
            };
        if let Some(comment) = request.comment.as_deref() {
            self.check_comment_length(comment)?;
        }

        let evaluation = self.new_evaluation(
            id,
            actor,
            request.comment.as_deref().unwrap_or_default(),
            Some(request.target),
        );
        guard.idea = next_idea;
        guard.evaluations.push(evaluation.clone());

        info!(idea_id = id, from = %from, to = %request.target, evaluator = %actor.id, "Idea status changed");
        Ok(StatusUpdate {
            idea: guard.idea.clone(),
            evaluation,
        })
    }

    /// Append a comment-only evaluation. The status is left untouched.
    ///
    /// # Errors
    /// * `Forbidden` - If the actor cannot evaluate
    /// * `Validation` - If the comment is blank
    /// * `CommentTooLong` - If the comment exceeds the configured limit
    /// * `IdeaNotFound` - If no idea has this id
    pub async fn add_comment(&self, id: u64, actor: &Actor, comment: &str) -> Result<Evaluation> {
        self.require(actor, Capability::Evaluate)?;
        if is_blank(Some(comment)) {
            return Err(IdeaflowError::Validation("Comment is required".to_string()));
        }
        self.check_comment_length(comment)?;

        let entry = self.entry(id).await?;
        let mut guard = entry.lock().await;

        let evaluation = self.new_evaluation(id, actor, comment, None);
        guard.evaluations.push(evaluation.clone());

        info!(idea_id = id, evaluator = %actor.id, "Comment added");
        Ok(evaluation)
    }

    /// Evaluation history of an idea, oldest first.
    pub async fn evaluation_history(&self, id: u64) -> Result<Vec<Evaluation>> {
        let entry = self.entry(id).await?;
        let guard = entry.lock().await;
        Ok(guard.evaluations.clone())
    }

    // ===== PRIVATE HELPERS =====

    async fn entry(&self, id: u64) -> Result<Arc<Mutex<IdeaEntry>>> {
        self.ideas
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(IdeaflowError::IdeaNotFound(id))
    }

    fn require(&self, actor: &Actor, capability: Capability) -> Result<()> {
        if capabilities(actor.role()).allows(capability) {
            return Ok(());
        }
        warn!(actor = %actor.id, role = ?actor.role, %capability, "Action refused for role");
        Err(IdeaflowError::Forbidden {
            role: actor.role.clone().unwrap_or_default(),
            capability,
        })
    }

    fn check_comment_length(&self, comment: &str) -> Result<()> {
        let length = comment.chars().count();
        let max = self.config.max_comment_length;
        if length > max {
            return Err(IdeaflowError::CommentTooLong { length, max });
        }
        Ok(())
    }

    fn validate_new_idea(&self, fields: NewIdea) -> Result<NewIdea> {
        let title = fields.title.trim().to_string();
        let description = fields.description.trim().to_string();
        let category = fields.category.trim().to_string();

        if title.is_empty() {
            return Err(IdeaflowError::Validation("Title is required".to_string()));
        }
        if title.chars().count() > self.config.max_title_length {
            return Err(IdeaflowError::Validation(format!(
                "Title cannot exceed {} characters",
                self.config.max_title_length
            )));
        }
        if description.is_empty() {
            return Err(IdeaflowError::Validation("Description is required".to_string()));
        }
        if category.is_empty() {
            return Err(IdeaflowError::Validation("Category is required".to_string()));
        }
        if category.chars().count() > self.config.max_category_length {
            return Err(IdeaflowError::Validation(format!(
                "Category cannot exceed {} characters",
                self.config.max_category_length
            )));
        }

        debug!(%title, %category, "New idea fields validated");
        Ok(NewIdea {
            title,
            description,
            category,
        })
    }

    fn new_evaluation(
        &self,
        idea_id: u64,
        actor: &Actor,
        comment: &str,
        status_snapshot: Option<IdeaStatus>,
    ) -> Evaluation {
        Evaluation {
            id: self.next_evaluation_id.fetch_add(1, Ordering::SeqCst),
            idea_id,
            actor: actor.id.clone(),
            actor_role: role_label(actor.role()),
            comment: comment.trim().to_string(),
            status_snapshot,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl Default for IdeaBoard {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
