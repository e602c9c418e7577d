//! Idea schema - The proposal record that moves through evaluation

use serde::{Deserialize, Serialize};

/// Evaluation status of an idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdeaStatus {
    /// Initial state - idea submitted, not yet looked at
    Submitted,
    /// An evaluator has started reviewing
    UnderReview,
    /// Approved for implementation (terminal)
    Accepted,
    /// Declined (terminal)
    Rejected,
}

impl IdeaStatus {
    /// Wire/storage representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "SUBMITTED",
            IdeaStatus::UnderReview => "UNDER_REVIEW",
            IdeaStatus::Accepted => "ACCEPTED",
            IdeaStatus::Rejected => "REJECTED",
        }
    }

    /// Recognise the exact wire text only ("UNDER_REVIEW", not "under_review").
    pub fn from_wire(s: &str) -> Option<IdeaStatus> {
        match s {
            "SUBMITTED" => Some(IdeaStatus::Submitted),
            "UNDER_REVIEW" => Some(IdeaStatus::UnderReview),
            "ACCEPTED" => Some(IdeaStatus::Accepted),
            "REJECTED" => Some(IdeaStatus::Rejected),
            _ => None,
        }
    }

    /// Parse status text leniently, returning None for anything unknown.
    ///
    /// Accepts the wire form in any case, surrounding whitespace, and
    /// `-` or space in place of `_` ("under review", "Under-Review").
    pub fn parse(s: &str) -> Option<IdeaStatus> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        IdeaStatus::from_wire(&normalized)
    }
}

impl std::fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IdeaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdeaStatus::parse(s).ok_or_else(|| format!("Unknown idea status: {}", s))
    }
}

/// Fields supplied by a submitter when creating an idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl NewIdea {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        NewIdea {
            title: title.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// An idea proposal tracked by the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    /// Board-assigned identifier
    pub id: u64,

    /// Human-readable title
    pub title: String,

    /// Free-text description of the proposal
    pub description: String,

    /// Category used for grouping
    pub category: String,

    /// Current evaluation status
    pub status: IdeaStatus,

    /// Identity of the user who submitted the idea
    pub submitter: String,

    /// ISO 8601 creation timestamp
    pub created_at: String,

    /// ISO 8601 last update timestamp
    pub updated_at: String,

    /// Incremented on every status change
    #[serde(default)]
    pub version: u64,
}

impl Idea {
    /// Create a new idea in the Submitted state
    pub fn new(id: u64, fields: NewIdea, submitter: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Idea {
            id,
            title: fields.title,
            description: fields.description,
            category: fields.category,
            status: IdeaStatus::Submitted,
            submitter: submitter.into(),
            created_at: now.clone(),
            updated_at: now,
            version: 0,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Idea with the given status, bumping the version and timestamp
    pub fn with_status(mut self, status: IdeaStatus) -> Self {
        self.status = status;
        self.version += 1;
        self.touch_returning()
    }

    /// Update the updated_at timestamp to now and return self
    fn touch_returning(mut self) -> Self {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self
    }
}
