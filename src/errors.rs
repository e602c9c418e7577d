//! Error types for ideaflow
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::domain::Capability;
use crate::schemas::IdeaStatus;

/// Result type alias for ideaflow operations
pub type Result<T> = std::result::Result<T, IdeaflowError>;

/// Main error type for all ideaflow operations
#[derive(Debug, Error)]
pub enum IdeaflowError {
    /// Target status is not reachable from the current status
    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: IdeaStatus, to: IdeaStatus },

    /// The policy demands a comment for this target status
    #[error("Comment required when moving an idea to {status}")]
    CommentRequired { status: IdeaStatus },

    /// Comment exceeds the configured length limit
    #[error("Comment cannot exceed {max} characters (got {length})")]
    CommentTooLong { length: usize, max: usize },

    /// The actor's role lacks the capability needed for the action
    #[error("Role '{role}' is not allowed to {capability}")]
    Forbidden { role: String, capability: Capability },

    /// Caller's view of the idea is stale
    #[error("Idea {id} was modified by another user (expected version {expected}, found {actual})")]
    VersionConflict { id: u64, expected: u64, actual: u64 },

    /// No idea with the given id
    #[error("Idea not found: {0}")]
    IdeaNotFound(u64),

    /// Field validation failed on a new idea or request
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unparseable status text at a boundary (CLI, replay script)
    #[error("Unknown idea status: {0}")]
    UnknownStatus(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl IdeaflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            IdeaflowError::InvalidTransition { .. } => "INVALID_TRANSITION",
            IdeaflowError::CommentRequired { .. } => "COMMENT_REQUIRED",
            IdeaflowError::CommentTooLong { .. } => "COMMENT_TOO_LONG",
            IdeaflowError::Forbidden { .. } => "FORBIDDEN",
            IdeaflowError::VersionConflict { .. } => "VERSION_CONFLICT",
            IdeaflowError::IdeaNotFound(_) => "IDEA_NOT_FOUND",
            IdeaflowError::Validation(_) => "VALIDATION",
            IdeaflowError::UnknownStatus(_) => "UNKNOWN_STATUS",
            IdeaflowError::InvalidJson(_) => "INVALID_JSON",
            IdeaflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            IdeaflowError::ConfigError(_) => "CONFIG_ERROR",
            IdeaflowError::Io(_) => "IO_ERROR",
            IdeaflowError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Whether this error is a workflow rejection the caller may re-prompt on,
    /// as opposed to an environment or input failure
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            IdeaflowError::InvalidTransition { .. }
                | IdeaflowError::CommentRequired { .. }
                | IdeaflowError::CommentTooLong { .. }
                | IdeaflowError::Forbidden { .. }
                | IdeaflowError::VersionConflict { .. }
        )
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        IdeaflowError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &IdeaflowError) -> i32 {
    if error.is_rejection() {
        // Distinguishes "request refused" from "tool failed" for scripts
        return 2;
    }
    1
}
