//! Schema types for ideaflow
//!
//! Status values serialize to the upper snake case text used on the wire
//! (`"UNDER_REVIEW"`), so records stay compatible with the portal API.

mod config;
mod evaluation;
mod idea;

pub use config::Config;
pub use evaluation::Evaluation;
pub use idea::{Idea, IdeaStatus, NewIdea};
