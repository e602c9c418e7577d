//! Evaluation service
//!
//! The board consumes the workflow rules: it authorizes actors by role,
//! validates each request against the current status, and appends the
//! evaluation history.

mod service;

#[cfg(test)]
mod tests;

pub use service::{Actor, IdeaBoard, StatusUpdate};
