//! Ideaflow - Evaluation workflow for idea submissions
//!
//! This library provides:
//! - Schema definitions for ideas, evaluations, and configuration
//! - Domain logic for roles, statuses, transitions, and comment policy
//! - An in-memory, concurrency-safe idea board that applies status changes
//! - File system utilities for the `.ideaflow` config directory
//! - The `ideaflow` command-line interface

pub mod board;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use board::{Actor, IdeaBoard, StatusUpdate};
pub use errors::{IdeaflowError, Result};
pub use schemas::{Config, Evaluation, Idea, IdeaStatus, NewIdea};
