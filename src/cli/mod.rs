//! CLI module for ideaflow
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ideaflow - Evaluation workflow for idea submissions
#[derive(Parser, Debug)]
#[command(name = "ideaflow")]
#[command(version)]
#[command(about = "Evaluation workflow for idea submissions: statuses, transitions and reviewer roles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .ideaflow/config.json in the working directory
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// List the statuses an idea may move to next
    Transitions {
        /// Current status (SUBMITTED, UNDER_REVIEW, ACCEPTED, REJECTED)
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a status change would be accepted under the configured policy
    Check {
        /// Current status of the idea
        current: String,

        /// Requested status
        target: String,

        /// Evaluator comment accompanying the change
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Show suggested next actions for a status
    Suggest {
        /// Current status of the idea
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the capabilities and label resolved from a role string
    Role {
        /// Raw role text, e.g. "evaluator/admin"
        role: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a JSON script of submissions, status changes and comments
    Replay {
        /// Path to the script (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },
}
