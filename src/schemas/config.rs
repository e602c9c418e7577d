//! Config schema - Configuration for ideaflow

use serde::{Deserialize, Serialize};

use crate::domain::CommentPolicy;

/// Main configuration for ideaflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Which target statuses demand an evaluator comment
    #[serde(default)]
    pub comment_policy: CommentPolicy,

    /// Maximum length of an evaluation comment, in characters
    #[serde(default = "default_max_comment_length")]
    pub max_comment_length: usize,

    /// Maximum length of an idea title, in characters
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,

    /// Maximum length of an idea category, in characters
    #[serde(default = "default_max_category_length")]
    pub max_category_length: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_comment_length() -> usize {
    5000
}

fn default_max_title_length() -> usize {
    255
}

fn default_max_category_length() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            comment_policy: CommentPolicy::default(),
            max_comment_length: default_max_comment_length(),
            max_title_length: default_max_title_length(),
            max_category_length: default_max_category_length(),
        }
    }
}
