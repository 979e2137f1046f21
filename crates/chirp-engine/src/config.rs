//! Configuration types for chirp.
//!
//! This module defines the configuration schema for a timeline: its
//! capacity, text limit, first id, and the posts it is seeded with.

use serde::Deserialize;
use std::path::Path;

use crate::post::PostId;

/// Main configuration for a chirp timeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Maximum number of posts the timeline holds.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Maximum post length in characters.
    #[serde(default = "default_max_text_len")]
    pub max_text_len: usize,

    /// Id given to the first post of an empty timeline.
    #[serde(default = "default_first_id")]
    pub first_id: PostId,

    /// Posts added at startup, in order.
    #[serde(default = "default_seed_posts")]
    pub seed_posts: Vec<String>,
}

/// Largest capacity a config may ask for.
pub const MAX_CAPACITY: usize = 10_000;

fn default_capacity() -> usize {
    10
}

fn default_max_text_len() -> usize {
    99
}

fn default_first_id() -> PostId {
    100
}

fn default_seed_posts() -> Vec<String> {
    vec![
        "Where do they get the seeds to plant seedless watermelons?".into(),
        "Waffles are just pancakes with convenient boxes to hold your syrup.".into(),
        "Last night I even struck up a conversation with a spider. Turns out he's a web designer."
            .into(),
    ]
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the limits describe a usable timeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be at least 1".into()));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "capacity must be at most {MAX_CAPACITY}"
            )));
        }
        if self.max_text_len == 0 {
            return Err(ConfigError::Invalid(
                "max_text_len must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_text_len: default_max_text_len(),
            first_id: default_first_id(),
            seed_posts: default_seed_posts(),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Config parsed but describes an unusable timeline.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
