//! chirp-engine: Bounded in-memory timeline store
//!
//! This crate provides the core of chirp, including:
//! - The post model and text bounding
//! - The capacity-bounded timeline with selection
//! - Configuration loading and validation

pub mod config;
pub mod post;
pub mod timeline;

// Re-export commonly used types
pub use config::{Config, ConfigError, MAX_CAPACITY};
pub use post::{bound_text, Post, PostId};
pub use timeline::{DisplayRow, Timeline, TimelineError};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
