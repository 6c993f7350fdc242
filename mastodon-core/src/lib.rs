//! mastodonctl Core Library
//!
//! Shared types, request models, and configuration resolution for the
//! mastodonctl command-line client.

pub mod api;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use api::{AccountsQuery, HashtagQuery, StatusQuery};
pub use config::{ConfigResolver, ConfigSource, Configuration, Resolution};
pub use error::*;
pub use types::*;
