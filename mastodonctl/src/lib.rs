//! mastodonctl Library
//!
//! This library provides the core functionality for the mastodonctl tool.
//!
//! # Public API
//!
//! The primary public API is the [`client::MastodonClient`], which performs
//! the status, account search and hashtag timeline requests. Configuration
//! and request types live in the `mastodon-core` crate.
//!
//! ```no_run
//! use mastodon_core::config::{ConfigResolver, ProcessEnv};
//! use mastodon_core::HashtagQuery;
//! use mastodonctl::client::MastodonClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ConfigResolver::default().resolve(&ProcessEnv)?.config;
//! let client = MastodonClient::new()?;
//!
//! for post in client.fetch_hashtag_posts(&HashtagQuery::new(&config, "rust")).await? {
//!     println!("{} {}", post.username, post.media_url.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for communicating with a Mastodon server.
pub mod client;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

#[cfg(test)]
pub mod test_utils;
