//! Request inputs and wire models for the Mastodon REST API
//!
//! A query bundles the target identifier with the server URL and token it
//! should be sent with, so each command builds one and hands it to the client.

use crate::config::Configuration;
use crate::types::HashtagPost;
use serde::{Deserialize, Serialize};

/// Input for `GET /api/v1/statuses/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusQuery {
    /// Status identifier
    pub id: String,
    /// Base URL of the target server
    pub api_url: String,
    /// Bearer token, empty when unauthenticated
    pub auth_token: String,
}

impl StatusQuery {
    /// Build a status query against the configured server
    pub fn new(config: &Configuration, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            api_url: config.api_url.clone(),
            auth_token: config.auth_token.clone(),
        }
    }

    /// Request path, relative to the server base URL
    pub fn path(&self) -> String {
        format!("/api/v1/statuses/{}", urlencoding::encode(self.id.trim()))
    }
}

/// Input for `GET /api/v1/accounts/search`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountsQuery {
    /// Username to search for, may be empty
    pub username: String,
    /// Base URL of the target server
    pub api_url: String,
    /// Bearer token, empty when unauthenticated
    pub auth_token: String,
    /// Upper bound on returned accounts, forwarded as `limit`
    pub results_count: u32,
}

impl AccountsQuery {
    /// Build an accounts search against the configured server
    pub fn new(config: &Configuration, username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_url: config.api_url.clone(),
            auth_token: config.auth_token.clone(),
            results_count: config.results_display_count,
        }
    }

    /// Request path, relative to the server base URL
    pub fn path(&self) -> String {
        format!(
            "/api/v1/accounts/search?q={}&limit={}",
            urlencoding::encode(self.username.trim()),
            self.results_count
        )
    }
}

/// Input for `GET /api/v1/timelines/tag/:hashtag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashtagQuery {
    /// Hashtag to look for, with or without the leading `#`
    pub hashtag: String,
    /// Base URL of the target server
    pub api_url: String,
    /// Bearer token, empty when unauthenticated
    pub auth_token: String,
    /// Upper bound on returned posts, forwarded as `limit`
    pub results_count: u32,
}

impl HashtagQuery {
    /// Build a hashtag timeline query against the configured server
    pub fn new(config: &Configuration, hashtag: impl Into<String>) -> Self {
        Self {
            hashtag: hashtag.into(),
            api_url: config.api_url.clone(),
            auth_token: config.auth_token.clone(),
            results_count: config.results_display_count,
        }
    }

    /// The tag name without surrounding whitespace or leading `#`
    pub fn tag(&self) -> &str {
        self.hashtag.trim().trim_start_matches('#')
    }

    /// Request path, relative to the server base URL
    pub fn path(&self) -> String {
        format!(
            "/api/v1/timelines/tag/{}?limit={}",
            urlencoding::encode(self.tag()),
            self.results_count
        )
    }
}

/// Error body returned by Mastodon on non-success responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human readable error message
    pub error: String,
}

/// Tag reference embedded in a status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
}

/// Media attachment reference embedded in a status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRef {
    #[serde(default)]
    pub url: Option<String>,
}

/// Author reference embedded in a timeline status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineAccount {
    pub username: String,
}

/// One entry of a hashtag timeline, as sent by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineStatus {
    pub account: TimelineAccount,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    #[serde(default)]
    pub media_attachments: Vec<MediaRef>,
}

impl TimelineStatus {
    /// Reduce the entry to a [`HashtagPost`] for the queried tag.
    ///
    /// The hashtag column prefers the status's own spelling of the tag and
    /// falls back to the queried one.
    pub fn into_hashtag_post(self, queried_tag: &str) -> HashtagPost {
        let hashtag = self
            .tags
            .into_iter()
            .find(|tag| tag.name.eq_ignore_ascii_case(queried_tag))
            .map(|tag| tag.name)
            .unwrap_or_else(|| queried_tag.to_string());

        let media_url = self
            .media_attachments
            .into_iter()
            .find_map(|media| media.url.filter(|url| !url.is_empty()));

        HashtagPost {
            hashtag,
            username: self.account.username,
            media_url,
        }
    }
}
