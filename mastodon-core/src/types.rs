//! Core records decoded from Mastodon API responses
//!
//! Each record keeps only the fields the CLI displays; everything else in the
//! upstream payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Number of characters of a status body shown in tables
pub const STATUS_EXCERPT_CHARS: usize = 64;

/// Author reference embedded in statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    /// Local username of the author
    pub username: String,
}

/// A single post, as returned by `GET /api/v1/statuses/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Opaque status identifier
    pub id: String,
    /// Author of the status
    pub account: AccountRef,
    /// HTML body of the status
    #[serde(default)]
    pub content: String,
    /// Number of times the status was favourited
    #[serde(default)]
    pub favourites_count: u64,
}

impl Status {
    /// Username of the status author
    pub fn username(&self) -> &str {
        &self.account.username
    }

    /// The first `max_chars` characters of the content.
    ///
    /// Works on characters rather than bytes, so multi-byte content never
    /// splits a code point and shorter content is returned whole.
    pub fn content_excerpt(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// A user profile, as returned by `GET /api/v1/accounts/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque account identifier
    pub id: String,
    /// Local username
    pub username: String,
    /// Display name chosen by the user
    #[serde(default)]
    pub display_name: String,
    /// Profile page URL
    #[serde(default)]
    pub url: String,
    /// Number of followers
    #[serde(default)]
    pub followers_count: u64,
    /// Number of followed accounts
    #[serde(default)]
    pub following_count: u64,
}

/// A hashtag timeline entry reduced to what the hashtag table shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagPost {
    /// Tag the post was found under
    pub hashtag: String,
    /// Username of the post author
    pub username: String,
    /// URL of the first media attachment, if the post has one
    pub media_url: Option<String>,
}
