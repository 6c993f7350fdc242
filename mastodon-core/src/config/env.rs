//! Access to environment variables
//!
//! The resolver reads variables through [`EnvSource`] so tests can supply a
//! plain map instead of mutating the process environment.

use std::collections::HashMap;

/// Number of results requested from list endpoints
pub const ENV_RESULT_DISPLAY_COUNT: &str = "RESULT_DISPLAY_COUNT";
/// Base URL of the Mastodon server
pub const ENV_API_URL: &str = "API_URL";
/// Bearer token sent with every request
pub const ENV_AUTH_TOKEN: &str = "AUTH_TOKEN";
/// Explicit location of the JSON configuration file
pub const ENV_CONFIG_FILEPATH: &str = "MASTODONCTL_CONFIG_FILEPATH";

/// A source of environment variables
pub trait EnvSource {
    /// Raw value of `key`, or `None` when unset
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating empty strings as unset
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.to_string())
    }
}
