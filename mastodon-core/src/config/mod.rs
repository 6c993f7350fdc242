//! Configuration types for mastodonctl
//!
//! # Architecture
//!
//! Configuration is resolved once at startup from three layers:
//! - environment variables ([`EnvSource`], [`ProcessEnv`])
//! - an optional JSON file ([`ConfigFile`])
//! - built-in defaults ([`ConfigDefaults`])
//!
//! [`ConfigResolver`] walks those layers and returns an immutable
//! [`Configuration`] together with the [`ConfigSource`] it came from.

mod env;
mod paths;
mod resolver;
mod settings;

pub use env::{
    EnvSource, ProcessEnv, ENV_API_URL, ENV_AUTH_TOKEN, ENV_CONFIG_FILEPATH,
    ENV_RESULT_DISPLAY_COUNT,
};
pub use paths::user_config_path;
pub use resolver::{ConfigResolver, ConfigSource, Resolution};
pub use settings::{ConfigDefaults, ConfigFile, Configuration, DEFAULTS};
