//! Layered configuration resolution
//!
//! Order of precedence:
//! 1. Environment variables. A non-empty `AUTH_TOKEN` ends resolution here and
//!    the configuration file is never opened, even if it would set `ApiUrl` or
//!    `ResultsDisplayCount`.
//! 2. The JSON configuration file, overwriting the fields it contains.
//! 3. Built-in defaults for anything still unset.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::env::{
    EnvSource, ENV_API_URL, ENV_AUTH_TOKEN, ENV_CONFIG_FILEPATH, ENV_RESULT_DISPLAY_COUNT,
};
use super::paths::user_config_path;
use super::settings::{ConfigDefaults, ConfigFile, Configuration, DEFAULTS};
use crate::error::{MastodonError, Result};

/// Where the resolved token came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `AUTH_TOKEN` was set; the file was skipped
    Environment,
    /// The configuration file at this path was read
    File(PathBuf),
    /// No configuration file could be read; running in degraded mode
    Defaults {
        /// Locations that were tried, in order
        searched: Vec<PathBuf>,
    },
}

/// Outcome of a resolution: the configuration and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: Configuration,
    pub source: ConfigSource,
}

impl Resolution {
    /// Whether no configuration file was found and no token came from the
    /// environment.
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, ConfigSource::Defaults { .. })
    }
}

/// Resolves a [`Configuration`] from environment, file and defaults
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    defaults: ConfigDefaults,
    search_paths: Vec<PathBuf>,
}

impl Default for ConfigResolver {
    /// Resolver with the shipped defaults, looking for `conf.json` in the
    /// working directory first, then in the user configuration directory.
    fn default() -> Self {
        let mut resolver = Self::new(DEFAULTS);
        if let Some(path) = user_config_path(DEFAULTS.config_file_name) {
            resolver = resolver.with_search_path(path);
        }
        resolver
    }
}

impl ConfigResolver {
    /// Resolver that only looks for the default file name in the working
    /// directory.
    pub fn new(defaults: ConfigDefaults) -> Self {
        Self {
            defaults,
            search_paths: vec![PathBuf::from(defaults.config_file_name)],
        }
    }

    /// Add a fallback location, tried after the existing ones
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Replace the file locations searched when `MASTODONCTL_CONFIG_FILEPATH`
    /// is not set.
    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.search_paths = paths;
        self
    }

    /// Resolve the configuration.
    ///
    /// # Errors
    ///
    /// Only fails when a configuration file is found but cannot be decoded.
    /// A missing or unreadable file degrades to defaults.
    pub fn resolve(&self, env: &impl EnvSource) -> Result<Resolution> {
        let mut config = Configuration::from_defaults(&self.defaults);

        if let Some(count) = env.non_empty(ENV_RESULT_DISPLAY_COUNT) {
            match count.trim().parse::<u32>() {
                Ok(count) => config.results_display_count = count,
                Err(e) => debug!(
                    "Ignoring {}={:?}: {}",
                    ENV_RESULT_DISPLAY_COUNT, count, e
                ),
            }
        }

        if let Some(api_url) = env.non_empty(ENV_API_URL) {
            config.api_url = api_url;
        }

        if let Some(auth_token) = env.non_empty(ENV_AUTH_TOKEN) {
            debug!("Auth token found in environment, skipping configuration file");
            config.auth_token = auth_token;
            return Ok(self.finish(config, ConfigSource::Environment));
        }

        let candidates = match env.non_empty(ENV_CONFIG_FILEPATH) {
            Some(path) => vec![PathBuf::from(path)],
            None => self.search_paths.clone(),
        };

        for path in &candidates {
            match std::fs::read_to_string(path) {
                Ok(content) => {
                    debug!("Loading configuration from {}", path.display());
                    let file = parse_config_file(path, &content)?;
                    file.apply_to(&mut config);
                    return Ok(self.finish(config, ConfigSource::File(path.clone())));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("No configuration file at {}", path.display());
                }
                Err(e) => {
                    warn!("Cannot read configuration file {}: {}", path.display(), e);
                }
            }
        }

        Ok(self.finish(
            config,
            ConfigSource::Defaults {
                searched: candidates,
            },
        ))
    }

    fn finish(&self, config: Configuration, source: ConfigSource) -> Resolution {
        Resolution {
            config: config.fill_defaults(&self.defaults),
            source,
        }
    }
}

fn parse_config_file(path: &Path, content: &str) -> Result<ConfigFile> {
    serde_json::from_str(content).map_err(|e| MastodonError::ConfigMalformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
