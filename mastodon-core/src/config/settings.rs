//! Resolved configuration and its on-disk representation

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Built-in fallback values used by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDefaults {
    /// Results requested from list endpoints when nothing else is set
    pub results_display_count: u32,
    /// Server queried when nothing else is set
    pub api_url: &'static str,
    /// File name looked up in each search directory
    pub config_file_name: &'static str,
}

/// Defaults shipped with mastodonctl
pub const DEFAULTS: ConfigDefaults = ConfigDefaults {
    results_display_count: 10,
    api_url: "https://mastodon.social",
    config_file_name: "conf.json",
};

/// Resolved mastodonctl configuration.
///
/// Serialized with the same field names as the JSON configuration file, so a
/// written configuration resolves back to an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Configuration {
    /// Number of results requested from list endpoints
    pub results_display_count: u32,
    /// Base URL of the Mastodon server
    pub api_url: String,
    /// Bearer token, empty when running unauthenticated
    pub auth_token: String,
}

impl Configuration {
    /// Configuration made only of built-in defaults
    pub fn from_defaults(defaults: &ConfigDefaults) -> Self {
        Self {
            results_display_count: defaults.results_display_count,
            api_url: defaults.api_url.to_string(),
            auth_token: String::new(),
        }
    }

    /// Whether a bearer token is configured
    pub fn has_auth_token(&self) -> bool {
        !self.auth_token.is_empty()
    }

    /// The token with everything but its first four characters hidden.
    ///
    /// Tokens of four characters or fewer are hidden entirely.
    pub fn masked_token(&self) -> String {
        match self.auth_token.chars().count() {
            0 => String::new(),
            1..=4 => "****".to_string(),
            _ => {
                let visible: String = self.auth_token.chars().take(4).collect();
                format!("{}****", visible)
            }
        }
    }

    /// Replace unset values with defaults
    pub(crate) fn fill_defaults(mut self, defaults: &ConfigDefaults) -> Self {
        if self.results_display_count == 0 {
            self.results_display_count = defaults.results_display_count;
        }
        if self.api_url.is_empty() {
            self.api_url = defaults.api_url.to_string();
        }
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::from_defaults(&DEFAULTS)
    }
}

/// Contents of the JSON configuration file.
///
/// Every field is optional; only fields present in the file overwrite the
/// values resolved so far. Unknown fields are ignored. Keys match
/// case-insensitively (`AuthToken`, `authToken` and `authtoken` all set the
/// token); an exact match wins over a case-insensitive one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_display_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl<'de> Deserialize<'de> for ConfigFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;

        Ok(Self {
            results_display_count: file_field(&fields, "ResultsDisplayCount")
                .map_err(D::Error::custom)?,
            api_url: file_field(&fields, "ApiUrl").map_err(D::Error::custom)?,
            auth_token: file_field(&fields, "AuthToken").map_err(D::Error::custom)?,
        })
    }
}

/// Decode the field `name`, matching keys case-insensitively. `null` counts as
/// absent.
fn file_field<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    name: &str,
) -> Result<Option<T>, String> {
    let value = fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    });

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| format!("{}: {}", name, e)),
    }
}

impl ConfigFile {
    /// Overwrite `config` with every field present in the file
    pub fn apply_to(self, config: &mut Configuration) {
        if let Some(count) = self.results_display_count {
            config.results_display_count = count;
        }
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
        if let Some(auth_token) = self.auth_token {
            config.auth_token = auth_token;
        }
    }
}
