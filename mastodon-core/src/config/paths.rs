//! Default path resolution for the configuration file
//!
//! Uses the platform configuration directory when available.

use std::path::PathBuf;

/// Returns the per-user location of the configuration file.
///
/// - Linux: `~/.config/mastodonctl/<file_name>`
/// - macOS: `~/Library/Application Support/mastodonctl/<file_name>`
///
/// Returns `None` when the platform exposes no configuration directory.
pub fn user_config_path(file_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mastodonctl").join(file_name))
}
