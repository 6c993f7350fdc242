//! Output formatting utilities for the CLI
//!
//! Provides table and JSON formatting with colors.

use anyhow::Result;
use colored::*;
use mastodon_core::{
    Account, ConfigSource, Configuration, HashtagPost, Resolution, Status, STATUS_EXCERPT_CHARS,
};

use tabled::{settings::Style, Table, Tabled};

/// Shown before a request sent without a bearer token
pub const MSG_EXPECT_BAD_BEHAVIORS: &str = "Some Commands might not work properly";

/// Shown when no configuration file could be read
pub const MSG_NO_AUTH_TOKEN: &str = "Program is unable to fetch Auth Token!!";

/// Shown instead of an empty accounts table
pub const MSG_NO_ACCOUNTS: &str = "No results? Are you sure you have provided a valid API auth token (AUTH_TOKEN or conf.json)? Or have you NOT provided a username to search?";

/// Output format options
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Format a single status
pub fn format_status(status: &Status, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(status)?),
        OutputFormat::Table => {
            #[derive(Tabled)]
            struct StatusRow {
                #[tabled(rename = "User")]
                user: String,
                #[tabled(rename = "Content")]
                content: String,
                #[tabled(rename = "Favourited Count")]
                favourites: String,
            }

            let row = StatusRow {
                user: status.username().bright_blue().to_string(),
                content: status.content_excerpt(STATUS_EXCERPT_CHARS).to_string(),
                favourites: status.favourites_count.to_string().yellow().to_string(),
            };

            let table = Table::new([row]).with(Style::rounded()).to_string();
            Ok(format!("{}\n{}", "Status:".bold(), table))
        }
    }
}

/// Format an accounts search result.
///
/// The table format replaces an empty result with a hint; JSON always prints
/// the (possibly empty) array.
pub fn format_accounts(accounts: &[Account], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(accounts)?),
        OutputFormat::Table => {
            if accounts.is_empty() {
                return Ok(MSG_NO_ACCOUNTS.yellow().to_string());
            }

            #[derive(Tabled)]
            struct AccountRow {
                #[tabled(rename = "ID")]
                id: String,
                #[tabled(rename = "Username")]
                username: String,
                #[tabled(rename = "Display Name")]
                display_name: String,
                #[tabled(rename = "URL")]
                url: String,
                #[tabled(rename = "Followers")]
                followers: String,
                #[tabled(rename = "Following")]
                following: String,
            }

            let rows: Vec<AccountRow> = accounts
                .iter()
                .map(|account| AccountRow {
                    id: account.id.bright_blue().to_string(),
                    username: account.username.cyan().to_string(),
                    display_name: account.display_name.clone(),
                    url: account.url.clone(),
                    followers: account.followers_count.to_string(),
                    following: account.following_count.to_string(),
                })
                .collect();

            let table = Table::new(rows).with(Style::rounded()).to_string();
            Ok(format!("{}\n{}", "Accounts:".bold(), table))
        }
    }
}

/// Format the posts of a hashtag timeline
pub fn format_hashtag_posts(posts: &[HashtagPost], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(posts)?),
        OutputFormat::Table => {
            #[derive(Tabled)]
            struct PostRow {
                #[tabled(rename = "Hashtag")]
                hashtag: String,
                #[tabled(rename = "Username")]
                username: String,
                #[tabled(rename = "Media URL")]
                media_url: String,
            }

            let rows: Vec<PostRow> = posts
                .iter()
                .map(|post| PostRow {
                    hashtag: format!("#{}", post.hashtag).bright_blue().to_string(),
                    username: post.username.cyan().to_string(),
                    media_url: match &post.media_url {
                        Some(url) => url.clone(),
                        None => "-".dimmed().to_string(),
                    },
                })
                .collect();

            let table = Table::new(rows).with(Style::rounded()).to_string();
            Ok(format!("{}\n{}", "Hashtag Posts:".bold(), table))
        }
    }
}

/// Format the resolved configuration, with the token masked
pub fn format_config(resolution: &Resolution, format: &OutputFormat) -> Result<String> {
    let config = &resolution.config;
    let source = describe_source(&resolution.source);

    match format {
        OutputFormat::Json => {
            let masked = Configuration {
                auth_token: config.masked_token(),
                ..config.clone()
            };
            let value = serde_json::json!({
                "config": masked,
                "source": source,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Table => {
            let token = if config.has_auth_token() {
                config.masked_token().green().to_string()
            } else {
                "(none)".red().to_string()
            };

            let mut output = String::new();
            output.push_str(&"mastodonctl Configuration".bold().to_string());
            output.push('\n');
            output.push_str(&format!("{:<24}{}", "API URL", config.api_url.cyan()));
            output.push('\n');
            output.push_str(&format!(
                "{:<24}{}",
                "Results Display Count",
                config.results_display_count.to_string().yellow()
            ));
            output.push('\n');
            output.push_str(&format!("{:<24}{}", "Auth Token", token));
            output.push('\n');
            output.push_str(&format!("{:<24}{}", "Source", source));
            Ok(output)
        }
    }
}

fn describe_source(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Environment => "environment".to_string(),
        ConfigSource::File(path) => format!("file {}", path.display()),
        ConfigSource::Defaults { .. } => "defaults".to_string(),
    }
}

/// Format a degraded-mode warning
pub fn format_warning(message: &str) -> String {
    format!("{} {}", "!".yellow().bold(), message.yellow())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastodon_core::AccountRef;
    use std::path::PathBuf;

    fn plain() {
        colored::control::set_override(false);
    }

    fn sample_status(content: &str) -> Status {
        Status {
            id: "42".to_string(),
            account: AccountRef {
                username: "alice".to_string(),
            },
            content: content.to_string(),
            favourites_count: 9,
        }
    }

    fn sample_account(username: &str) -> Account {
        Account {
            id: "7".to_string(),
            username: username.to_string(),
            display_name: "Display".to_string(),
            url: format!("https://mastodon.social/@{}", username),
            followers_count: 11,
            following_count: 22,
        }
    }

    #[test]
    fn test_format_status_table_truncates_content() {
        plain();
        let long = format!("{}{}", "x".repeat(64), "TAIL");
        let output = format_status(&sample_status(&long), &OutputFormat::Table).unwrap();

        assert!(output.contains("alice"));
        assert!(output.contains(&"x".repeat(64)));
        assert!(!output.contains("TAIL"));
        assert!(output.contains('9'));
    }

    #[test]
    fn test_format_status_table_short_content() {
        plain();
        let output = format_status(&sample_status("hey"), &OutputFormat::Table).unwrap();
        assert!(output.contains("hey"));
    }

    #[test]
    fn test_format_status_json() {
        let output = format_status(&sample_status("hello"), &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["account"]["username"], "alice");
        assert_eq!(value["favourites_count"], 9);
    }

    #[test]
    fn test_format_accounts_table() {
        plain();
        let accounts = vec![sample_account("bob"), sample_account("carol")];
        let output = format_accounts(&accounts, &OutputFormat::Table).unwrap();

        assert!(output.contains("bob"));
        assert!(output.contains("carol"));
        assert!(output.contains("https://mastodon.social/@carol"));
        assert!(output.contains("Followers"));
    }

    #[test]
    fn test_format_accounts_empty_shows_hint() {
        plain();
        let output = format_accounts(&[], &OutputFormat::Table).unwrap();
        assert_eq!(output, MSG_NO_ACCOUNTS);

        let output = format_accounts(&[], &OutputFormat::Json).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_format_hashtag_posts_table() {
        plain();
        let posts = vec![
            HashtagPost {
                hashtag: "rust".to_string(),
                username: "ferris".to_string(),
                media_url: Some("https://files.example/crab.png".to_string()),
            },
            HashtagPost {
                hashtag: "rust".to_string(),
                username: "learner".to_string(),
                media_url: None,
            },
        ];
        let output = format_hashtag_posts(&posts, &OutputFormat::Table).unwrap();

        assert!(output.contains("#rust"));
        assert!(output.contains("ferris"));
        assert!(output.contains("https://files.example/crab.png"));
        assert!(output.contains("learner"));
    }

    #[test]
    fn test_format_config_masks_token() {
        plain();
        let resolution = Resolution {
            config: Configuration {
                results_display_count: 10,
                api_url: "https://mastodon.social".to_string(),
                auth_token: "supersecret".to_string(),
            },
            source: ConfigSource::File(PathBuf::from("conf.json")),
        };

        let table = format_config(&resolution, &OutputFormat::Table).unwrap();
        assert!(table.contains("supe****"));
        assert!(!table.contains("supersecret"));
        assert!(table.contains("file conf.json"));

        let json = format_config(&resolution, &OutputFormat::Json).unwrap();
        assert!(json.contains("supe****"));
        assert!(!json.contains("supersecret"));
    }

    #[test]
    fn test_format_warning() {
        plain();
        let message = format_warning(MSG_EXPECT_BAD_BEHAVIORS);
        assert!(message.contains("Some Commands might not work properly"));
    }
}
