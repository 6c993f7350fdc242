//! Command execution handlers

use anyhow::Result;
use mastodon_core::{AccountsQuery, Configuration, HashtagQuery, Resolution, StatusQuery};

use crate::client::MastodonClient;
use crate::format::{
    format_accounts, format_config, format_hashtag_posts, format_status,
    MSG_EXPECT_BAD_BEHAVIORS, MSG_NO_AUTH_TOKEN,
};

use super::commands::*;

/// Error printed when `status` is called without an ID
pub const MSG_MISSING_STATUS_ID: &str = "Error: must provide a status ID!";

/// Error printed when `hashtag` is called without a value
pub const MSG_MISSING_HASHTAG: &str = "Error: must provide a hashtag value to look for!";

/// Return the argument if it holds something other than whitespace.
pub fn required_argument(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Degraded-mode notices to show before running `command`.
///
/// Without a configuration file both lines are shown for every command. A
/// file without a token only warns for commands that send a request.
pub fn auth_notices(resolution: &Resolution, command: &Commands) -> Vec<&'static str> {
    if resolution.is_degraded() {
        return vec![MSG_NO_AUTH_TOKEN, MSG_EXPECT_BAD_BEHAVIORS];
    }

    let sends_request = matches!(
        command,
        Commands::Status { .. } | Commands::Accounts { .. } | Commands::Hashtag { .. }
    );
    if sends_request && !resolution.config.has_auth_token() {
        vec![MSG_EXPECT_BAD_BEHAVIORS]
    } else {
        Vec::new()
    }
}

/// Handle status command
pub async fn handle_status(
    client: &MastodonClient,
    config: &Configuration,
    id: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    let Some(id) = required_argument(id.as_deref()) else {
        println!("{}", MSG_MISSING_STATUS_ID);
        return Ok(());
    };

    let status = client.fetch_status(&StatusQuery::new(config, id)).await?;
    println!("{}", format_status(&status, &format.into())?);

    Ok(())
}

/// Handle accounts command
pub async fn handle_accounts(
    client: &MastodonClient,
    config: &Configuration,
    username: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    let query = AccountsQuery::new(config, username.unwrap_or_default());
    let accounts = client.fetch_accounts(&query).await?;
    println!("{}", format_accounts(&accounts, &format.into())?);

    Ok(())
}

/// Handle hashtag command
pub async fn handle_hashtag(
    client: &MastodonClient,
    config: &Configuration,
    hashtag: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    let Some(hashtag) =
        required_argument(hashtag.as_deref()).filter(|tag| !tag.trim_start_matches('#').is_empty())
    else {
        println!("{}", MSG_MISSING_HASHTAG);
        return Ok(());
    };

    let posts = client
        .fetch_hashtag_posts(&HashtagQuery::new(config, hashtag))
        .await?;
    println!("{}", format_hashtag_posts(&posts, &format.into())?);

    Ok(())
}

/// Handle config command
pub fn handle_config(resolution: &Resolution, format: &OutputFormat) -> Result<()> {
    println!("{}", format_config(resolution, &format.into())?);
    Ok(())
}

/// Generate shell completion script
pub fn generate_completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
