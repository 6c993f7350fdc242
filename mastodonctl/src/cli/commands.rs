//! CLI command definitions

use clap::{Parser, Subcommand};

/// mastodonctl
#[derive(Parser, Debug)]
#[command(name = "mastodonctl")]
#[command(
    version,
    about = "commandline client for a Mastodon social media user",
    long_about = "commandline client for a Mastodon social media user\n\n\
        Configuration is read from the AUTH_TOKEN, API_URL and RESULT_DISPLAY_COUNT \
        environment variables. Without AUTH_TOKEN, it is read from conf.json \
        (or the file named by MASTODONCTL_CONFIG_FILEPATH)."
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

impl From<&OutputFormat> for crate::format::OutputFormat {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Table => crate::format::OutputFormat::Table,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve status info by ID
    Status {
        /// Status ID
        id: Option<String>,
    },

    /// Retrieve Mastodon accounts infos by username
    Accounts {
        /// Username to search for
        username: Option<String>,
    },

    /// Get the latest posts about a specific hashtag
    Hashtag {
        /// Hashtag to look for, with or without the leading '#'
        hashtag: Option<String>,
    },

    /// Show the resolved configuration
    Config,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
