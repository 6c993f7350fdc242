//! mastodonctl
//!
//! Command-line client for a Mastodon social media user.

use anyhow::Result;
use clap::Parser;
use mastodon_core::config::{ConfigResolver, ProcessEnv};
use mastodonctl::cli::{
    auth_notices, generate_completion, handle_accounts, handle_config, handle_hashtag,
    handle_status, Cli, Commands,
};
use mastodonctl::client::MastodonClient;
use mastodonctl::format::format_warning;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Commands::Completion { shell } = cli.command {
        generate_completion(shell);
        return Ok(());
    }

    // Resolve configuration: environment → config file → defaults
    let resolution = match ConfigResolver::default().resolve(&ProcessEnv) {
        Ok(resolution) => resolution,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    for notice in auth_notices(&resolution, &cli.command) {
        eprintln!("{}", format_warning(notice));
    }

    debug!(
        "Resolved configuration from {:?}: api_url={}, results_display_count={}",
        resolution.source, resolution.config.api_url, resolution.config.results_display_count
    );

    let client = match MastodonClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = &resolution.config;
    let format = &cli.format;

    let result = match cli.command {
        Commands::Status { id } => handle_status(&client, config, id, format).await,
        Commands::Accounts { username } => {
            handle_accounts(&client, config, username, format).await
        }
        Commands::Hashtag { hashtag } => handle_hashtag(&client, config, hashtag, format).await,
        Commands::Config => handle_config(&resolution, format),
        Commands::Completion { .. } => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if cli.verbose {
            eprintln!("Error details: {:?}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing subscriber for logging.
///
/// Logs go to stderr so table and JSON output stay clean on stdout.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
