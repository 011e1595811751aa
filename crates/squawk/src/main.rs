//! Squawk - Discord community bot with self-service roles and aviation weather.

use clap::Parser;
use squawk_error::{ConfigError, SquawkResult};
use squawk_social::{BotConfig, SquawkBot};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the bot.
#[derive(Parser, Debug)]
#[command(name = "squawk")]
#[command(about = "Squawk - Discord bot for roles, greetings and weather")]
#[command(version)]
struct Args {
    /// Path to bot configuration file
    #[arg(short, long, env = "SQUAWK_CONFIG", default_value = "squawk.toml")]
    config: PathBuf,

    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    discord_token: Option<String>,

    /// Channel receiving join greetings
    #[arg(long, env = "WELCOME_CHANNEL_ID")]
    welcome_channel_id: Option<u64>,

    /// Channel holding the rules message
    #[arg(long, env = "RULES_CHANNEL_ID")]
    rules_channel_id: Option<u64>,

    /// The rules message
    #[arg(long, env = "RULES_MESSAGE_ID")]
    rules_message_id: Option<u64>,

    /// Comma-separated role names that cannot be self-assigned
    #[arg(long, env = "RESTRICTED_ROLES", value_delimiter = ',')]
    restricted_roles: Vec<String>,

    /// Markdown file with the greeting body
    #[arg(long, env = "WELCOME_MESSAGE_PATH")]
    welcome_message_path: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Validate configuration and exit without connecting
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn bot_config(&self) -> SquawkResult<BotConfig> {
        Ok(BotConfig::load_or_default(&self.config)?
            .with_restricted_roles(&self.restricted_roles)
            .with_welcome_overrides(
                self.welcome_channel_id,
                self.rules_channel_id,
                self.rules_message_id,
                self.welcome_message_path.clone(),
            ))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting Squawk");
    info!(config_file = ?args.config, "Loading configuration");

    let config = args.bot_config()?;
    info!(
        prefix = %config.prefix(),
        restricted = config.roles().restricted().len(),
        welcome_channel = ?config.welcome().channel_id(),
        atis = config.weather().soap().is_some(),
        "Configuration loaded"
    );
    if config.welcome().channel_id().is_none() {
        warn!("WELCOME_CHANNEL_ID not set - join greetings disabled");
    }

    if args.dry_run {
        info!("DRY RUN MODE - configuration validated, not connecting");
        return Ok(());
    }

    let token = args.discord_token.clone().ok_or_else(|| {
        ConfigError::new("No Discord token provided. Set the DISCORD_TOKEN environment variable.")
    })?;

    let bot = SquawkBot::new(&token, config).await?;

    let shard_manager = bot.shard_manager();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl+C, shutting down");
                shard_manager.shutdown_all().await;
            }
            Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
        }
    });

    if let Err(e) = bot.start().await {
        error!(error = %e, "Bot stopped with an error");
        return Err(e.into());
    }

    info!("Squawk stopped");
    Ok(())
}
