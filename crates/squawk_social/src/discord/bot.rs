//! Serenity client wiring.

use super::{SquawkHandler, discord_error};
use crate::BotConfig;
use serenity::all::{Client, GatewayIntents, ShardManager};
use squawk_error::SquawkResult;
use squawk_weather::WeatherService;
use std::sync::Arc;
use tracing::{info, instrument};

/// The connected bot.
pub struct SquawkBot {
    client: Client,
}

impl SquawkBot {
    /// Gateway intents the bot needs: guild roles, member joins and message
    /// content for prefix commands.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Build the client. Weather backends are constructed here so a bad
    /// weather configuration fails start-up rather than the first command.
    #[instrument(skip_all, fields(prefix = %config.prefix()))]
    pub async fn new(token: &str, config: BotConfig) -> SquawkResult<Self> {
        let weather = Arc::new(WeatherService::from_config(config.weather())?);
        let handler = SquawkHandler::new(Arc::new(config), weather);

        let client = Client::builder(token, Self::intents())
            .event_handler(handler)
            .await
            .map_err(discord_error)?;

        info!("Discord client created");
        Ok(Self { client })
    }

    /// Handle for shutting the gateway down from another task.
    pub fn shard_manager(&self) -> Arc<ShardManager> {
        self.client.shard_manager.clone()
    }

    /// Connect and process events until the gateway closes.
    pub async fn start(mut self) -> SquawkResult<()> {
        info!("Connecting to Discord gateway");
        self.client.start().await.map_err(discord_error)?;
        Ok(())
    }
}
