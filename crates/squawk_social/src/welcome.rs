//! The greeting sent to new members.

use crate::render::{EmbedReply, WELCOME_COLOUR};
use crate::WelcomeConfig;
use squawk_error::{DiscordError, DiscordErrorKind, DiscordResult};
use std::path::Path;

/// Link to the configured rules message, if both ids are set.
pub fn rules_link(guild_id: u64, welcome: &WelcomeConfig) -> Option<String> {
    let channel = (*welcome.rules_channel_id())?;
    let message = (*welcome.rules_message_id())?;
    Some(format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id, channel, message
    ))
}

/// Read the greeting body. The file is read on every call so edits apply
/// without a restart.
pub async fn load_welcome_message(path: &Path) -> DiscordResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        DiscordError::new(DiscordErrorKind::Configuration(format!(
            "Failed to read welcome message {}: {}",
            path.display(),
            e
        )))
    })
}

/// Greeting embed for `mention`.
pub fn welcome_embed(mention: &str, body: &str, rules_link: Option<&str>) -> EmbedReply {
    let mut description = format!("Hey {}!\n\n{}", mention, body.trim_end());
    if let Some(link) = rules_link {
        description.push_str(&format!(
            "\n\nMake sure to read our rules before you dive in: {}",
            link
        ));
    }
    EmbedReply::new("", description, WELCOME_COLOUR)
}
