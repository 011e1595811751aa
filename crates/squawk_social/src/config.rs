//! Bot configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use squawk_core::RolePolicy;
use squawk_error::{ConfigError, SquawkResult};
use squawk_weather::WeatherConfig;
use std::path::{Path, PathBuf};
use typed_builder::TypedBuilder;

/// Configuration for the bot, shared read-only by every handler.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct BotConfig {
    /// Command prefix
    #[serde(default = "default_prefix")]
    #[builder(default = default_prefix(), setter(into))]
    prefix: String,
    /// Greeting settings
    #[serde(default)]
    #[builder(default)]
    welcome: WelcomeConfig,
    /// Self-service role policy
    #[serde(default)]
    #[builder(default)]
    roles: RolePolicy,
    /// Ban command gate
    #[serde(default)]
    #[builder(default)]
    ban: BanConfig,
    /// Weather services
    #[serde(default)]
    #[builder(default)]
    weather: WeatherConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BotConfig {
    /// Load bot configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SquawkResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Ok(toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?)
    }

    /// Load `path` when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> SquawkResult<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::info!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Append restricted role names, trimming whitespace and skipping blanks.
    pub fn with_restricted_roles<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut restricted = self.roles.restricted().clone();
        restricted.extend(
            names
                .into_iter()
                .map(|name| name.as_ref().trim().to_string())
                .filter(|name| !name.is_empty()),
        );
        self.roles = self.roles.with_restricted(restricted);
        self
    }

    /// Override greeting settings that were supplied explicitly.
    pub fn with_welcome_overrides(
        mut self,
        channel_id: Option<u64>,
        rules_channel_id: Option<u64>,
        rules_message_id: Option<u64>,
        message_path: Option<PathBuf>,
    ) -> Self {
        if channel_id.is_some() {
            self.welcome.channel_id = channel_id;
        }
        if rules_channel_id.is_some() {
            self.welcome.rules_channel_id = rules_channel_id;
        }
        if rules_message_id.is_some() {
            self.welcome.rules_message_id = rules_message_id;
        }
        if let Some(path) = message_path {
            self.welcome.message_path = path;
        }
        self
    }
}

fn default_prefix() -> String {
    "!".to_string()
}

/// Greeting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WelcomeConfig {
    /// Channel receiving join greetings
    #[serde(default)]
    channel_id: Option<u64>,
    /// Channel holding the rules message
    #[serde(default)]
    rules_channel_id: Option<u64>,
    /// The rules message
    #[serde(default)]
    rules_message_id: Option<u64>,
    /// Markdown body of the greeting, read on every use
    #[serde(default = "default_message_path")]
    message_path: PathBuf,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            channel_id: None,
            rules_channel_id: None,
            rules_message_id: None,
            message_path: default_message_path(),
        }
    }
}

fn default_message_path() -> PathBuf {
    PathBuf::from("welcome_message.md")
}

/// Who may use the ban command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BanConfig {
    /// Role the invoker must hold
    #[serde(default = "default_required_role")]
    required_role: String,
    /// Whether the invoker must also have administrator permission
    #[serde(default = "default_require_administrator")]
    require_administrator: bool,
}

impl Default for BanConfig {
    fn default() -> Self {
        Self {
            required_role: default_required_role(),
            require_administrator: default_require_administrator(),
        }
    }
}

fn default_required_role() -> String {
    "Mod".to_string()
}

fn default_require_administrator() -> bool {
    true
}
