//! Discord integration for squawk.
//!
//! This crate is the command-dispatch layer around `squawk_core`:
//! - [`BotConfig`] - configuration constructed once at start-up
//! - [`BotCommand`] - prefix command parsing
//! - `render` - user-facing replies for resolver and interpreter results
//! - [`SquawkBot`] / [`SquawkHandler`] - serenity client and event handler
//!
//! Parsing, rendering, the welcome text and the ban gate are plain functions
//! so they can be tested without a gateway connection.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ban;
mod commands;
mod config;
mod discord;
pub mod render;
mod welcome;

pub use ban::{BanDenied, BanGate, BanTarget};
pub use commands::{BotCommand, RolesCommand};
pub use config::{BanConfig, BotConfig, WelcomeConfig};
pub use discord::{SquawkBot, SquawkHandler, catalog_from_roles, discord_error};
pub use render::EmbedReply;
pub use welcome::{load_welcome_message, rules_link, welcome_embed};
