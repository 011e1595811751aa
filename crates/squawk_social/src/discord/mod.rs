//! Serenity client, event handler and platform conversions.

mod bot;
mod conversions;
mod handler;

pub use bot::SquawkBot;
pub use conversions::{catalog_from_roles, discord_error};
pub use handler::SquawkHandler;
