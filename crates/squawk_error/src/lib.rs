//! Error types for squawk.
//!
//! Every error records where it was raised. Crate-specific errors convert into
//! [`SquawkError`] with `?`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod discord;
mod weather;

pub use config::ConfigError;
pub use discord::{DiscordError, DiscordErrorKind, DiscordResult};
pub use weather::{WeatherError, WeatherErrorKind, WeatherResult};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum SquawkErrorKind {
    /// Configuration error
    #[display("{_0}")]
    Config(ConfigError),
    /// Weather service error
    #[display("{_0}")]
    Weather(WeatherError),
    /// Discord platform error
    #[display("{_0}")]
    Discord(DiscordError),
}

/// Squawk error with kind discrimination.
#[derive(Debug, derive_more::Display)]
#[display("Squawk Error: {_0}")]
pub struct SquawkError(Box<SquawkErrorKind>);

impl SquawkError {
    /// Create a new error from a kind.
    pub fn new(kind: SquawkErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SquawkErrorKind {
        &self.0
    }
}

impl std::error::Error for SquawkError {}

// Generic From implementation for any type that converts to SquawkErrorKind
impl<T> From<T> for SquawkError
where
    T: Into<SquawkErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for squawk operations.
pub type SquawkResult<T> = std::result::Result<T, SquawkError>;
