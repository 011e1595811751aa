//! Discord-specific error types.
//!
//! The serenity client is not a dependency of this crate; platform errors are
//! classified by the caller and carried here as text.

/// Discord error variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DiscordErrorKind {
    /// Serenity API error (HTTP error, gateway error, rate limit).
    #[display("Serenity API error: {_0}")]
    Serenity(String),
    /// The platform refused the operation for lack of permissions.
    #[display("Forbidden: {_0}")]
    Forbidden(String),
    /// Command was used outside of a guild.
    #[display("Command is only available inside a server")]
    GuildOnly,
    /// Member not found in the guild.
    #[display("Member not found: {_0}")]
    MemberNotFound(String),
    /// User not found by ID.
    #[display("User not found: {_0}")]
    UserNotFound(u64),
    /// Message failed to send.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),
    /// Configuration error (missing IDs, unreadable files).
    #[display("Configuration error: {_0}")]
    Configuration(String),
}

/// Discord error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    kind: DiscordErrorKind,
    line: u32,
    file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use squawk_error::{DiscordError, DiscordErrorKind};
    ///
    /// let err = DiscordError::new(DiscordErrorKind::GuildOnly);
    /// assert_eq!(err.kind(), &DiscordErrorKind::GuildOnly);
    /// ```
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DiscordErrorKind {
        &self.kind
    }

    /// Whether the platform rejected the call for lack of permissions.
    pub fn is_forbidden(&self) -> bool {
        matches!(self.kind, DiscordErrorKind::Forbidden(_))
    }
}

impl From<DiscordErrorKind> for DiscordError {
    #[track_caller]
    fn from(kind: DiscordErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for Discord operations.
pub type DiscordResult<T> = Result<T, DiscordError>;
