//! The moderator ban command, minus the platform calls.

use crate::BanConfig;
use squawk_error::{DiscordError, DiscordResult};
use std::future::Future;

/// Largest page the member listing endpoint returns.
pub const MEMBER_PAGE_SIZE: u64 = 1000;

/// Who to ban.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BanTarget {
    /// A numeric user id
    Id(u64),
    /// A username to look up among guild members
    Username(String),
}

impl BanTarget {
    /// All-digit non-zero input is an id, anything else a username.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<u64>() {
            Ok(id) if id != 0 && input.chars().all(|c| c.is_ascii_digit()) => Self::Id(id),
            _ => Self::Username(input.to_string()),
        }
    }
}

/// Why an invoker may not ban.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BanDenied {
    /// Missing the configured moderator role
    MissingRole,
    /// Missing administrator permission
    MissingPermission,
}

impl BanDenied {
    /// Reply shown to the invoker.
    pub fn reply(self) -> &'static str {
        match self {
            BanDenied::MissingRole => "You do not have the required roles to use this command.",
            BanDenied::MissingPermission => GENERIC_FAILURE_REPLY,
        }
    }
}

/// Checks an invoker against [`BanConfig`].
#[derive(Debug, Clone, Copy)]
pub struct BanGate<'a> {
    config: &'a BanConfig,
}

impl<'a> BanGate<'a> {
    /// Gate for `config`.
    pub fn new(config: &'a BanConfig) -> Self {
        Self { config }
    }

    /// Role is checked before permission.
    pub fn check<'n>(
        &self,
        role_names: impl IntoIterator<Item = &'n str>,
        is_administrator: bool,
    ) -> Result<(), BanDenied> {
        let required = self.config.required_role();
        if !role_names.into_iter().any(|name| name == required) {
            return Err(BanDenied::MissingRole);
        }
        if *self.config.require_administrator() && !is_administrator {
            return Err(BanDenied::MissingPermission);
        }
        Ok(())
    }
}

/// Reply after a successful ban.
pub fn banned_reply(who: impl std::fmt::Display) -> String {
    format!("User {} has been banned.", who)
}

/// Reply when no member has the username.
pub fn username_not_found_reply(username: &str) -> String {
    format!("User with username '{}' not found.", username)
}

/// Reply for a refused or malformed invocation.
pub const GENERIC_FAILURE_REPLY: &str = "An error occurred while trying to ban the user.";

/// Reply when the platform rejects the ban for lack of permission.
pub const FORBIDDEN_REPLY: &str = "I don't have permission to ban this user.";

/// Reply for any other ban failure.
pub fn ban_failed_reply(error: impl std::fmt::Display) -> String {
    format!("Failed to ban user: {}", error)
}

/// Reply for a platform failure during a ban. A 403 gets its own reply.
pub fn ban_error_reply(error: &DiscordError) -> String {
    if error.is_forbidden() {
        FORBIDDEN_REPLY.to_string()
    } else {
        ban_failed_reply(error.kind())
    }
}

/// Scan a paginated listing for the first item that `matches`.
///
/// `fetch_page` receives the id of the last item of the previous page. The
/// scan stops at the first page shorter than [`MEMBER_PAGE_SIZE`].
pub async fn find_in_pages<T, F, Fut>(
    mut fetch_page: F,
    id_of: impl Fn(&T) -> u64,
    matches: impl Fn(&T) -> bool,
) -> DiscordResult<Option<T>>
where
    F: FnMut(Option<u64>) -> Fut,
    Fut: Future<Output = DiscordResult<Vec<T>>>,
{
    let mut after = None;
    loop {
        let page = fetch_page(after).await?;
        let exhausted = (page.len() as u64) < MEMBER_PAGE_SIZE;
        after = page.last().map(&id_of);

        if let Some(found) = page.into_iter().find(|item| matches(item)) {
            return Ok(Some(found));
        }
        if exhausted || after.is_none() {
            return Ok(None);
        }
    }
}
