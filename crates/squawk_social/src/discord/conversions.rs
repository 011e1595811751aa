//! Conversions between serenity models and squawk types.

use crate::render::EmbedReply;
use serenity::all::{
    Colour, CreateEmbed, Member, PartialGuild, Permissions, Role as DiscordRole, RoleId,
};
use serenity::http::HttpError;
use squawk_core::{MemberSnapshot, RoleCatalog, RolePolicy};
use squawk_error::{DiscordError, DiscordErrorKind};

/// Build a catalog from guild roles, using the role position as precedence.
pub fn catalog_from_roles<'a>(
    roles: impl IntoIterator<Item = &'a DiscordRole>,
    policy: &RolePolicy,
) -> RoleCatalog {
    RoleCatalog::new(
        roles
            .into_iter()
            .map(|role| (role.id.get(), role.name.clone(), i64::from(role.position))),
        policy.clone(),
    )
}

/// Snapshot a member's roles against the catalog.
pub(crate) fn member_snapshot(catalog: &RoleCatalog, member: &Member) -> MemberSnapshot {
    MemberSnapshot::from_role_ids(catalog, member.roles.iter().copied().map(RoleId::get))
}

/// Names of the roles `member` holds.
pub(crate) fn held_role_names<'a>(
    guild: &'a PartialGuild,
    member: &'a Member,
) -> impl Iterator<Item = &'a str> {
    member
        .roles
        .iter()
        .filter_map(|id| guild.roles.get(id))
        .map(|role| role.name.as_str())
}

/// Owner, or any held role (including `@everyone`) grants administrator.
pub(crate) fn is_administrator(guild: &PartialGuild, member: &Member) -> bool {
    if guild.owner_id == member.user.id {
        return true;
    }
    let everyone = RoleId::new(guild.id.get());
    member
        .roles
        .iter()
        .chain(std::iter::once(&everyone))
        .filter_map(|id| guild.roles.get(id))
        .any(|role| role.permissions.contains(Permissions::ADMINISTRATOR))
}

/// Classify a serenity error. HTTP 403 becomes `Forbidden`.
#[track_caller]
pub fn discord_error(err: serenity::Error) -> DiscordError {
    if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
        if response.status_code.as_u16() == 403 {
            return DiscordError::new(DiscordErrorKind::Forbidden(
                response.error.message.clone(),
            ));
        }
    }
    DiscordError::new(DiscordErrorKind::Serenity(err.to_string()))
}

impl From<&EmbedReply> for CreateEmbed {
    fn from(reply: &EmbedReply) -> Self {
        let mut embed = CreateEmbed::new()
            .description(reply.description())
            .colour(Colour::new(*reply.colour()))
            .fields(reply.fields().iter().cloned());
        if !reply.title().is_empty() {
            embed = embed.title(reply.title());
        }
        embed
    }
}
