//! Gateway event handler.

use super::conversions::{
    catalog_from_roles, discord_error, held_role_names, is_administrator, member_snapshot,
};
use crate::ban::{self, BanGate, BanTarget};
use crate::render::{self, EmbedReply};
use crate::welcome::{load_welcome_message, rules_link, welcome_embed};
use crate::{BotCommand, BotConfig, RolesCommand};
use serenity::all::{
    ChannelId, Context, CreateEmbed, CreateMessage, EventHandler, GuildId, Member, Mentionable,
    Message, PartialGuild, Ready, RoleId, UserId,
};
use serenity::async_trait;
use squawk_core::{ReportKind, RoleCatalog, RoleResolver};
use squawk_error::{DiscordError, DiscordErrorKind, DiscordResult};
use squawk_weather::{Station, WeatherService};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Handles member joins and prefix commands.
///
/// Every command reads a fresh role snapshot from the platform; nothing is
/// cached between invocations.
#[derive(Debug, Clone)]
pub struct SquawkHandler {
    config: Arc<BotConfig>,
    weather: Arc<WeatherService>,
}

impl SquawkHandler {
    /// Handler sharing `config` and `weather` across events.
    pub fn new(config: Arc<BotConfig>, weather: Arc<WeatherService>) -> Self {
        Self { config, weather }
    }

    #[instrument(skip_all, fields(command = ?command))]
    async fn dispatch(
        &self,
        ctx: &Context,
        msg: &Message,
        command: BotCommand,
    ) -> DiscordResult<()> {
        match command {
            BotCommand::Welcome => self.welcome_invoker(ctx, msg).await,
            BotCommand::Roles(RolesCommand::List) => self.list_roles(ctx, msg).await,
            BotCommand::Roles(RolesCommand::Add(name)) => self.add_role(ctx, msg, &name).await,
            BotCommand::Roles(RolesCommand::Remove(name)) => {
                self.remove_role(ctx, msg, &name).await
            }
            BotCommand::Ban(target) => self.ban(ctx, msg, target.as_deref()).await,
            BotCommand::Weather { kind, station } => {
                self.weather(ctx, msg, kind, station.as_deref()).await
            }
        }
    }

    async fn guild_catalog(
        &self,
        ctx: &Context,
        guild_id: GuildId,
    ) -> DiscordResult<(PartialGuild, RoleCatalog)> {
        let guild = guild_id
            .to_partial_guild(&ctx.http)
            .await
            .map_err(discord_error)?;
        let catalog = catalog_from_roles(guild.roles.values(), self.config.roles());
        Ok((guild, catalog))
    }

    async fn member(
        &self,
        ctx: &Context,
        guild_id: GuildId,
        user_id: UserId,
    ) -> DiscordResult<Member> {
        guild_id
            .member(ctx, user_id)
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::MemberNotFound(e.to_string())))
    }

    async fn say(
        &self,
        ctx: &Context,
        channel: ChannelId,
        content: impl Into<String>,
    ) -> DiscordResult<()> {
        channel
            .say(&ctx.http, content)
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::MessageSendFailed(e.to_string())))?;
        Ok(())
    }

    async fn send_embed(
        &self,
        ctx: &Context,
        channel: ChannelId,
        reply: &EmbedReply,
    ) -> DiscordResult<()> {
        channel
            .send_message(ctx, CreateMessage::new().embed(CreateEmbed::from(reply)))
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::MessageSendFailed(e.to_string())))?;
        Ok(())
    }

    async fn greeting(&self, guild_id: GuildId, mention: &str) -> DiscordResult<EmbedReply> {
        let welcome = self.config.welcome();
        let body = load_welcome_message(welcome.message_path()).await?;
        let link = rules_link(guild_id.get(), welcome);
        if link.is_none() {
            warn!("Rules channel or message not configured, omitting rules link");
        }
        Ok(welcome_embed(mention, &body, link.as_deref()))
    }

    #[instrument(skip_all, fields(guild = %member.guild_id, user = %member.user.name))]
    async fn greet_member(&self, ctx: &Context, member: &Member) -> DiscordResult<()> {
        let Some(channel_id) = *self.config.welcome().channel_id() else {
            warn!("No welcome channel configured, skipping greeting");
            return Ok(());
        };

        let reply = self
            .greeting(member.guild_id, &member.mention().to_string())
            .await?;
        self.send_embed(ctx, ChannelId::new(channel_id), &reply).await?;
        info!("Greeted new member");
        Ok(())
    }

    async fn welcome_invoker(&self, ctx: &Context, msg: &Message) -> DiscordResult<()> {
        let guild_id = guild_of(msg)?;
        let reply = self
            .greeting(guild_id, &msg.author.mention().to_string())
            .await?;
        self.send_embed(ctx, msg.channel_id, &reply).await
    }

    async fn list_roles(&self, ctx: &Context, msg: &Message) -> DiscordResult<()> {
        info!(author = %msg.author.name, "Saw !roles from {}", msg.author.name);
        let guild_id = guild_of(msg)?;
        let (_, catalog) = self.guild_catalog(ctx, guild_id).await?;
        let reply = render::role_list(&catalog, self.config.prefix());
        self.send_embed(ctx, msg.channel_id, &reply).await
    }

    #[instrument(skip_all, fields(author = %msg.author.name, role = typed))]
    async fn add_role(&self, ctx: &Context, msg: &Message, typed: &str) -> DiscordResult<()> {
        info!("Saw !roles add from {}", msg.author.name);
        let guild_id = guild_of(msg)?;
        let (_, catalog) = self.guild_catalog(ctx, guild_id).await?;
        let member = self.member(ctx, guild_id, msg.author.id).await?;
        let snapshot = member_snapshot(&catalog, &member);
        let outcome = RoleResolver::new(&catalog).resolve_add(&snapshot, typed);
        debug!(?outcome, "Resolved role request");

        if let Some(change) = outcome.change() {
            if let Some(role) = change.remove() {
                member
                    .remove_role(&ctx.http, RoleId::new(*role.id()))
                    .await
                    .map_err(discord_error)?;
            }
            if let Some(role) = change.fallback() {
                member
                    .add_role(&ctx.http, RoleId::new(*role.id()))
                    .await
                    .map_err(discord_error)?;
            }
            if let Some(role) = change.add() {
                member
                    .add_role(&ctx.http, RoleId::new(*role.id()))
                    .await
                    .map_err(discord_error)?;
            }
            info!(?change, "Applied role change");
        }

        let mention = msg.author.mention().to_string();
        for reply in render::add_role_replies(&outcome, typed, &mention) {
            self.say(ctx, msg.channel_id, reply).await?;
        }
        Ok(())
    }

    #[instrument(skip_all, fields(author = %msg.author.name, role = typed))]
    async fn remove_role(&self, ctx: &Context, msg: &Message, typed: &str) -> DiscordResult<()> {
        info!("Saw !roles remove from {}", msg.author.name);
        let guild_id = guild_of(msg)?;
        let (_, catalog) = self.guild_catalog(ctx, guild_id).await?;
        let member = self.member(ctx, guild_id, msg.author.id).await?;
        let snapshot = member_snapshot(&catalog, &member);
        let outcome = RoleResolver::new(&catalog).resolve_remove(&snapshot, typed);
        debug!(?outcome, "Resolved role removal");

        if let Some(role) = outcome.change().and_then(|change| change.remove().as_ref()) {
            member
                .remove_role(&ctx.http, RoleId::new(*role.id()))
                .await
                .map_err(discord_error)?;
            info!(role = %role.name(), "Removed role");
        }

        let mention = msg.author.mention().to_string();
        let reply = render::remove_role_reply(&outcome, typed, &mention);
        self.say(ctx, msg.channel_id, reply).await
    }

    #[instrument(skip_all, fields(author = %msg.author.name, target = ?target))]
    async fn ban(&self, ctx: &Context, msg: &Message, target: Option<&str>) -> DiscordResult<()> {
        info!("Saw !ban from {}", msg.author.name);
        let guild_id = guild_of(msg)?;
        let (guild, _) = self.guild_catalog(ctx, guild_id).await?;
        let invoker = self.member(ctx, guild_id, msg.author.id).await?;

        let gate = BanGate::new(self.config.ban());
        if let Err(denied) = gate.check(
            held_role_names(&guild, &invoker),
            is_administrator(&guild, &invoker),
        ) {
            warn!(?denied, "Ban refused");
            return self.say(ctx, msg.channel_id, denied.reply()).await;
        }

        let Some(target) = target else {
            return self
                .say(ctx, msg.channel_id, ban::GENERIC_FAILURE_REPLY)
                .await;
        };

        let reply = match BanTarget::parse(target) {
            BanTarget::Id(id) => match self.ban_user(ctx, guild_id, UserId::new(id)).await {
                Ok(()) => ban::banned_reply(id),
                Err(e) => ban::ban_error_reply(&e),
            },
            BanTarget::Username(name) => match self.member_named(ctx, guild_id, &name).await {
                Ok(Some(found)) => match self.ban_user(ctx, guild_id, found.user.id).await {
                    Ok(()) => ban::banned_reply(found.user.tag()),
                    Err(e) => ban::ban_error_reply(&e),
                },
                Ok(None) => ban::username_not_found_reply(&name),
                Err(e) => ban::ban_error_reply(&e),
            },
        };
        self.say(ctx, msg.channel_id, reply).await
    }

    async fn member_named(
        &self,
        ctx: &Context,
        guild_id: GuildId,
        username: &str,
    ) -> DiscordResult<Option<Member>> {
        let http = &ctx.http;
        ban::find_in_pages(
            |after| async move {
                guild_id
                    .members(http, Some(ban::MEMBER_PAGE_SIZE), after.map(UserId::new))
                    .await
                    .map_err(discord_error)
            },
            |member: &Member| member.user.id.get(),
            |member: &Member| member.user.name == username,
        )
        .await
    }

    async fn ban_user(
        &self,
        ctx: &Context,
        guild_id: GuildId,
        user_id: UserId,
    ) -> DiscordResult<()> {
        let user = user_id.to_user(ctx).await.map_err(discord_error)?;
        guild_id
            .ban(&ctx.http, user.id, 0)
            .await
            .map_err(discord_error)?;
        info!(user = %user.name, "Banned user");
        Ok(())
    }

    #[instrument(skip_all, fields(%kind, station = ?station))]
    async fn weather(
        &self,
        ctx: &Context,
        msg: &Message,
        kind: ReportKind,
        station: Option<&str>,
    ) -> DiscordResult<()> {
        info!(author = %msg.author.name, "Weather request");
        let Some(input) = station else {
            let command = kind.to_string().to_lowercase();
            let usage = render::station_usage_reply(self.config.prefix(), &command);
            return self.say(ctx, msg.channel_id, usage).await;
        };
        let Ok(station) = Station::parse(input) else {
            return self
                .say(ctx, msg.channel_id, render::invalid_station_reply(input))
                .await;
        };

        match self.weather.briefing(&station, kind).await {
            Ok(briefing) => {
                self.send_embed(ctx, msg.channel_id, &render::weather_reply(&briefing))
                    .await
            }
            Err(e) => {
                error!(error = %e, "Weather fetch failed");
                let reply = format!("Failed to fetch {} for {}.", kind, station);
                self.say(ctx, msg.channel_id, reply).await
            }
        }
    }
}

fn guild_of(msg: &Message) -> DiscordResult<GuildId> {
    msg.guild_id
        .ok_or_else(|| DiscordError::new(DiscordErrorKind::GuildOnly))
}

#[async_trait]
impl EventHandler for SquawkHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Bot is online as {}",
            ready.user.name
        );
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        if let Err(e) = self.greet_member(&ctx, &new_member).await {
            error!(error = %e, "Failed to greet new member");
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(command) = BotCommand::parse(&msg.content, self.config.prefix()) else {
            return;
        };

        if let Err(e) = self.dispatch(&ctx, &msg, command).await {
            error!(error = %e, author = %msg.author.name, "Command failed");
        }
    }
}
