//! User-facing replies.
//!
//! Everything here is platform-free; the handler converts [`EmbedReply`] into
//! a serenity embed and sends plain strings as-is.

use derive_getters::Getters;
use squawk_core::{Role, RoleCatalog, RoleChangeOutcome};
use squawk_weather::Briefing;

/// Embed colour for the role list.
pub const ROLE_LIST_COLOUR: u32 = 0x3498DB;

/// Embed colour for the greeting.
pub const WELCOME_COLOUR: u32 = 0x2ECC71;

/// Discord rejects embed descriptions longer than this.
const DESCRIPTION_LIMIT: usize = 4096;

/// A rich reply, independent of the chat library.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EmbedReply {
    title: String,
    description: String,
    colour: u32,
    fields: Vec<(String, String, bool)>,
}

impl EmbedReply {
    /// Embed with no fields.
    pub fn new(title: impl Into<String>, description: impl Into<String>, colour: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            colour,
            fields: Vec::new(),
        }
    }

    /// Append an inline field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into(), true));
        self
    }
}

/// The `roles` listing: every role except `@everyone` and restricted ones.
pub fn role_list(catalog: &RoleCatalog, prefix: &str) -> EmbedReply {
    let mut description = String::from("Here are the roles you can select:\n");
    for role in catalog.selectable() {
        description.push_str("\n• ");
        description.push_str(role.name());
    }
    description.push_str(&format!(
        "\n\nUse `{}roles add <name>` to select.",
        prefix
    ));

    EmbedReply::new("Available Roles", description, ROLE_LIST_COLOUR)
}

/// Replies for an add request, in the order the operations are applied.
///
/// Rejections quote the name as typed; confirmations use the role's own name.
pub fn add_role_replies(outcome: &RoleChangeOutcome, typed: &str, mention: &str) -> Vec<String> {
    match outcome {
        RoleChangeOutcome::NotFound => {
            vec![format!("Sorry, the role '{}' does not exist.", typed)]
        }
        RoleChangeOutcome::Restricted(_) => {
            vec![format!("The role '{}' cannot be added.", typed)]
        }
        RoleChangeOutcome::AlreadyHeld(_) => {
            vec![format!("You already have the role '{}'.", typed)]
        }
        RoleChangeOutcome::NotHeld(_) => {
            vec![format!("You do not have the role '{}'.", typed)]
        }
        RoleChangeOutcome::Applied(change) => {
            let mut replies = Vec::new();
            if let Some(removed) = change.remove() {
                replies.push(format!("Removed lower role '{}'.", removed.name()));
            }
            if let Some(baseline) = change.fallback() {
                replies.push(format!(
                    "Assigned '{}' role to {}.",
                    baseline.name(),
                    mention
                ));
            }
            if let Some(added) = change.add() {
                replies.push(format!("Added role '{}' to {}.", added.name(), mention));
            }
            replies
        }
    }
}

/// Reply for a remove request.
pub fn remove_role_reply(outcome: &RoleChangeOutcome, typed: &str, mention: &str) -> String {
    match outcome {
        RoleChangeOutcome::NotFound | RoleChangeOutcome::Restricted(_) => {
            format!("The role '{}' cannot be removed.", typed)
        }
        RoleChangeOutcome::NotHeld(_) | RoleChangeOutcome::AlreadyHeld(_) => {
            format!("You do not have the role '{}'.", typed)
        }
        RoleChangeOutcome::Applied(change) => {
            let name = change.remove().as_ref().map(Role::name).map_or(typed, String::as_str);
            format!("Removed role '{}' from {}.", name, mention)
        }
    }
}

/// Embed for an interpreted weather report.
pub fn weather_reply(briefing: &Briefing) -> EmbedReply {
    let interpretation = briefing.interpretation();
    let conditions = interpretation.conditions();
    let category = *interpretation.category();

    let visibility = match (
        *conditions.visibility_meters(),
        conditions.visibility_statute_miles(),
    ) {
        (Some(meters), Some(miles)) => format!("{:.0} m ({:.1} SM)", meters, miles),
        _ => "Unknown".to_string(),
    };
    let ceiling = (*conditions.ceiling_feet())
        .map_or_else(|| "Unknown".to_string(), |feet| format!("{} ft", feet));

    EmbedReply::new(
        format!("{} {}", interpretation.kind(), briefing.station()),
        code_block(interpretation.section()),
        category.colour(),
    )
    .with_field("Flight category", category.to_string())
    .with_field("Visibility", visibility)
    .with_field("Ceiling", ceiling)
}

/// Reply when a station argument does not look like an ICAO identifier.
pub fn invalid_station_reply(input: &str) -> String {
    format!("'{}' is not a valid station identifier.", input)
}

/// Reply when a weather command was given no station.
pub fn station_usage_reply(prefix: &str, command: &str) -> String {
    format!("Usage: `{}{} <ICAO>`", prefix, command)
}

fn code_block(text: &str) -> String {
    let budget = DESCRIPTION_LIMIT - "```\n\n```".len();
    let body = match text.char_indices().nth(budget) {
        Some((end, _)) => &text[..end],
        None => text,
    };
    format!("```\n{}\n```", body)
}
