//! Prefix command parsing.

use squawk_core::ReportKind;

/// Sub-command of `roles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RolesCommand {
    /// List selectable roles
    List,
    /// Request a role by name
    Add(String),
    /// Drop a role by name
    Remove(String),
}

/// A recognised chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Re-send the greeting for the invoker
    Welcome,
    /// Self-service roles
    Roles(RolesCommand),
    /// Ban by user id or username; `None` when no target was given
    Ban(Option<String>),
    /// Fetch a weather report; `station` is the raw argument
    Weather {
        /// Requested report
        kind: ReportKind,
        /// Raw station argument
        station: Option<String>,
    },
}

impl BotCommand {
    /// Parse a message body.
    ///
    /// Returns `None` for anything that is not a recognised command, including
    /// `roles` with an unknown action or an `add`/`remove` without a name.
    /// Command names are case-sensitive; the `roles` action is not.
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        let body = content.trim_start().strip_prefix(prefix)?;
        let (name, rest) = split_word(body);

        match name {
            "welcome" => Some(Self::Welcome),
            "roles" => parse_roles(rest).map(Self::Roles),
            "ban" => Some(Self::Ban(first_word(rest))),
            "metar" => Some(weather(ReportKind::Metar, rest)),
            "taf" => Some(weather(ReportKind::Taf, rest)),
            "atis" => Some(weather(ReportKind::Atis, rest)),
            _ => None,
        }
    }
}

fn parse_roles(rest: &str) -> Option<RolesCommand> {
    let (action, name) = split_word(rest);
    if action.is_empty() {
        return Some(RolesCommand::List);
    }

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    match action.to_lowercase().as_str() {
        "add" => Some(RolesCommand::Add(name.to_string())),
        "remove" => Some(RolesCommand::Remove(name.to_string())),
        _ => None,
    }
}

fn weather(kind: ReportKind, rest: &str) -> BotCommand {
    BotCommand::Weather {
        kind,
        station: first_word(rest),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], &input[end..]),
        None => (input, ""),
    }
}

fn first_word(input: &str) -> Option<String> {
    let (word, _) = split_word(input);
    (!word.is_empty()).then(|| word.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_list() {
        assert_eq!(
            BotCommand::parse("!roles", "!"),
            Some(BotCommand::Roles(RolesCommand::List))
        );
        assert_eq!(
            BotCommand::parse("!roles   ", "!"),
            Some(BotCommand::Roles(RolesCommand::List))
        );
    }

    #[test]
    fn test_roles_add_keeps_multi_word_name() {
        assert_eq!(
            BotCommand::parse("!roles ADD  Private Pilot ", "!"),
            Some(BotCommand::Roles(RolesCommand::Add("Private Pilot".into())))
        );
        assert_eq!(
            BotCommand::parse("!roles remove pilot", "!"),
            Some(BotCommand::Roles(RolesCommand::Remove("pilot".into())))
        );
    }

    #[test]
    fn test_roles_without_name_or_with_unknown_action_is_ignored() {
        assert_eq!(BotCommand::parse("!roles add", "!"), None);
        assert_eq!(BotCommand::parse("!roles add   ", "!"), None);
        assert_eq!(BotCommand::parse("!roles swap Pilot", "!"), None);
    }

    #[test]
    fn test_ban_target() {
        assert_eq!(
            BotCommand::parse("!ban 1234 spamming", "!"),
            Some(BotCommand::Ban(Some("1234".into())))
        );
        assert_eq!(BotCommand::parse("!ban", "!"), Some(BotCommand::Ban(None)));
    }

    #[test]
    fn test_weather_commands() {
        assert_eq!(
            BotCommand::parse("!metar kjfk", "!"),
            Some(BotCommand::Weather {
                kind: ReportKind::Metar,
                station: Some("kjfk".into()),
            })
        );
        assert_eq!(
            BotCommand::parse("!atis", "!"),
            Some(BotCommand::Weather {
                kind: ReportKind::Atis,
                station: None,
            })
        );
    }

    #[test]
    fn test_prefix_and_unknown_commands() {
        assert_eq!(BotCommand::parse("roles", "!"), None);
        assert_eq!(BotCommand::parse("!dance", "!"), None);
        assert_eq!(BotCommand::parse("!Roles", "!"), None);
        assert_eq!(
            BotCommand::parse("?welcome", "?"),
            Some(BotCommand::Welcome)
        );
    }
}
