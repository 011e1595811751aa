//! Tests for user-facing replies.

use squawk_core::{MemberSnapshot, ReportKind, RoleCatalog, RolePolicy, RoleResolver, WeatherReport};
use squawk_social::render::{
    ROLE_LIST_COLOUR, add_role_replies, remove_role_reply, role_list, weather_reply,
};
use squawk_weather::{Briefing, Station};

fn catalog() -> RoleCatalog {
    RoleCatalog::new(
        [
            (1, "@everyone", 0),
            (2, "Member", 1),
            (3, "Student Pilot", 2),
            (4, "Private Pilot", 3),
            (5, "ATC", 4),
            (6, "Mod", 5),
        ],
        RolePolicy::default().with_restricted(vec!["Mod".to_string()]),
    )
}

fn member(catalog: &RoleCatalog, ids: &[u64]) -> MemberSnapshot {
    MemberSnapshot::from_role_ids(catalog, ids.iter().copied())
}

// ============================================================================
// Role list
// ============================================================================

#[test]
fn test_role_list_omits_everyone_and_restricted() {
    let reply = role_list(&catalog(), "!");
    assert_eq!(reply.title(), "Available Roles");
    assert_eq!(*reply.colour(), ROLE_LIST_COLOUR);
    assert_eq!(
        reply.description(),
        "Here are the roles you can select:\n\n• Member\n• Student Pilot\n• Private Pilot\n• ATC\n\nUse `!roles add <name>` to select."
    );
}

// ============================================================================
// Role requests
// ============================================================================

#[test]
fn test_add_replies_follow_operation_order() {
    let catalog = catalog();
    let resolver = RoleResolver::new(&catalog);

    let outcome = resolver.resolve_add(&member(&catalog, &[3]), "private pilot");
    assert_eq!(
        add_role_replies(&outcome, "private pilot", "<@42>"),
        vec![
            "Removed lower role 'Student Pilot'.".to_string(),
            "Added role 'Private Pilot' to <@42>.".to_string(),
        ]
    );
}

#[test]
fn test_add_replies_announce_baseline_for_bare_member() {
    let catalog = catalog();
    let outcome = RoleResolver::new(&catalog).resolve_add(&member(&catalog, &[]), "student pilot");
    assert_eq!(
        add_role_replies(&outcome, "student pilot", "<@42>"),
        vec![
            "Assigned 'Member' role to <@42>.".to_string(),
            "Added role 'Student Pilot' to <@42>.".to_string(),
        ]
    );
}

#[test]
fn test_add_rejections_quote_typed_name() {
    let catalog = catalog();
    let resolver = RoleResolver::new(&catalog);
    let snapshot = member(&catalog, &[2, 3]);

    let cases = [
        ("Astronaut", "Sorry, the role 'Astronaut' does not exist."),
        ("mod", "The role 'mod' cannot be added."),
        ("student pilot", "You already have the role 'student pilot'."),
    ];
    for (typed, expected) in cases {
        let outcome = resolver.resolve_add(&snapshot, typed);
        assert_eq!(add_role_replies(&outcome, typed, "<@1>"), vec![expected.to_string()]);
    }
}

#[test]
fn test_remove_replies() {
    let catalog = catalog();
    let resolver = RoleResolver::new(&catalog);
    let snapshot = member(&catalog, &[2, 3]);

    let removed = resolver.resolve_remove(&snapshot, "Student Pilot");
    assert_eq!(
        remove_role_reply(&removed, "Student Pilot", "<@7>"),
        "Removed role 'Student Pilot' from <@7>."
    );

    let unknown = resolver.resolve_remove(&snapshot, "student pilot");
    assert_eq!(
        remove_role_reply(&unknown, "student pilot", "<@7>"),
        "The role 'student pilot' cannot be removed."
    );

    let restricted = resolver.resolve_remove(&snapshot, "Mod");
    assert_eq!(
        remove_role_reply(&restricted, "Mod", "<@7>"),
        "The role 'Mod' cannot be removed."
    );

    let not_held = resolver.resolve_remove(&snapshot, "ATC");
    assert_eq!(
        remove_role_reply(&not_held, "ATC", "<@7>"),
        "You do not have the role 'ATC'."
    );
}

// ============================================================================
// Weather
// ============================================================================

fn briefing(kind: ReportKind, text: &str) -> Briefing {
    Briefing::new(
        Station::parse("kjfk").unwrap(),
        WeatherReport::new(kind, text).interpret(),
    )
}

#[test]
fn test_weather_reply_fields() {
    let reply = weather_reply(&briefing(
        ReportKind::Metar,
        "METAR KJFK 121651Z 31008KT 9999 FEW250 SCT040 BKN012 19/08 A3012",
    ));

    assert_eq!(reply.title(), "METAR KJFK");
    assert_eq!(*reply.colour(), 0x3498DB);
    assert!(reply.description().starts_with("```\nMETAR KJFK"));
    assert_eq!(
        reply.fields(),
        &vec![
            ("Flight category".to_string(), "MVFR".to_string(), true),
            ("Visibility".to_string(), "9999 m (6.2 SM)".to_string(), true),
            ("Ceiling".to_string(), "1200 ft".to_string(), true),
        ]
    );
}

#[test]
fn test_weather_reply_unknown_conditions() {
    let reply = weather_reply(&briefing(ReportKind::Taf, "TAF KJFK NIL"));
    assert_eq!(reply.title(), "TAF KJFK");
    assert_eq!(*reply.colour(), 0x95A5A6);
    assert_eq!(reply.fields()[0].1, "Unknown");
    assert_eq!(reply.fields()[1].1, "Unknown");
    assert_eq!(reply.fields()[2].1, "Unknown");
}
