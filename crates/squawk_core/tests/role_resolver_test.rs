//! Behavioral tests for the self-service role ladder.

use squawk_core::{MemberSnapshot, RoleCatalog, RoleChangeOutcome, RolePolicy, RoleResolver};

fn policy() -> RolePolicy {
    RolePolicy::default().with_restricted(vec!["Mod".to_string(), "Server Booster".to_string()])
}

fn catalog() -> RoleCatalog {
    RoleCatalog::new(
        [
            (100, "@everyone", 0),
            (101, "Member", 1),
            (102, "Student Pilot", 2),
            (103, "RPC", 3),
            (104, "Private Pilot", 4),
            (105, "Commercial Pilot", 5),
            (106, "ATC", 6),
            (107, "Server Booster", 7),
            (108, "Mod", 8),
        ],
        policy(),
    )
}

// ============================================================================
// Restricted roles
// ============================================================================

#[test]
fn test_restricted_regardless_of_case() {
    let catalog = catalog();
    let resolver = RoleResolver::new(&catalog);
    let snapshots = [
        MemberSnapshot::from_role_ids(&catalog, []),
        MemberSnapshot::from_role_ids(&catalog, [101, 104]),
        MemberSnapshot::from_role_ids(&catalog, [108]),
    ];

    for member in &snapshots {
        for typed in ["mod", "MOD", "Mod", "server booster", "SERVER BOOSTER", "@EVERYONE"] {
            let outcome = resolver.resolve_add(member, typed);
            assert!(
                matches!(outcome, RoleChangeOutcome::Restricted(_)),
                "{typed} should be restricted, got {outcome:?}"
            );
        }
    }
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_add_twice_is_already_held() {
    let catalog = catalog();
    let resolver = RoleResolver::new(&catalog);

    for (held, requested) in [
        (vec![], "Student Pilot"),
        (vec![101, 102], "commercial pilot"),
        (vec![103], "Private Pilot"),
        (vec![105], "atc"),
    ] {
        let member = MemberSnapshot::from_role_ids(&catalog, held);
        let RoleChangeOutcome::Applied(change) = resolver.resolve_add(&member, requested) else {
            panic!("first add of {requested} should apply");
        };
        let after = member.apply(&change);
        let second = resolver.resolve_add(&after, requested);
        assert!(
            matches!(second, RoleChangeOutcome::AlreadyHeld(_)),
            "second add of {requested} gave {second:?}"
        );
    }
}

#[test]
fn test_remove_not_held_and_idempotent() {
    let catalog = catalog();
    let resolver = RoleResolver::new(&catalog);
    let member = MemberSnapshot::from_role_ids(&catalog, [101, 104]);

    let outcome = resolver.resolve_remove(&member, "Commercial Pilot");
    assert!(matches!(outcome, RoleChangeOutcome::NotHeld(_)));

    let RoleChangeOutcome::Applied(change) = resolver.resolve_remove(&member, "Private Pilot")
    else {
        panic!("remove of a held role should apply");
    };
    assert!(change.add().is_none());
    let after = member.apply(&change);
    let second = resolver.resolve_remove(&after, "Private Pilot");
    assert!(matches!(second, RoleChangeOutcome::NotHeld(_)));
}

#[test]
fn test_remove_unknown_role() {
    let catalog = catalog();
    let member = MemberSnapshot::from_role_ids(&catalog, [101]);
    let outcome = RoleResolver::new(&catalog).resolve_remove(&member, "Astronaut");
    assert_eq!(outcome, RoleChangeOutcome::NotFound);
}

// ============================================================================
// Exempt role
// ============================================================================

#[test]
fn test_exempt_never_removes() {
    let catalog = catalog();
    let resolver = RoleResolver::new(&catalog);

    for held in [vec![], vec![101], vec![101, 105], vec![103, 104], vec![108]] {
        let member = MemberSnapshot::from_role_ids(&catalog, held);
        let RoleChangeOutcome::Applied(change) = resolver.resolve_add(&member, "ATC") else {
            panic!("ATC should apply");
        };
        assert!(change.remove().is_none());
        assert!(!change.fallback_granted());
    }
}

// ============================================================================
// Ladder
// ============================================================================

#[test]
fn test_upgrade_displaces_last_lower_role() {
    let catalog = catalog();
    let member = MemberSnapshot::from_role_ids(&catalog, [101, 102]);
    let outcome = RoleResolver::new(&catalog).resolve_add(&member, "Private Pilot");
    let change = outcome.change().expect("applied");
    assert_eq!(
        change.remove().as_ref().map(|r| r.name().as_str()),
        Some("Student Pilot")
    );
    assert_eq!(
        change.add().as_ref().map(|r| r.name().as_str()),
        Some("Private Pilot")
    );
}

#[test]
fn test_protected_role_kept_on_upgrade() {
    let catalog = catalog();
    let member = MemberSnapshot::from_role_ids(&catalog, [103]);
    let outcome = RoleResolver::new(&catalog).resolve_add(&member, "Commercial Pilot");
    let change = outcome.change().expect("applied");
    assert!(change.remove().is_none());
}

#[test]
fn test_baseline_only_for_members_without_assignable_roles() {
    let catalog = catalog();
    let resolver = RoleResolver::new(&catalog);

    let newcomer = MemberSnapshot::from_role_ids(&catalog, []);
    let change = resolver
        .resolve_add(&newcomer, "Student Pilot")
        .change()
        .cloned()
        .expect("applied");
    assert!(change.fallback_granted());
    assert_eq!(
        change.fallback().as_ref().map(|r| r.name().as_str()),
        Some("Member")
    );

    // Restricted roles do not count as assignable.
    let moderator = MemberSnapshot::from_role_ids(&catalog, [108]);
    let change = resolver
        .resolve_add(&moderator, "Student Pilot")
        .change()
        .cloned()
        .expect("applied");
    assert!(change.fallback_granted());

    let regular = MemberSnapshot::from_role_ids(&catalog, [101]);
    let change = resolver
        .resolve_add(&regular, "Student Pilot")
        .change()
        .cloned()
        .expect("applied");
    assert!(!change.fallback_granted());
}

#[test]
fn test_newcomer_requesting_baseline_gets_fallback() {
    let catalog = catalog();
    let member = MemberSnapshot::from_role_ids(&catalog, []);
    let outcome = RoleResolver::new(&catalog).resolve_add(&member, "member");
    let change = outcome.change().expect("applied");
    assert!(change.fallback_granted());
    assert_eq!(change.fallback(), change.add());
}

#[test]
fn test_missing_baseline_is_noop() {
    let catalog = RoleCatalog::new(
        [(1, "@everyone", 0), (2, "Student Pilot", 1)],
        RolePolicy::default(),
    );
    let member = MemberSnapshot::from_role_ids(&catalog, []);
    let outcome = RoleResolver::new(&catalog).resolve_add(&member, "student pilot");
    let change = outcome.change().expect("applied");
    assert!(!change.fallback_granted());
}
