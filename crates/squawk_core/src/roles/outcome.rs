//! Results of a self-service role request.

use super::Role;
use derive_getters::Getters;

/// Role operations the caller must issue against the platform.
///
/// The caller applies `remove` first, then `fallback`, then `add`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct RoleChange {
    add: Option<Role>,
    remove: Option<Role>,
    fallback: Option<Role>,
}

impl RoleChange {
    /// Grant `role`, optionally displacing another and granting the baseline.
    pub fn grant(role: Role, remove: Option<Role>, fallback: Option<Role>) -> Self {
        Self {
            add: Some(role),
            remove,
            fallback,
        }
    }

    /// Revoke `role`.
    pub fn revoke(role: Role) -> Self {
        Self {
            add: None,
            remove: Some(role),
            fallback: None,
        }
    }

    /// Whether the baseline role was granted because the member held no
    /// assignable roles.
    pub fn fallback_granted(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Outcome of [`RoleResolver::resolve_add`](super::RoleResolver::resolve_add)
/// or [`RoleResolver::resolve_remove`](super::RoleResolver::resolve_remove).
///
/// Every variant other than `Applied` is a user-correctable answer, not a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleChangeOutcome {
    /// No role with that name exists.
    NotFound,
    /// The role may not be granted or revoked through self-service.
    Restricted(Role),
    /// The member already holds the role.
    AlreadyHeld(Role),
    /// The member does not hold the role.
    NotHeld(Role),
    /// Operations to perform.
    Applied(RoleChange),
}

impl RoleChangeOutcome {
    /// The change to apply, if any.
    pub fn change(&self) -> Option<&RoleChange> {
        match self {
            Self::Applied(change) => Some(change),
            _ => None,
        }
    }
}
