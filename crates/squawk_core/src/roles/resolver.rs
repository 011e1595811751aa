//! Rank ladder resolution.

use super::{MemberSnapshot, Role, RoleCatalog, RoleChange, RoleChangeOutcome};
use tracing::{debug, instrument};

/// Decides the role operations for a self-service request.
///
/// Each member is expected to hold a single rank role at a time. Requesting a
/// new rank displaces one held role with a lower ordinal, except that the
/// exempt tag is always additive and the protected tag is never displaced.
#[derive(Debug, Clone, Copy)]
pub struct RoleResolver<'a> {
    catalog: &'a RoleCatalog,
}

impl<'a> RoleResolver<'a> {
    /// Create a resolver over one catalog snapshot.
    pub fn new(catalog: &'a RoleCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve a request to add `requested_name` (case-insensitive).
    #[instrument(skip(self, member), fields(held = member.roles().len()))]
    pub fn resolve_add(&self, member: &MemberSnapshot, requested_name: &str) -> RoleChangeOutcome {
        let Some(role) = self.catalog.find(requested_name) else {
            debug!("Requested role does not exist");
            return RoleChangeOutcome::NotFound;
        };

        if *role.restricted() {
            debug!(role = %role.name(), "Requested role is restricted");
            return RoleChangeOutcome::Restricted(role.clone());
        }

        if member.holds(role) {
            return RoleChangeOutcome::AlreadyHeld(role.clone());
        }

        if self.catalog.is_exempt(role) {
            debug!(role = %role.name(), "Exempt role, adding without displacement");
            return RoleChangeOutcome::Applied(RoleChange::grant(role.clone(), None, None));
        }

        let remove = self
            .displaced(member, role)
            .filter(|displaced| self.may_displace(member, role, displaced))
            .cloned();

        // Evaluated on the snapshot taken before any removal. Granting the
        // baseline alongside a request for the baseline is an idempotent add.
        let fallback = if member.assignable().next().is_none() {
            self.catalog.baseline().cloned()
        } else {
            None
        };

        debug!(
            role = %role.name(),
            displaced = ?remove.as_ref().map(|r| r.name()),
            fallback = ?fallback.as_ref().map(|r| r.name()),
            "Resolved role addition"
        );

        RoleChangeOutcome::Applied(RoleChange::grant(role.clone(), remove, fallback))
    }

    /// Resolve a request to remove `name` (exact match).
    #[instrument(skip(self, member))]
    pub fn resolve_remove(&self, member: &MemberSnapshot, name: &str) -> RoleChangeOutcome {
        let Some(role) = self.catalog.find_exact(name) else {
            return RoleChangeOutcome::NotFound;
        };

        if *role.restricted() {
            return RoleChangeOutcome::Restricted(role.clone());
        }

        if !member.holds(role) {
            return RoleChangeOutcome::NotHeld(role.clone());
        }

        RoleChangeOutcome::Applied(RoleChange::revoke(role.clone()))
    }

    /// The last held, non-restricted role whose ordinal is below the
    /// requested one, scanning in snapshot order.
    fn displaced<'m>(&self, member: &'m MemberSnapshot, requested: &Role) -> Option<&'m Role> {
        member
            .assignable()
            .filter(|held| held.precedence() < requested.precedence())
            .last()
    }

    fn may_displace(&self, member: &MemberSnapshot, requested: &Role, displaced: &Role) -> bool {
        let holds_protected = member
            .roles()
            .iter()
            .any(|held| self.catalog.is_protected(held));

        if holds_protected && !self.catalog.is_protected(requested) {
            !self.catalog.is_protected(displaced)
        } else {
            true
        }
    }
}
