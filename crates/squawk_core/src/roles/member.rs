//! The invoking member's role set.

use super::{Role, RoleCatalog, RoleChange};

/// Roles currently held by one member, in ascending precedence order.
///
/// Built with [`MemberSnapshot::from_role_ids`], the snapshot always carries
/// the implicit `@everyone` role when the catalog knows it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberSnapshot {
    roles: Vec<Role>,
}

impl MemberSnapshot {
    /// Snapshot from already-resolved roles.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut roles: Vec<Role> = roles.into_iter().collect();
        roles.sort_by_key(|role| (*role.precedence(), *role.id()));
        roles.dedup_by_key(|role| *role.id());
        Self { roles }
    }

    /// Snapshot from the platform's role IDs. Unknown IDs are skipped.
    pub fn from_role_ids(catalog: &RoleCatalog, ids: impl IntoIterator<Item = u64>) -> Self {
        let held = ids.into_iter().filter_map(|id| catalog.get(id)).cloned();
        Self::new(catalog.everyone().cloned().into_iter().chain(held))
    }

    /// Held roles, in ascending precedence order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Whether the member holds `role`.
    pub fn holds(&self, role: &Role) -> bool {
        self.roles.iter().any(|held| held.id() == role.id())
    }

    /// Whether the member holds a role named exactly `name`.
    pub fn holds_named(&self, name: &str) -> bool {
        self.roles.iter().any(|held| held.name() == name)
    }

    /// Held roles the self-service flow is allowed to touch.
    pub fn assignable(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter().filter(|role| !role.restricted())
    }

    /// The membership that results from applying `change`.
    pub fn apply(&self, change: &RoleChange) -> Self {
        let removed = change.remove().as_ref().map(|role| *role.id());
        let kept = self
            .roles
            .iter()
            .filter(|role| Some(*role.id()) != removed)
            .cloned();
        let added = change
            .fallback()
            .iter()
            .chain(change.add().iter())
            .cloned();
        Self::new(kept.chain(added))
    }
}
