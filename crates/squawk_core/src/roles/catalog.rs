//! Role snapshots and the server's role catalog.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Name of the implicit role every member holds.
pub const EVERYONE_ROLE: &str = "@everyone";

/// A named permission group, snapshotted from the platform for one command.
///
/// `precedence` is the ordinal supplied by the platform's role ordering.
/// The resolver only ever compares two ordinals with `<`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_new::new)]
pub struct Role {
    id: u64,
    #[new(into)]
    name: String,
    precedence: i64,
    restricted: bool,
}

/// Server-configured names that shape the self-service flow.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct RolePolicy {
    /// Names that may never be granted or revoked. `@everyone` is always implied.
    #[serde(default)]
    restricted: Vec<String>,
    /// Multi-holdable tag added without displacing anything.
    #[serde(default = "default_exempt")]
    exempt: Option<String>,
    /// Tag that is never removed by displacement once held.
    #[serde(default = "default_protected")]
    protected: Option<String>,
    /// Role granted when a member holds no assignable roles.
    #[serde(default = "default_baseline")]
    baseline: Option<String>,
}

fn default_exempt() -> Option<String> {
    Some("ATC".to_string())
}

fn default_protected() -> Option<String> {
    Some("RPC".to_string())
}

fn default_baseline() -> Option<String> {
    Some("Member".to_string())
}

impl Default for RolePolicy {
    fn default() -> Self {
        Self {
            restricted: Vec::new(),
            exempt: default_exempt(),
            protected: default_protected(),
            baseline: default_baseline(),
        }
    }
}

impl RolePolicy {
    /// Whether `name` is restricted. Comparison is exact, as configured.
    pub fn is_restricted(&self, name: &str) -> bool {
        name == EVERYONE_ROLE || self.restricted.iter().any(|r| r == name)
    }
}

/// Every role on the server, ordered by ascending precedence, plus the policy
/// that applies to them.
#[derive(Debug, Clone, Getters)]
pub struct RoleCatalog {
    roles: Vec<Role>,
    policy: RolePolicy,
}

impl RoleCatalog {
    /// Build a catalog from `(id, name, precedence)` entries.
    ///
    /// The `restricted` flag of each role is derived from `policy`.
    pub fn new<I, S>(entries: I, policy: RolePolicy) -> Self
    where
        I: IntoIterator<Item = (u64, S, i64)>,
        S: Into<String>,
    {
        let mut roles: Vec<Role> = entries
            .into_iter()
            .map(|(id, name, precedence)| {
                let name = name.into();
                let restricted = policy.is_restricted(&name);
                Role::new(id, name, precedence, restricted)
            })
            .collect();
        roles.sort_by_key(|role| (role.precedence, role.id));

        Self { roles, policy }
    }

    /// Case-insensitive lookup. When several roles share a lowercased name the
    /// one latest in catalog order wins.
    pub fn find(&self, name: &str) -> Option<&Role> {
        let wanted = name.to_lowercase();
        self.roles
            .iter()
            .rev()
            .find(|role| role.name.to_lowercase() == wanted)
    }

    /// Exact-name lookup, first match in catalog order.
    pub fn find_exact(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.name == name)
    }

    /// Look a role up by platform ID.
    pub fn get(&self, id: u64) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    /// The implicit `@everyone` role, if the platform listed it.
    pub fn everyone(&self) -> Option<&Role> {
        self.find_exact(EVERYONE_ROLE)
    }

    /// Roles a member may pick themselves, in catalog order.
    pub fn selectable(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter().filter(|role| !role.restricted)
    }

    /// The configured baseline role, if it exists on the server.
    pub fn baseline(&self) -> Option<&Role> {
        self.policy.baseline.as_deref().and_then(|name| self.find_exact(name))
    }

    /// Whether `role` is the exempt, multi-holdable tag.
    pub fn is_exempt(&self, role: &Role) -> bool {
        self.policy.exempt.as_deref() == Some(role.name.as_str())
    }

    /// Whether `role` is the protected senior tag.
    pub fn is_protected(&self, role: &Role) -> bool {
        self.policy.protected.as_deref() == Some(role.name.as_str())
    }
}
