//! Self-service role ladder.

mod catalog;
mod member;
mod outcome;
mod resolver;

pub use catalog::{EVERYONE_ROLE, Role, RoleCatalog, RolePolicy};
pub use member::MemberSnapshot;
pub use outcome::{RoleChange, RoleChangeOutcome};
pub use resolver::RoleResolver;
