//! Decision logic for the squawk community bot.
//!
//! Two stateless components live here:
//!
//! - [`RoleResolver`] decides which rank role a member ends up holding after a
//!   self-service role change.
//! - The weather interpreter ([`extract_conditions`], [`classify`],
//!   [`extract_section`]) turns raw METAR/TAF/ATIS text into a flight category.
//!
//! Nothing in this crate performs I/O. Callers fetch snapshots and report text,
//! hand them in by value or reference, and render the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod roles;
mod weather;

pub use roles::{
    EVERYONE_ROLE, MemberSnapshot, Role, RoleCatalog, RoleChange, RoleChangeOutcome, RolePolicy,
    RoleResolver,
};
pub use weather::{
    FlightCategory, FlightConditions, Interpretation, METERS_PER_STATUTE_MILE, ReportKind,
    WeatherReport, classify, extract_conditions, extract_section,
};
