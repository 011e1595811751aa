//! Aviation weather interpretation.

mod category;
mod conditions;
mod report;
mod section;

pub use category::{FlightCategory, classify};
pub use conditions::{FlightConditions, METERS_PER_STATUTE_MILE, extract_conditions};
pub use report::{Interpretation, ReportKind, WeatherReport};
pub use section::extract_section;
