//! Flight category classification.

use super::{FlightConditions, METERS_PER_STATUTE_MILE};
use serde::{Deserialize, Serialize};

/// Standard flight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum FlightCategory {
    /// Visual flight rules.
    #[strum(serialize = "VFR")]
    Vfr,
    /// Marginal visual flight rules.
    #[strum(serialize = "MVFR")]
    Mvfr,
    /// Instrument flight rules.
    #[strum(serialize = "IFR")]
    Ifr,
    /// Low instrument flight rules.
    #[strum(serialize = "LIFR")]
    Lifr,
    /// Visibility or ceiling was not reported.
    Unknown,
}

impl FlightCategory {
    /// Display color as `0xRRGGBB`.
    pub fn colour(self) -> u32 {
        match self {
            FlightCategory::Vfr => 0x2ECC71,
            FlightCategory::Mvfr => 0x3498DB,
            FlightCategory::Ifr => 0xE74C3C,
            FlightCategory::Lifr => 0xE91E63,
            FlightCategory::Unknown => 0x95A5A6,
        }
    }
}

/// Minimum visibility (statute miles) and ceiling (feet), first match wins.
const THRESHOLDS: [(f64, u32, FlightCategory); 3] = [
    (5.0, 3000, FlightCategory::Vfr),
    (3.0, 1000, FlightCategory::Mvfr),
    (1.0, 500, FlightCategory::Ifr),
];

/// Classify extracted conditions.
pub fn classify(conditions: &FlightConditions) -> FlightCategory {
    let (Some(visibility_m), Some(ceiling_ft)) =
        (*conditions.visibility_meters(), *conditions.ceiling_feet())
    else {
        return FlightCategory::Unknown;
    };

    // Compared in meters so that N * METERS_PER_STATUTE_MILE lands exactly on
    // the N-mile boundary.
    THRESHOLDS
        .iter()
        .find(|(miles, feet, _)| {
            visibility_m >= miles * METERS_PER_STATUTE_MILE && ceiling_ft >= *feet
        })
        .map(|(_, _, category)| *category)
        .unwrap_or(FlightCategory::Lifr)
}
