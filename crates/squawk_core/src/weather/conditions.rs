//! Visibility and ceiling extraction.

use derive_getters::Getters;
use regex::Regex;
use std::sync::LazyLock;

/// Meters in one statute mile.
pub const METERS_PER_STATUTE_MILE: f64 = 1609.34;

/// Four digits, optionally in statute miles, not part of a longer number, a
/// `ddhh/ddhh` validity period, a `ddhhmmZ` time or a letter-prefixed group
/// such as `Q1011`.
static VISIBILITY_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9A-Z/])(\d{4})(SM)?(?:[^0-9/Z]|$)").expect("valid visibility pattern")
});

/// Cloud layer code followed by exactly three digits of altitude in hundreds of feet.
static CLOUD_LAYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(BKN|OVC|SCT|FEW)(\d{3})(?:\D|$)").expect("valid cloud layer pattern")
});

/// The two fields the flight category depends on. `None` means not reported.
#[derive(Debug, Clone, Copy, PartialEq, Default, Getters, derive_new::new)]
pub struct FlightConditions {
    visibility_meters: Option<f64>,
    ceiling_feet: Option<u32>,
}

impl FlightConditions {
    /// Visibility converted to statute miles.
    pub fn visibility_statute_miles(&self) -> Option<f64> {
        self.visibility_meters
            .map(|meters| meters / METERS_PER_STATUTE_MILE)
    }
}

/// Pull visibility and ceiling out of free report text.
///
/// Visibility is the first four-digit group, read as meters, or as statute
/// miles when suffixed with `SM`. Ceiling is the lowest `BKN`/`OVC`/`SCT`/`FEW`
/// layer in the text.
pub fn extract_conditions(report_text: &str) -> FlightConditions {
    let visibility_meters = VISIBILITY_GROUP
        .captures(report_text)
        .and_then(|caps| {
            let value: f64 = caps.get(1)?.as_str().parse().ok()?;
            Some(if caps.get(2).is_some() {
                value * METERS_PER_STATUTE_MILE
            } else {
                value
            })
        });

    // FEW and SCT layers count toward the minimum along with BKN and OVC.
    let ceiling_feet = CLOUD_LAYER
        .captures_iter(report_text)
        .filter_map(|caps| caps.get(2)?.as_str().parse::<u32>().ok())
        .min()
        .map(|hundreds| hundreds * 100);

    FlightConditions {
        visibility_meters,
        ceiling_feet,
    }
}
