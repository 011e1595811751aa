//! Report kinds and the report value handed to the interpreter.

use super::{FlightCategory, FlightConditions, classify, extract_conditions, extract_section};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Kind of aviation weather report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportKind {
    /// Routine (or special) observation.
    Metar,
    /// Terminal aerodrome forecast.
    Taf,
    /// Automatic terminal information service broadcast.
    Atis,
}

impl ReportKind {
    /// Every kind, in display order.
    pub const ALL: [ReportKind; 3] = [ReportKind::Metar, ReportKind::Taf, ReportKind::Atis];

    /// Tokens that mark a line as belonging to this kind.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            ReportKind::Metar => &["METAR", "SPECI"],
            ReportKind::Taf => &["TAF"],
            ReportKind::Atis => &["ATIS"],
        }
    }
}

/// Raw report text tagged with the kind to extract from it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct WeatherReport {
    kind: ReportKind,
    #[new(into)]
    text: String,
}

/// Everything the interpreter derives from one report.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Interpretation {
    kind: ReportKind,
    section: String,
    conditions: FlightConditions,
    category: FlightCategory,
}

impl WeatherReport {
    /// Slice out this report's section and classify it.
    ///
    /// When no line carries the kind's marker, the whole text is used, since
    /// services often return a bare report without a type prefix.
    pub fn interpret(&self) -> Interpretation {
        let section = extract_section(&self.text, self.kind);
        let section = if section.trim().is_empty() {
            self.text.trim().to_string()
        } else {
            section
        };
        let conditions = extract_conditions(&section);
        let category = classify(&conditions);

        tracing::debug!(
            kind = %self.kind,
            %category,
            visibility_m = ?conditions.visibility_meters(),
            ceiling_ft = ?conditions.ceiling_feet(),
            "Interpreted weather report"
        );

        Interpretation {
            kind: self.kind,
            section,
            conditions,
            category,
        }
    }
}
