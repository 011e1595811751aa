//! The seam between the briefing service and concrete weather backends.

use async_trait::async_trait;
use squawk_core::ReportKind;
use squawk_error::WeatherResult;

use crate::Station;

/// A backend that returns decoded report text for a station.
///
/// Implementations only transport and decode; interpretation happens in
/// `squawk_core`.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Whether this backend serves `kind`.
    fn supports(&self, kind: ReportKind) -> bool;

    /// Fetch the raw text for `station`.
    ///
    /// An empty string means the service had nothing for that station.
    async fn fetch(&self, station: &Station, kind: ReportKind) -> WeatherResult<String>;
}
