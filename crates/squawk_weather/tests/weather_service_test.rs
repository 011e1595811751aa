//! Tests for report routing and interpretation, using in-memory sources.

use async_trait::async_trait;
use squawk_core::{FlightCategory, ReportKind};
use squawk_error::{WeatherError, WeatherErrorKind, WeatherResult};
use squawk_weather::{ReportSource, Station, WeatherConfig, WeatherService};
use std::collections::HashMap;
use std::sync::Arc;

/// Mock source serving canned text per kind
struct MockSource {
    name: &'static str,
    reports: HashMap<ReportKind, String>,
}

impl MockSource {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            reports: HashMap::new(),
        }
    }

    fn with(mut self, kind: ReportKind, text: &str) -> Self {
        self.reports.insert(kind, text.to_string());
        self
    }
}

#[async_trait]
impl ReportSource for MockSource {
    fn name(&self) -> &str {
        self.name
    }

    fn supports(&self, kind: ReportKind) -> bool {
        self.reports.contains_key(&kind)
    }

    async fn fetch(&self, station: &Station, kind: ReportKind) -> WeatherResult<String> {
        self.reports
            .get(&kind)
            .map(|text| text.replace("{STATION}", station.as_str()))
            .ok_or_else(|| WeatherError::new(WeatherErrorKind::NotConfigured(kind.to_string())))
    }
}

/// Source that always fails
struct FailingSource;

#[async_trait]
impl ReportSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn supports(&self, _kind: ReportKind) -> bool {
        true
    }

    async fn fetch(&self, _station: &Station, _kind: ReportKind) -> WeatherResult<String> {
        Err(WeatherError::new(WeatherErrorKind::Status {
            status: 503,
            body: String::new(),
        }))
    }
}

fn service(sources: Vec<Arc<dyn ReportSource>>) -> WeatherService {
    WeatherService::new(sources)
}

fn station() -> Station {
    Station::parse("kbos").unwrap()
}

#[tokio::test]
async fn test_metar_briefing_is_classified() {
    let source = MockSource::new("text").with(
        ReportKind::Metar,
        "METAR {STATION} 121854Z 04015KT 0002SM BR OVC007 09/08 A2990",
    );
    let service = service(vec![Arc::new(source) as Arc<dyn ReportSource>]);

    let briefing = service
        .briefing(&station(), ReportKind::Metar)
        .await
        .unwrap();

    assert_eq!(briefing.station().as_str(), "KBOS");
    assert!(briefing.interpretation().section().contains("METAR KBOS"));
    assert_eq!(*briefing.interpretation().category(), FlightCategory::Ifr);
}

#[tokio::test]
async fn test_atis_section_sliced_from_combined_briefing() {
    let soap = MockSource::new("soap").with(
        ReportKind::Atis,
        "METAR {STATION} 121854Z 9999 BKN030\nATIS {STATION} INFO C\nRWY 04R IN USE\nTAF {STATION} 1218/1324 9999 SCT040",
    );
    let service = service(vec![Arc::new(soap) as Arc<dyn ReportSource>]);

    let briefing = service.briefing(&station(), ReportKind::Atis).await.unwrap();

    assert_eq!(
        briefing.interpretation().section(),
        "ATIS KBOS INFO C\nRWY 04R IN USE"
    );
    assert_eq!(*briefing.interpretation().category(), FlightCategory::Unknown);
}

#[tokio::test]
async fn test_empty_report_is_unknown_not_error() {
    let source = MockSource::new("text").with(ReportKind::Taf, "");
    let service = service(vec![Arc::new(source) as Arc<dyn ReportSource>]);

    let briefing = service.briefing(&station(), ReportKind::Taf).await.unwrap();

    assert_eq!(briefing.interpretation().section(), "");
    assert_eq!(*briefing.interpretation().category(), FlightCategory::Unknown);
}

#[tokio::test]
async fn test_unserved_kind_is_not_configured() {
    let source = MockSource::new("text").with(ReportKind::Metar, "METAR");
    let service = service(vec![Arc::new(source) as Arc<dyn ReportSource>]);

    assert!(!service.supports(ReportKind::Atis));
    let err = service
        .briefing(&station(), ReportKind::Atis)
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), WeatherErrorKind::NotConfigured(_)));
}

#[tokio::test]
async fn test_first_matching_source_wins() {
    let service = service(vec![
        Arc::new(FailingSource) as Arc<dyn ReportSource>,
        Arc::new(MockSource::new("text").with(ReportKind::Metar, "METAR 9999 FEW050"))
            as Arc<dyn ReportSource>,
    ]);

    let err = service
        .briefing(&station(), ReportKind::Metar)
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        WeatherErrorKind::Status { status: 503, .. }
    ));
}

#[test]
fn test_from_config_without_soap_has_no_atis() {
    let service = WeatherService::from_config(&WeatherConfig::default()).unwrap();
    assert!(service.supports(ReportKind::Metar));
    assert!(service.supports(ReportKind::Taf));
    assert!(!service.supports(ReportKind::Atis));
}
