//! Routes report requests to a backend and interprets the result.

use derive_getters::Getters;
use squawk_core::{Interpretation, ReportKind, WeatherReport};
use squawk_error::{WeatherError, WeatherErrorKind, WeatherResult};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{ReportSource, SoapBriefingClient, Station, TextReportClient, WeatherConfig};

/// An interpreted report for one station.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Briefing {
    station: Station,
    interpretation: Interpretation,
}

impl Briefing {
    /// Pair an interpretation with the station it describes.
    pub fn new(station: Station, interpretation: Interpretation) -> Self {
        Self {
            station,
            interpretation,
        }
    }
}

/// Fetches reports and runs them through the interpreter.
#[derive(Clone)]
pub struct WeatherService {
    sources: Vec<Arc<dyn ReportSource>>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("WeatherService")
            .field("sources", &names)
            .finish()
    }
}

impl WeatherService {
    /// Service over explicit sources. Earlier sources win for a kind.
    pub fn new(sources: Vec<Arc<dyn ReportSource>>) -> Self {
        Self { sources }
    }

    /// Build the text client and, when configured, the SOAP client on one
    /// shared connection pool.
    #[instrument(skip_all)]
    pub fn from_config(config: &WeatherConfig) -> WeatherResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("squawk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherError::new(WeatherErrorKind::Http(e.to_string())))?;

        let mut sources: Vec<Arc<dyn ReportSource>> = Vec::new();
        sources.push(Arc::new(TextReportClient::new(
            client.clone(),
            config.text().clone(),
        )));

        match config.soap() {
            Some(soap) => {
                info!(endpoint = %soap.endpoint(), "SOAP briefing service enabled");
                sources.push(Arc::new(SoapBriefingClient::new(client, soap.clone())));
            }
            None => warn!("No SOAP briefing service configured, ATIS unavailable"),
        }

        Ok(Self::new(sources))
    }

    /// Whether any backend serves `kind`.
    pub fn supports(&self, kind: ReportKind) -> bool {
        self.source_for(kind).is_some()
    }

    fn source_for(&self, kind: ReportKind) -> Option<&Arc<dyn ReportSource>> {
        self.sources.iter().find(|source| source.supports(kind))
    }

    /// Fetch, slice and classify the `kind` report for `station`.
    #[instrument(skip_all, fields(%station, %kind))]
    pub async fn briefing(&self, station: &Station, kind: ReportKind) -> WeatherResult<Briefing> {
        let source = self.source_for(kind).ok_or_else(|| {
            WeatherError::new(WeatherErrorKind::NotConfigured(format!(
                "no service provides {kind}"
            )))
        })?;

        let text = source.fetch(station, kind).await?;
        let interpretation = WeatherReport::new(kind, text).interpret();

        info!(
            source = source.name(),
            category = %interpretation.category(),
            "Briefing ready"
        );

        Ok(Briefing::new(station.clone(), interpretation))
    }
}
