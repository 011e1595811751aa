//! Raw-text METAR/TAF client.

use async_trait::async_trait;
use squawk_core::ReportKind;
use squawk_error::{WeatherError, WeatherErrorKind, WeatherResult};
use tracing::{debug, error, instrument};

use crate::{ReportSource, Station, TextServiceConfig};

/// Client for a service answering `GET <path>?ids=<station>&format=raw` with
/// plain report text.
#[derive(Debug, Clone)]
pub struct TextReportClient {
    client: reqwest::Client,
    config: TextServiceConfig,
}

impl TextReportClient {
    /// Create a client sharing an existing connection pool.
    pub fn new(client: reqwest::Client, config: TextServiceConfig) -> Self {
        Self { client, config }
    }

    /// Endpoint URL for `kind`, or `None` for kinds this service does not serve.
    pub fn endpoint(&self, kind: ReportKind) -> Option<String> {
        let path = match kind {
            ReportKind::Metar => self.config.metar_path(),
            ReportKind::Taf => self.config.taf_path(),
            ReportKind::Atis => return None,
        };
        Some(format!(
            "{}{}",
            self.config.base_url().trim_end_matches('/'),
            path
        ))
    }
}

#[async_trait]
impl ReportSource for TextReportClient {
    fn name(&self) -> &str {
        "text"
    }

    fn supports(&self, kind: ReportKind) -> bool {
        self.endpoint(kind).is_some()
    }

    #[instrument(skip_all, fields(source = "text", %station, %kind))]
    async fn fetch(&self, station: &Station, kind: ReportKind) -> WeatherResult<String> {
        let url = self.endpoint(kind).ok_or_else(|| {
            WeatherError::new(WeatherErrorKind::NotConfigured(format!(
                "text service does not serve {kind}"
            )))
        })?;

        debug!(%url, "Requesting report text");

        let response = self
            .client
            .get(&url)
            .query(&[("ids", station.as_str()), ("format", "raw")])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Weather request failed");
                WeatherError::new(WeatherErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::new(WeatherErrorKind::Status {
                status: status.as_u16(),
                body,
            }));
        }

        let text = response
            .text()
            .await
            .map_err(|e| WeatherError::new(WeatherErrorKind::Http(e.to_string())))?;

        debug!(bytes = text.len(), "Received report text");
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let client = TextReportClient::new(
            reqwest::Client::new(),
            TextServiceConfig::default().with_base_url("https://wx.example.org/"),
        );
        assert_eq!(
            client.endpoint(ReportKind::Metar).as_deref(),
            Some("https://wx.example.org/api/data/metar")
        );
        assert_eq!(
            client.endpoint(ReportKind::Taf).as_deref(),
            Some("https://wx.example.org/api/data/taf")
        );
        assert!(client.endpoint(ReportKind::Atis).is_none());
        assert!(!client.supports(ReportKind::Atis));
    }
}
