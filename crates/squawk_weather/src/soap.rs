//! SOAP briefing client.
//!
//! The service wraps a combined text briefing (ATIS plus surrounding reports)
//! in a SOAP 1.1 envelope. Only the text of the result element matters.

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use squawk_core::ReportKind;
use squawk_error::{WeatherError, WeatherErrorKind, WeatherResult};
use tracing::{debug, error, instrument};

use crate::{ReportSource, SoapServiceConfig, Station};

/// Build the request envelope for `station`.
pub fn build_envelope(config: &SoapServiceConfig, station: &Station) -> String {
    let operation = config.operation();
    let element = config.station_element();
    let namespace = if config.namespace().is_empty() {
        String::new()
    } else {
        format!(r#" xmlns="{}""#, escape(config.namespace()))
    };

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <{operation}{namespace}>
      <{element}>{station}</{element}>
    </{operation}>
  </soap:Body>
</soap:Envelope>"#,
        station = escape(station.as_str()),
    )
}

/// Text content of the first element named `element` (local name, any
/// prefix), with entities unescaped and CDATA included.
pub fn extract_result(xml: &str, element: &str) -> WeatherResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut inside = false;
    let mut depth = 0usize;
    let mut text = String::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            WeatherError::new(WeatherErrorKind::Xml(format!(
                "at position {}: {e}",
                reader.buffer_position()
            )))
        })?;

        match event {
            Event::Start(start) if !inside => {
                if start.local_name().as_ref() == element.as_bytes() {
                    inside = true;
                }
            }
            Event::Empty(start) if !inside => {
                if start.local_name().as_ref() == element.as_bytes() {
                    return Ok(String::new());
                }
            }
            Event::Start(_) => depth += 1,
            Event::End(_) if inside => {
                if depth == 0 {
                    return Ok(text);
                }
                depth -= 1;
            }
            Event::Text(content) if inside => {
                let unescaped = content
                    .unescape()
                    .map_err(|e| WeatherError::new(WeatherErrorKind::Xml(e.to_string())))?;
                text.push_str(&unescaped);
            }
            Event::CData(content) if inside => {
                text.push_str(&String::from_utf8_lossy(&content.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Err(WeatherError::new(WeatherErrorKind::MissingElement(
        element.to_string(),
    )))
}

/// Client for the SOAP briefing service.
#[derive(Debug, Clone)]
pub struct SoapBriefingClient {
    client: reqwest::Client,
    config: SoapServiceConfig,
}

impl SoapBriefingClient {
    /// Create a client sharing an existing connection pool.
    pub fn new(client: reqwest::Client, config: SoapServiceConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ReportSource for SoapBriefingClient {
    fn name(&self) -> &str {
        "soap"
    }

    fn supports(&self, kind: ReportKind) -> bool {
        matches!(kind, ReportKind::Atis)
    }

    #[instrument(
        skip_all,
        fields(source = "soap", %station, %kind, endpoint = %self.config.endpoint())
    )]
    async fn fetch(&self, station: &Station, kind: ReportKind) -> WeatherResult<String> {
        let envelope = build_envelope(&self.config, station);
        debug!(bytes = envelope.len(), "Posting SOAP envelope");

        let response = self
            .client
            .post(self.config.endpoint())
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{}\"", self.config.action()))
            .body(envelope)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "SOAP request failed");
                WeatherError::new(WeatherErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::new(WeatherErrorKind::Http(e.to_string())))?;

        if !status.is_success() {
            return Err(WeatherError::new(WeatherErrorKind::Status {
                status: status.as_u16(),
                body,
            }));
        }

        let briefing = extract_result(&body, self.config.result_element())?;
        debug!(bytes = briefing.len(), "Decoded SOAP briefing");
        Ok(briefing.trim().to_string())
    }
}
