//! Weather service configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for every weather service the bot talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WeatherConfig {
    /// Raw-text METAR/TAF service
    #[serde(default)]
    text: TextServiceConfig,
    /// SOAP briefing service; ATIS is unavailable without it
    #[serde(default)]
    soap: Option<SoapServiceConfig>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            text: TextServiceConfig::default(),
            soap: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl WeatherConfig {
    /// Replace the SOAP service settings.
    pub fn with_soap(mut self, soap: Option<SoapServiceConfig>) -> Self {
        self.soap = soap;
        self
    }

    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_timeout_seconds() -> u64 {
    15
}

/// Raw-text report service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TextServiceConfig {
    /// Scheme and host, without trailing slash
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Path serving METAR bodies
    #[serde(default = "default_metar_path")]
    metar_path: String,
    /// Path serving TAF bodies
    #[serde(default = "default_taf_path")]
    taf_path: String,
}

impl Default for TextServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            metar_path: default_metar_path(),
            taf_path: default_taf_path(),
        }
    }
}

impl TextServiceConfig {
    /// Point the client at a different host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn default_base_url() -> String {
    "https://aviationweather.gov".to_string()
}

fn default_metar_path() -> String {
    "/api/data/metar".to_string()
}

fn default_taf_path() -> String {
    "/api/data/taf".to_string()
}

/// SOAP briefing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SoapServiceConfig {
    /// Endpoint URL receiving the envelope
    endpoint: String,
    /// Value of the `SOAPAction` header
    #[serde(default)]
    action: String,
    /// Namespace of the operation element
    #[serde(default)]
    namespace: String,
    /// Operation element name
    #[serde(default = "default_operation")]
    operation: String,
    /// Element inside the operation carrying the station identifier
    #[serde(default = "default_station_element")]
    station_element: String,
    /// Response element whose text is the briefing
    #[serde(default = "default_result_element")]
    result_element: String,
}

impl SoapServiceConfig {
    /// Settings for `endpoint` with default element names.
    pub fn new(endpoint: impl Into<String>, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let operation = default_operation();
        Self {
            endpoint: endpoint.into(),
            action: format!("{}/{}", namespace.trim_end_matches('/'), operation),
            namespace,
            operation,
            station_element: default_station_element(),
            result_element: default_result_element(),
        }
    }
}

fn default_operation() -> String {
    "GetBriefing".to_string()
}

fn default_station_element() -> String {
    "station".to_string()
}

fn default_result_element() -> String {
    "GetBriefingResult".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_text_service() {
        let config = WeatherConfig::default();
        assert_eq!(config.text().base_url(), "https://aviationweather.gov");
        assert!(config.soap().is_none());
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_soap_section_from_toml() {
        let config: WeatherConfig = toml::from_str(
            r#"
            timeout_seconds = 5

            [soap]
            endpoint = "https://briefing.example.net/service.asmx"
            namespace = "http://briefing.example.net/"
            result_element = "BriefingText"
            "#,
        )
        .unwrap();
        let soap = config.soap().as_ref().unwrap();
        assert_eq!(soap.operation(), "GetBriefing");
        assert_eq!(soap.result_element(), "BriefingText");
        assert_eq!(soap.action(), "");
        assert_eq!(*config.timeout_seconds(), 5);
    }

    #[test]
    fn test_soap_new_derives_action() {
        let soap = SoapServiceConfig::new("https://x.test/svc", "http://x.test/");
        assert_eq!(soap.action(), "http://x.test/GetBriefing");
    }
}
