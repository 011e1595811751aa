//! Weather service error types.

/// Error kinds raised while fetching or decoding weather reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum WeatherErrorKind {
    /// Transport failure talking to a weather service.
    #[display("HTTP error: {_0}")]
    Http(String),
    /// Service answered with a non-success status.
    #[display("Weather service returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },
    /// SOAP response could not be parsed.
    #[display("XML error: {_0}")]
    Xml(String),
    /// SOAP response did not contain the expected result element.
    #[display("Missing element in SOAP response: {_0}")]
    MissingElement(String),
    /// The service needed for this report kind is not configured.
    #[display("Weather service not configured: {_0}")]
    NotConfigured(String),
    /// Station identifier is not a 3-4 character alphanumeric code.
    #[display("Invalid station identifier: {_0}")]
    InvalidStation(String),
}

/// Weather error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Weather Error: {} at line {} in {}", kind, line, file)]
pub struct WeatherError {
    kind: WeatherErrorKind,
    line: u32,
    file: &'static str,
}

impl WeatherError {
    /// Create a new weather error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WeatherErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WeatherErrorKind {
        &self.kind
    }
}

impl From<WeatherErrorKind> for WeatherError {
    #[track_caller]
    fn from(kind: WeatherErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for weather operations.
pub type WeatherResult<T> = Result<T, WeatherError>;
