//! Station identifiers.

use squawk_error::{WeatherError, WeatherErrorKind, WeatherResult};

/// A validated, upper-cased ICAO/IATA station identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station(String);

impl Station {
    /// Parse user input. Accepts 3 or 4 ASCII alphanumerics.
    pub fn parse(input: &str) -> WeatherResult<Self> {
        let trimmed = input.trim();
        let valid = (3..=4).contains(&trimmed.len())
            && trimmed.chars().all(|c| c.is_ascii_alphanumeric());

        if !valid {
            return Err(WeatherError::new(WeatherErrorKind::InvalidStation(
                trimmed.to_string(),
            )));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
