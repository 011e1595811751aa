//! Weather report retrieval for squawk.
//!
//! Reports come from two kinds of services:
//! - a raw-text HTTP API serving METAR and TAF bodies ([`TextReportClient`])
//! - a SOAP service returning a combined briefing inside an XML envelope
//!   ([`SoapBriefingClient`])
//!
//! [`WeatherService`] routes each [`ReportKind`](squawk_core::ReportKind) to a
//! [`ReportSource`] and hands the decoded text to the interpreter in
//! `squawk_core`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod service;
mod soap;
mod source;
mod station;
mod text;

pub use config::{SoapServiceConfig, TextServiceConfig, WeatherConfig};
pub use service::{Briefing, WeatherService};
pub use soap::{SoapBriefingClient, build_envelope, extract_result};
pub use source::ReportSource;
pub use station::Station;
pub use text::TextReportClient;
