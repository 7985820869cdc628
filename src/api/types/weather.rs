//! Weather response types

use serde::{Deserialize, Serialize};

use crate::domain::{WeatherData, WeatherReport};

/// Successful weather response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub status: String,
    pub from_cache: bool,
    pub data: WeatherData,
}

impl WeatherResponse {
    /// Create a response from a domain report
    pub fn from_report(report: WeatherReport) -> Self {
        Self {
            status: "success".to_string(),
            from_cache: report.from_cache,
            data: report.data,
        }
    }
}
