use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;
use crate::domain::forecast::payload::ForecastPayload;
use crate::domain::forecast::request::CityName;

#[cfg(test)]
use mockall::automock;

/// Geocoded location for a requested city.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Result of one upstream fetch: where the city resolved to, the
/// schema-checked forecast payload, and when it was retrieved.
#[derive(Debug, Clone)]
pub struct FetchedForecast {
    pub location: Location,
    pub payload: ForecastPayload,
    pub fetched_at: DateTime<Utc>,
}

/// Source of raw forecasts, keyed by city.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Geocodes the city and fetches its forecast.
    async fn fetch(&self, city: &CityName) -> Result<FetchedForecast, DomainError>;
}
