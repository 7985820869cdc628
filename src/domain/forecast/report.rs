use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::forecast::provider::FetchedForecast;
use crate::domain::forecast::summary::ForecastSummary;

/// The weather view served to clients; also the value stored in the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub forecast_summary: ForecastSummary,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherData {
    pub fn new(fetched: FetchedForecast, summary: ForecastSummary) -> Self {
        Self {
            city: fetched.location.city,
            state: fetched.location.state,
            latitude: fetched.location.latitude,
            longitude: fetched.location.longitude,
            timezone: fetched.payload.timezone,
            forecast_summary: summary,
            fetched_at: fetched.fetched_at,
        }
    }
}

/// Service-level result: the data plus whether it was served from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub from_cache: bool,
    pub data: WeatherData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::payload::{DailyForecast, ForecastPayload};
    use crate::domain::forecast::provider::Location;

    #[test]
    fn test_weather_data_from_fetched_forecast() {
        let fetched = FetchedForecast {
            location: Location {
                city: "Houston".to_string(),
                state: "Texas".to_string(),
                latitude: 29.76,
                longitude: -95.36,
            },
            payload: ForecastPayload {
                timezone: "America/Chicago".to_string(),
                daily: DailyForecast {
                    time: vec!["2026-08-20".to_string()],
                    temperature_2m_max: vec![85.0],
                    temperature_2m_min: vec![70.0],
                    precipitation_sum: vec![0.0],
                    wind_speed_10m_max: vec![10.0],
                },
            },
            fetched_at: Utc::now(),
        };
        let summary = ForecastSummary::from_daily(&fetched.payload.daily).unwrap();

        let data = WeatherData::new(fetched, summary);

        assert_eq!(data.city, "Houston");
        assert_eq!(data.state, "Texas");
        assert_eq!(data.timezone, "America/Chicago");
        assert_eq!(data.forecast_summary.days, 1);

        // Cached as JSON, so it must survive a round trip.
        let json = serde_json::to_string(&data).unwrap();
        let parsed: WeatherData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }
}
