//! Open-Meteo API client - geocoding plus daily forecast

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::domain::forecast::{
    CityName, FetchedForecast, ForecastPayload, ForecastProvider, GeocodingResponse, Location,
};
use crate::domain::DomainError;
use crate::infrastructure::http::HttpClientTrait;

pub const DEFAULT_FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1";
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";

const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max";

/// Client for the Open-Meteo geocoding and forecast APIs.
#[derive(Debug)]
pub struct OpenMeteoClient<C: HttpClientTrait> {
    http: C,
    forecast_base_url: String,
    geocoding_base_url: String,
}

impl<C: HttpClientTrait> OpenMeteoClient<C> {
    pub fn new(http: C) -> Self {
        Self::with_base_urls(http, DEFAULT_FORECAST_BASE_URL, DEFAULT_GEOCODING_BASE_URL)
    }

    /// Overrides the API endpoints, for configuration and tests.
    pub fn with_base_urls(
        http: C,
        forecast_base_url: impl Into<String>,
        geocoding_base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            forecast_base_url: forecast_base_url.into().trim_end_matches('/').to_string(),
            geocoding_base_url: geocoding_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn search_geocoding(&self, name: &str) -> Result<GeocodingResponse, DomainError> {
        let url = format!("{}/search", self.geocoding_base_url);
        let query = [
            ("name", name.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];

        let value = self.http.get_json(&url, &query).await?;
        serde_json::from_value(value)
            .map_err(|e| DomainError::validation(format!("Unexpected geocoding payload: {}", e)))
    }

    async fn geocode(&self, city: &CityName) -> Result<Location, DomainError> {
        let mut response = self.search_geocoding(city.as_str()).await?;

        // "Houston, Texas" often geocodes only as "Houston".
        if response.results.is_empty() {
            if let Some((prefix, _)) = city.as_str().split_once(',') {
                let city_only = prefix.trim();
                if !city_only.is_empty() {
                    info!(
                        city = %city,
                        fallback = %city_only,
                        "No geocoding results, retrying with city prefix"
                    );
                    response = self.search_geocoding(city_only).await?;
                }
            }
        }

        let result = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::city_not_found(city.as_str()))?;

        Ok(Location {
            city: result.name,
            state: result.admin1,
            latitude: result.latitude,
            longitude: result.longitude,
        })
    }

    async fn fetch_forecast(&self, location: &Location) -> Result<ForecastPayload, DomainError> {
        let url = format!("{}/forecast", self.forecast_base_url);
        let query = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("temperature_unit", "fahrenheit".to_string()),
            ("wind_speed_unit", "mph".to_string()),
            ("precipitation_unit", "inch".to_string()),
            ("timezone", "auto".to_string()),
        ];

        let value = self.http.get_json(&url, &query).await?;
        serde_json::from_value(value)
            .map_err(|e| DomainError::validation(format!("Unexpected forecast payload: {}", e)))
    }
}

#[async_trait]
impl<C: HttpClientTrait> ForecastProvider for OpenMeteoClient<C> {
    async fn fetch(&self, city: &CityName) -> Result<FetchedForecast, DomainError> {
        debug!(city = %city, "Geocoding city");
        let location = self.geocode(city).await?;

        debug!(
            city = %location.city,
            latitude = location.latitude,
            longitude = location.longitude,
            "Fetching forecast"
        );
        let payload = self.fetch_forecast(&location).await?;

        info!(
            city = %location.city,
            state = %location.state,
            days = payload.daily.time.len(),
            "Fetched forecast from Open-Meteo"
        );

        Ok(FetchedForecast {
            location,
            payload,
            fetched_at: Utc::now(),
        })
    }
}
