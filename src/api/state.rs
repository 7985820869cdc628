//! Application state for shared services

use std::sync::Arc;

use crate::domain::{CityName, DomainError, WeatherReport};
use crate::infrastructure::services::ForecastService;

#[cfg(test)]
use mockall::automock;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<dyn WeatherServiceTrait>,
    pub default_city: String,
    pub environment: String,
}

/// Trait for weather lookups served by the API
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait WeatherServiceTrait: Send + Sync {
    async fn get_weather(&self, city: &CityName) -> Result<WeatherReport, DomainError>;
}

#[async_trait::async_trait]
impl WeatherServiceTrait for ForecastService {
    async fn get_weather(&self, city: &CityName) -> Result<WeatherReport, DomainError> {
        ForecastService::get_weather(self, city).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        weather_service: Arc<dyn WeatherServiceTrait>,
        default_city: String,
        environment: String,
    ) -> Self {
        Self {
            weather_service,
            default_city,
            environment,
        }
    }
}
