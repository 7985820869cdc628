//! Weather Webhook API
//!
//! A small HTTP service that geocodes a city, fetches its 7-day forecast
//! from Open-Meteo, and serves a cached summary:
//! - TTL response cache with lazy expiry
//! - Retrying upstream client with exponential backoff
//! - One-shot CLI lookup alongside the server

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::cache::InMemoryCache;
use infrastructure::http::{RetryPolicy, RetryingHttpClient};
use infrastructure::services::ForecastService;
use infrastructure::upstream::OpenMeteoClient;
use tracing::info;

/// Create the application state with all services initialized
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let policy = RetryPolicy::new(
        config.upstream.max_attempts,
        config.upstream.retry_initial_delay(),
        config.upstream.retry_max_delay(),
    );
    let http_client = RetryingHttpClient::new(config.upstream.request_timeout(), policy)?;

    let provider = OpenMeteoClient::with_base_urls(
        http_client,
        &config.upstream.forecast_base_url,
        &config.upstream.geocoding_base_url,
    );

    let cache = InMemoryCache::with_ttl(config.weather.cache_ttl());

    let weather_service = ForecastService::new(
        Arc::new(provider),
        Arc::new(cache),
        config.weather.cache_ttl(),
    );

    info!(
        forecast_base_url = %config.upstream.forecast_base_url,
        geocoding_base_url = %config.upstream.geocoding_base_url,
        cache_ttl_seconds = config.weather.cache_ttl_seconds,
        "Initialized weather service"
    );

    Ok(AppState::new(
        Arc::new(weather_service),
        config.weather.default_city.clone(),
        config.server.environment.clone(),
    ))
}
