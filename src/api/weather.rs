//! Weather endpoint handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, WeatherResponse};
use crate::domain::CityName;

/// Query parameters for GET /weather
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

/// GET /weather
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let raw_city = query.city.unwrap_or_else(|| state.default_city.clone());

    let city = CityName::parse(&raw_city).map_err(|e| {
        warn!(
            request_id = %request_id,
            city = %raw_city,
            error = %e,
            "Rejected weather request"
        );
        ApiError::from(e)
    })?;

    info!(
        request_id = %request_id,
        city = %city,
        "Processing weather request"
    );

    let report = state
        .weather_service
        .get_weather(&city)
        .await
        .map_err(|e| {
            warn!(
                request_id = %request_id,
                city = %city,
                error = %e,
                "Weather lookup failed"
            );
            ApiError::from(e).with_city(city.as_str())
        })?;

    info!(
        request_id = %request_id,
        city = %city,
        from_cache = report.from_cache,
        "Weather request served"
    );

    Ok(Json(WeatherResponse::from_report(report)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use chrono::Utc;

    use super::*;
    use crate::api::state::MockWeatherServiceTrait;
    use crate::domain::{DomainError, ForecastSummary, WeatherData, WeatherReport};

    fn report_fixture() -> WeatherReport {
        WeatherReport {
            from_cache: false,
            data: WeatherData {
                city: "Houston".to_string(),
                state: "Texas".to_string(),
                latitude: 29.7633,
                longitude: -95.3633,
                timezone: "America/Chicago".to_string(),
                forecast_summary: ForecastSummary {
                    high_temp_f: 85.0,
                    low_temp_f: 66.0,
                    avg_high_temp_f: 81.3,
                    days: 7,
                    total_precipitation_inches: 0.4,
                    avg_wind_mph: 11.0,
                },
                fetched_at: Utc::now(),
            },
        }
    }

    fn state_with(service: MockWeatherServiceTrait) -> AppState {
        AppState::new(
            Arc::new(service),
            "Houston, Texas".to_string(),
            "test".to_string(),
        )
    }

    #[tokio::test]
    async fn test_get_weather_returns_report() {
        let mut service = MockWeatherServiceTrait::new();
        service
            .expect_get_weather()
            .times(1)
            .returning(|_| Ok(report_fixture()));

        let response = get_weather(
            State(state_with(service)),
            Query(WeatherQuery {
                city: Some("Houston".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.status, "success");
        assert!(!response.0.from_cache);
        assert_eq!(response.0.data.city, "Houston");
    }

    #[tokio::test]
    async fn test_get_weather_falls_back_to_default_city() {
        let mut service = MockWeatherServiceTrait::new();
        service
            .expect_get_weather()
            .times(1)
            .withf(|city| city.as_str() == "Houston, Texas")
            .returning(|_| Ok(report_fixture()));

        let response = get_weather(
            State(state_with(service)),
            Query(WeatherQuery { city: None }),
        )
        .await;

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_get_weather_rejects_invalid_city_without_calling_service() {
        // No expectations set: any call to the service would panic.
        let service = MockWeatherServiceTrait::new();

        let err = get_weather(
            State(state_with(service)),
            Query(WeatherQuery {
                city: Some("   ".to_string()),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_weather_maps_upstream_failure_to_unavailable() {
        let mut service = MockWeatherServiceTrait::new();
        service
            .expect_get_weather()
            .times(1)
            .returning(|_| Err(DomainError::upstream_server(500, "boom")));

        let err = get_weather(
            State(state_with(service)),
            Query(WeatherQuery {
                city: Some("Houston".to_string()),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.body.city, Some("Houston".to_string()));
    }
}
