//! Health check endpoint for liveness probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::AppState;

/// Health response with service identity
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub environment: String,
    pub timestamp: DateTime<Utc>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        environment: state.environment.clone(),
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            service: "weather-webhook".to_string(),
            environment: "development".to_string(),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"service\":\"weather-webhook\""));
        assert!(json.contains("\"environment\":\"development\""));
        assert!(json.contains("\"timestamp\""));
    }
}
