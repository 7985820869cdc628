use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::types::ApiError;
use super::weather;

/// Routes advertised to clients that hit an unknown path
const AVAILABLE_ENDPOINTS: [&str; 3] = ["/", "/weather", "/health"];

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Weather endpoints ("/" serves the same handler)
        .route("/", get(weather::get_weather))
        .route("/weather", get(weather::get_weather))
        // Health endpoint
        .route("/health", get(health::health_check))
        // Unknown paths get a JSON 404 instead of axum's empty body
        .fallback(endpoint_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn endpoint_not_found() -> ApiError {
    ApiError::not_found("Endpoint not found").with_available_endpoints(&AVAILABLE_ENDPOINTS)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[tokio::test]
    async fn test_fallback_lists_available_endpoints() {
        let err = endpoint_not_found().await;

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.status, "error");
        assert_eq!(
            err.body.available_endpoints,
            Some(vec![
                "/".to_string(),
                "/weather".to_string(),
                "/health".to_string()
            ])
        );
    }
}
