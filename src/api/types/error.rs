//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// JSON body rendered for every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Always `"error"`
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<Vec<String>>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                status: "error".to_string(),
                message: message.into(),
                city: None,
                available_endpoints: None,
            },
        }
    }

    /// Attach the city the failed request was about
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.body.city = Some(city.into());
        self
    }

    /// Attach the routes a client may call instead (404 responses)
    pub fn with_available_endpoints(mut self, endpoints: &[&str]) -> Self {
        self.body.available_endpoints =
            Some(endpoints.iter().map(|e| e.to_string()).collect());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Service unavailable
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::InvalidCity { message } => {
                Self::bad_request(format!("Invalid city parameter: {}", message))
            }
            DomainError::CityNotFound { city } => {
                Self::unavailable(format!("Failed to fetch weather data for {}", city))
                    .with_city(city)
            }
            DomainError::UpstreamClient { .. }
            | DomainError::UpstreamServer { .. }
            | DomainError::Network { .. }
            | DomainError::MalformedResponse { .. }
            | DomainError::Validation { .. } => Self::unavailable("Failed to fetch weather data"),
            DomainError::Cache { .. }
            | DomainError::Configuration { .. }
            | DomainError::Internal { .. } => Self::internal("Internal server error"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.message)
    }
}

impl std::error::Error for ApiError {}
