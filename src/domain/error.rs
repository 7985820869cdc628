use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid city: {message}")]
    InvalidCity { message: String },

    #[error("City not found: {city}")]
    CityNotFound { city: String },

    #[error("Upstream client error (HTTP {status}): {message}")]
    UpstreamClient { status: u16, message: String },

    #[error("Upstream server error (HTTP {status}): {message}")]
    UpstreamServer { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Malformed upstream response: {message}")]
    MalformedResponse { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn invalid_city(message: impl Into<String>) -> Self {
        Self::InvalidCity {
            message: message.into(),
        }
    }

    pub fn city_not_found(city: impl Into<String>) -> Self {
        Self::CityNotFound { city: city.into() }
    }

    pub fn upstream_client(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamClient {
            status,
            message: message.into(),
        }
    }

    pub fn upstream_server(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamServer {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the HTTP retry loop may attempt the request again.
    ///
    /// Transient upstream failures (5xx, timeouts, connection errors, bodies
    /// that are not valid JSON) are retryable; 4xx responses and schema
    /// validation failures are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::UpstreamServer { .. } | Self::Network { .. } | Self::MalformedResponse { .. }
        )
    }
}
