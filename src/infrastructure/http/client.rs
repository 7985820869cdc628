use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::domain::DomainError;
use crate::infrastructure::http::RetryPolicy;

const USER_AGENT: &str = concat!("weather-webhook/", env!("CARGO_PKG_VERSION"));

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// GETs the URL with the given query parameters and parses the body as
    /// JSON.
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest, retrying transient upstream failures.
///
/// 4xx responses fail immediately; 5xx responses, timeouts, connection
/// failures and non-JSON bodies are retried per the [`RetryPolicy`]. The
/// per-attempt timeout is enforced by the underlying reqwest client.
#[derive(Debug, Clone)]
pub struct RetryingHttpClient {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl RetryingHttpClient {
    pub fn new(timeout: std::time::Duration, policy: RetryPolicy) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, policy })
    }

    async fn attempt(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::network(format!("Request timed out: {}", e))
                } else if e.is_connect() {
                    DomainError::network(format!("Connection failed: {}", e))
                } else {
                    DomainError::network(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status.is_client_error() {
            let body = truncated_body(response).await;
            return Err(DomainError::upstream_client(status.as_u16(), body));
        }
        if status.is_server_error() {
            let body = truncated_body(response).await;
            return Err(DomainError::upstream_server(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::malformed_response(format!("Invalid JSON body: {}", e)))
    }
}

async fn truncated_body(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    body.chars().take(500).collect()
}

#[async_trait]
impl HttpClientTrait for RetryingHttpClient {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, DomainError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.attempt(url, query).await {
                Ok(value) => {
                    debug!(url = %url, attempt, "Upstream request succeeded");
                    return Ok(value);
                }
                Err(e) if e.is_retryable() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.delay_for(attempt);
                    warn!(
                        url = %url,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Transient upstream failure, retrying after backoff"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    error!(url = %url, attempt, error = %e, "Upstream request failed");
                    return Err(e);
                }
            }
        }
    }
}
