//! Outbound HTTP plumbing - reqwest client with retry and backoff

mod client;
mod retry;

pub use client::{HttpClientTrait, RetryingHttpClient};
pub use retry::RetryPolicy;

#[cfg(test)]
pub use client::mock::MockHttpClient;
