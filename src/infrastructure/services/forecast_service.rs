//! Forecast orchestration - cache-aside lookup over the upstream provider

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::cache::{Cache, CacheExt};
use crate::domain::forecast::{
    CityName, ForecastProvider, ForecastSummary, WeatherData, WeatherReport,
};
use crate::domain::DomainError;

const CACHE_NAMESPACE: &str = "forecast";

/// Service answering weather requests from the cache, falling back to the
/// upstream provider on a miss.
pub struct ForecastService {
    provider: Arc<dyn ForecastProvider>,
    cache: Arc<dyn Cache>,
    cache_ttl: Duration,
}

impl ForecastService {
    pub fn new(
        provider: Arc<dyn ForecastProvider>,
        cache: Arc<dyn Cache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            cache_ttl,
        }
    }

    /// Cache key for a city. Keys on the raw city string, so differently
    /// spelled requests for the same place cache independently.
    fn cache_key(city: &CityName) -> String {
        format!("{}:{}", CACHE_NAMESPACE, city.as_str())
    }

    /// Returns the weather for a city, serving from the cache when possible.
    ///
    /// The fetch/validate/store sequence runs in a spawned task, so an
    /// in-flight retry loop and the subsequent cache store complete even if
    /// the caller is dropped mid-request. Concurrent misses for the same city
    /// are not de-duplicated; each performs its own fetch and the last store
    /// wins.
    pub async fn get_weather(&self, city: &CityName) -> Result<WeatherReport, DomainError> {
        let key = Self::cache_key(city);

        if let Some(data) = self.cache.get::<WeatherData>(&key).await? {
            info!(city = %city, "Returning cached forecast");
            return Ok(WeatherReport {
                from_cache: true,
                data,
            });
        }

        info!(city = %city, "Cache miss, fetching fresh forecast");

        let provider = Arc::clone(&self.provider);
        let cache = Arc::clone(&self.cache);
        let ttl = self.cache_ttl;
        let city = city.clone();

        let data = tokio::spawn(async move {
            let fetched = provider.fetch(&city).await?;
            let summary = ForecastSummary::from_daily(&fetched.payload.daily)?;
            let data = WeatherData::new(fetched, summary);

            cache.set(&key, &data, ttl).await?;
            debug!(city = %city, ttl_secs = ttl.as_secs(), "Stored forecast in cache");

            Ok::<WeatherData, DomainError>(data)
        })
        .await
        .map_err(|e| DomainError::internal(format!("Forecast fetch task failed: {}", e)))??;

        Ok(WeatherReport {
            from_cache: false,
            data,
        })
    }
}
