//! Process-local cache backed by moka

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::cache::Cache;
use crate::domain::DomainError;

/// TTL applied when the cache is built without an explicit one.
const DEFAULT_TTL: Duration = Duration::from_secs(1800);

#[derive(Debug, Clone)]
struct CacheEntry {
    raw: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// In-process cache where every entry carries the expiry it was stored
/// with. Reads that land on a dead entry purge it and count as a miss, so
/// a stale forecast is never served even before moka evicts it. Unbounded;
/// nothing is evicted except by expiry.
#[derive(Debug)]
pub struct InMemoryCache {
    entries: MokaCache<String, CacheEntry>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Builds the cache with a moka-level time-to-live matching the TTL
    /// entries are expected to arrive with.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: MokaCache::builder().time_to_live(ttl).build(),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        let Some(entry) = self.entries.get(key).await else {
            return Ok(None);
        };

        if !entry.is_live() {
            self.entries.remove(key).await;
            return Ok(None);
        }

        Ok(Some(entry.raw))
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| DomainError::cache(format!("TTL too large: {ttl:?}")))?;

        let entry = CacheEntry {
            raw: value.to_string(),
            expires_at,
        };
        self.entries.insert(key.to_string(), entry).await;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.entries.remove(key).await.is_some())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks().await;
        Ok(())
    }

    async fn size(&self) -> Result<usize, DomainError> {
        self.entries.run_pending_tasks().await;
        Ok(self.entries.entry_count() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::CacheExt;

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    struct DaySummary {
        high_temp_f: f64,
        rain_inches: f64,
    }

    fn summary_fixture() -> DaySummary {
        DaySummary {
            high_temp_f: 85.0,
            rain_inches: 0.4,
        }
    }

    #[tokio::test]
    async fn test_round_trips_typed_values() {
        let cache = InMemoryCache::new();

        cache
            .set(
                "forecast:Houston, Texas",
                &summary_fixture(),
                Duration::from_secs(60),
            )
            .await
            .unwrap();

        let hit: Option<DaySummary> = cache.get("forecast:Houston, Texas").await.unwrap();
        assert_eq!(hit, Some(summary_fixture()));
    }

    #[tokio::test]
    async fn test_misses_on_unknown_key() {
        let cache = InMemoryCache::new();

        let hit: Option<DaySummary> = cache.get("forecast:Paris").await.unwrap();
        assert!(hit.is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value_and_expiry() {
        let cache = InMemoryCache::new();

        cache
            .set_raw("forecast:Houston", "\"stale\"", Duration::from_millis(50))
            .await
            .unwrap();
        cache
            .set_raw("forecast:Houston", "\"fresh\"", Duration::from_secs(60))
            .await
            .unwrap();

        // Outlive the first entry's TTL; the rewrite must have replaced it.
        tokio::time::sleep(Duration::from_millis(100)).await;

        let hit: Option<String> = cache.get("forecast:Houston").await.unwrap();
        assert_eq!(hit.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_expired_entry_purged_on_read() {
        let cache = InMemoryCache::new();

        cache
            .set("forecast:Houston", &summary_fixture(), Duration::from_millis(50))
            .await
            .unwrap();

        let hit: Option<DaySummary> = cache.get("forecast:Houston").await.unwrap();
        assert!(hit.is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        let hit: Option<DaySummary> = cache.get("forecast:Houston").await.unwrap();
        assert!(hit.is_none());
        assert_eq!(cache.size().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let cache = InMemoryCache::new();

        cache
            .set("forecast:Houston", &summary_fixture(), Duration::from_secs(60))
            .await
            .unwrap();

        assert!(cache.delete("forecast:Houston").await.unwrap());
        assert!(!cache.delete("forecast:Houston").await.unwrap());

        let hit: Option<DaySummary> = cache.get("forecast:Houston").await.unwrap();
        assert!(hit.is_none());
    }

    #[tokio::test]
    async fn test_clear_drops_all_entries() {
        let cache = InMemoryCache::new();

        cache
            .set("forecast:Houston", &summary_fixture(), Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("forecast:Paris", &summary_fixture(), Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.size().await.unwrap(), 2);

        cache.clear().await.unwrap();

        assert_eq!(cache.size().await.unwrap(), 0);
    }
}
