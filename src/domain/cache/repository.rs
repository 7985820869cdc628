//! Cache trait definition

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::DomainError;

/// Key-value cache with per-entry TTL.
///
/// Values travel as JSON strings so the trait stays dyn-compatible; the
/// [`CacheExt`] helpers layer typed access on top.
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Looks up a raw JSON value.
    ///
    /// An entry past its TTL is never returned: implementations purge it
    /// lazily on access and report a miss instead.
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores a raw JSON value, replacing any prior entry and its expiry.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Removes an entry, reporting whether it was present.
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Drops every entry.
    async fn clear(&self) -> Result<(), DomainError>;

    /// Approximate number of live entries.
    async fn size(&self) -> Result<usize, DomainError>;
}

/// Typed get/set over the raw JSON operations
pub trait CacheExt: Cache {
    /// Gets and deserializes a cached value
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<V>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            let Some(raw) = self.get_raw(key).await? else {
                return Ok(None);
            };
            let value = serde_json::from_str(&raw).map_err(|e| {
                DomainError::cache(format!("Corrupt cache entry for '{key}': {e}"))
            })?;
            Ok(Some(value))
        }
    }

    /// Serializes and stores a value with a TTL
    fn set<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
        ttl: Duration,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let raw = serde_json::to_string(value)
                .map_err(|e| DomainError::cache(format!("Unserializable cache value: {e}")))?;
            self.set_raw(key, &raw, ttl).await
        }
    }
}

impl<T: Cache + ?Sized> CacheExt for T {}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct MockState {
        entries: HashMap<String, (String, Duration)>,
        fail_with: Option<String>,
    }

    /// In-memory stand-in that records the TTL each entry was stored with
    /// and never expires anything. `with_error` makes every operation fail.
    #[derive(Debug, Default)]
    pub struct MockCache {
        state: Mutex<MockState>,
    }

    impl MockCache {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry<V: Serialize>(self, key: &str, value: &V, ttl: Duration) -> Self {
            let raw = serde_json::to_string(value).unwrap();
            self.state
                .lock()
                .unwrap()
                .entries
                .insert(key.to_string(), (raw, ttl));
            self
        }

        pub fn with_error(self, message: impl Into<String>) -> Self {
            self.state.lock().unwrap().fail_with = Some(message.into());
            self
        }

        /// TTL the given key was last stored with, for asserting on set calls.
        pub fn stored_ttl(&self, key: &str) -> Option<Duration> {
            self.state
                .lock()
                .unwrap()
                .entries
                .get(key)
                .map(|(_, ttl)| *ttl)
        }

        fn check_error(&self) -> Result<(), DomainError> {
            match &self.state.lock().unwrap().fail_with {
                Some(message) => Err(DomainError::cache(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
            self.check_error()?;
            let state = self.state.lock().unwrap();
            Ok(state.entries.get(key).map(|(raw, _)| raw.clone()))
        }

        async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
            self.check_error()?;
            self.state
                .lock()
                .unwrap()
                .entries
                .insert(key.to_string(), (value.to_string(), ttl));
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.state.lock().unwrap().entries.remove(key).is_some())
        }

        async fn clear(&self) -> Result<(), DomainError> {
            self.check_error()?;
            self.state.lock().unwrap().entries.clear();
            Ok(())
        }

        async fn size(&self) -> Result<usize, DomainError> {
            self.check_error()?;
            Ok(self.state.lock().unwrap().entries.len())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde::Deserialize;

        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Snapshot {
            city: String,
            high_temp_f: f64,
        }

        fn houston() -> Snapshot {
            Snapshot {
                city: "Houston".to_string(),
                high_temp_f: 85.0,
            }
        }

        #[tokio::test]
        async fn test_typed_round_trip() {
            let cache = MockCache::new();
            cache
                .set("forecast:Houston", &houston(), Duration::from_secs(1800))
                .await
                .unwrap();

            let hit: Option<Snapshot> = cache.get("forecast:Houston").await.unwrap();
            assert_eq!(hit, Some(houston()));
            assert_eq!(
                cache.stored_ttl("forecast:Houston"),
                Some(Duration::from_secs(1800))
            );
        }

        #[tokio::test]
        async fn test_miss_on_unknown_key() {
            let cache = MockCache::new();

            let hit: Option<Snapshot> = cache.get("forecast:Paris").await.unwrap();
            assert!(hit.is_none());
        }

        #[tokio::test]
        async fn test_set_replaces_entry_and_ttl() {
            let cache = MockCache::new();
            cache
                .set("forecast:Houston", &houston(), Duration::from_secs(60))
                .await
                .unwrap();
            cache
                .set(
                    "forecast:Houston",
                    &Snapshot {
                        city: "Houston".to_string(),
                        high_temp_f: 90.0,
                    },
                    Duration::from_secs(1800),
                )
                .await
                .unwrap();

            let hit: Option<Snapshot> = cache.get("forecast:Houston").await.unwrap();
            assert_eq!(hit.unwrap().high_temp_f, 90.0);
            assert_eq!(
                cache.stored_ttl("forecast:Houston"),
                Some(Duration::from_secs(1800))
            );
        }

        #[tokio::test]
        async fn test_delete_reports_presence() {
            let cache =
                MockCache::new().with_entry("forecast:Houston", &houston(), Duration::from_secs(60));

            assert!(cache.delete("forecast:Houston").await.unwrap());
            assert!(!cache.delete("forecast:Houston").await.unwrap());
        }

        #[tokio::test]
        async fn test_corrupt_entry_is_a_cache_error() {
            let cache = MockCache::new();
            cache
                .set_raw("forecast:Houston", "not json", Duration::from_secs(60))
                .await
                .unwrap();

            let result: Result<Option<Snapshot>, _> = cache.get("forecast:Houston").await;
            assert!(matches!(result, Err(DomainError::Cache { .. })));
        }

        #[tokio::test]
        async fn test_injected_error_fails_every_operation() {
            let cache = MockCache::new().with_error("backend down");

            let result: Result<Option<Snapshot>, _> = cache.get("forecast:Houston").await;
            assert!(result.is_err());
            assert!(cache.clear().await.is_err());
        }
    }
}
