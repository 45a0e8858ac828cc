//! Bounded in-process cache backend.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use serde_json::Value;

use gl_shared::config::MemoryCacheConfig;

use crate::errors::{DomainError, DomainResult};

use super::CacheService;

/// Cached entry: value plus its expiry deadline.
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

/// In-process cache with a fixed capacity and least-recently-used eviction.
///
/// Entries also expire by TTL; expired entries are dropped on read, so
/// expiry is eventual rather than exact-instant. Eviction under capacity
/// pressure silently loses entries, which for the revocation ledger means
/// a blacklisted token can read as clean again; deployments that cannot
/// accept that use the shared Redis backend instead.
pub struct MemoryCacheService {
    entries: Mutex<LruCache<String, CacheEntry>>,
    default_ttl: Duration,
}

impl MemoryCacheService {
    /// Create a new cache from configuration
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries)
            .unwrap_or_else(|| NonZeroUsize::new(1).unwrap());
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            default_ttl: Duration::from_secs(config.default_ttl),
        }
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, LruCache<String, CacheEntry>>> {
        self.entries.lock().map_err(|_| DomainError::Cache {
            message: "cache lock poisoned".to_string(),
        })
    }
}

#[async_trait]
impl CacheService for MemoryCacheService {
    async fn get(&self, key: &str) -> DomainResult<Option<Value>> {
        let mut entries = self.lock()?;
        if let Some(entry) = entries.get(key) {
            if Instant::now() < entry.expires_at {
                return Ok(Some(entry.value.clone()));
            }
            // Expired, drop it
            entries.pop(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: Value, ttl_seconds: Option<u64>) -> DomainResult<()> {
        let ttl = ttl_seconds.map(Duration::from_secs).unwrap_or(self.default_ttl);
        let mut entries = self.lock()?;
        entries.put(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        let mut entries = self.lock()?;
        entries.pop(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cache_with_capacity(max_entries: usize) -> MemoryCacheService {
        MemoryCacheService::new(&MemoryCacheConfig {
            max_entries,
            default_ttl: 86400,
        })
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = cache_with_capacity(10);

        cache.set("key", json!(10), None).await.unwrap();
        assert_eq!(cache.get("key").await.unwrap(), Some(json!(10)));
    }

    #[tokio::test]
    async fn test_overwrite() {
        let cache = cache_with_capacity(10);

        cache.set("key", json!("first"), None).await.unwrap();
        cache.set("key", json!("second"), None).await.unwrap();
        assert_eq!(cache.get("key").await.unwrap(), Some(json!("second")));
    }

    #[tokio::test]
    async fn test_delete_wins_over_ttl() {
        let cache = cache_with_capacity(10);

        cache.set("key", json!(10), Some(1)).await.unwrap();
        cache.delete("key").await.unwrap();
        assert_eq!(cache.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_ok() {
        let cache = cache_with_capacity(10);
        cache.delete("never-set").await.unwrap();
    }

    #[tokio::test]
    async fn test_ttl_expiry() {
        let cache = cache_with_capacity(10);

        cache.set("key", json!(true), Some(1)).await.unwrap();
        assert_eq!(cache.get("key").await.unwrap(), Some(json!(true)));

        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(cache.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_stored_false_and_null_are_not_absent() {
        let cache = cache_with_capacity(10);

        cache.set("false", json!(false), None).await.unwrap();
        cache.set("null", Value::Null, None).await.unwrap();

        assert_eq!(cache.get("false").await.unwrap(), Some(json!(false)));
        assert_eq!(cache.get("null").await.unwrap(), Some(Value::Null));
        assert_eq!(cache.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lru_eviction_at_capacity() {
        let cache = cache_with_capacity(2);

        cache.set("a", json!(1), None).await.unwrap();
        cache.set("b", json!(2), None).await.unwrap();
        cache.set("c", json!(3), None).await.unwrap();

        // "a" was least recently used and fell out
        assert_eq!(cache.get("a").await.unwrap(), None);
        assert_eq!(cache.get("b").await.unwrap(), Some(json!(2)));
        assert_eq!(cache.get("c").await.unwrap(), Some(json!(3)));
    }
}
