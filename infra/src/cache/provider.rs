//! Deployment-time cache backend selection
//!
//! The backend set is closed: either the bounded in-process cache or the
//! shared Redis cache, picked once at startup from configuration. The
//! constructed backend is handed out as a single shared `Arc` so every
//! caller observes the same revocation state; no globals are involved.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use gl_core::errors::DomainResult;
use gl_core::services::cache::{CacheService, MemoryCacheService};
use gl_shared::config::{CacheProvider, CacheSettings};

use crate::InfrastructureError;

use super::redis_cache::RedisCacheService;

/// The closed set of cache backends
pub enum CacheBackend {
    /// Bounded in-process LRU cache
    Memory(MemoryCacheService),
    /// Shared Redis cache
    Redis(RedisCacheService),
}

#[async_trait]
impl CacheService for CacheBackend {
    async fn get(&self, key: &str) -> DomainResult<Option<Value>> {
        match self {
            CacheBackend::Memory(cache) => cache.get(key).await,
            CacheBackend::Redis(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: Value, ttl_seconds: Option<u64>) -> DomainResult<()> {
        match self {
            CacheBackend::Memory(cache) => cache.set(key, value, ttl_seconds).await,
            CacheBackend::Redis(cache) => cache.set(key, value, ttl_seconds).await,
        }
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        match self {
            CacheBackend::Memory(cache) => cache.delete(key).await,
            CacheBackend::Redis(cache) => cache.delete(key).await,
        }
    }
}

/// Construct the configured cache backend
///
/// Call once at process start and share the returned `Arc` with every
/// service that needs the cache.
pub async fn create_cache(
    settings: &CacheSettings,
) -> Result<Arc<CacheBackend>, InfrastructureError> {
    let backend = match settings.provider {
        CacheProvider::Memory => {
            info!(
                "Using in-process cache (max {} entries)",
                settings.memory.max_entries
            );
            CacheBackend::Memory(MemoryCacheService::new(&settings.memory))
        }
        CacheProvider::Redis => {
            CacheBackend::Redis(RedisCacheService::new(&settings.redis).await?)
        }
    };

    Ok(Arc::new(backend))
}
