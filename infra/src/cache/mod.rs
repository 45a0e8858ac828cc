//! Cache module for the shared revocation ledger
//!
//! Provides the Redis-backed implementation of the core `CacheService`
//! trait and the deployment-time selection between backends.

mod provider;
mod redis_cache;

pub use provider::{create_cache, CacheBackend};
pub use redis_cache::RedisCacheService;

// Re-export commonly used types
pub use gl_shared::config::{CacheProvider, CacheSettings, RedisCacheConfig};
