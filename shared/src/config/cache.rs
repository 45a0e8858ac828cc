//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisCacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for RedisCacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl RedisCacheConfig {
    /// Create a new Redis configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// `REDIS_ADDRESS` holds a bare host name; a full URL is derived from it.
    pub fn from_env() -> Self {
        let url = match std::env::var("REDIS_ADDRESS") {
            Ok(address) if address.contains("://") => address,
            Ok(address) => format!("redis://{}:6379", address),
            Err(_) => "redis://localhost:6379".to_string(),
        };

        Self {
            url,
            ..Default::default()
        }
    }
}

/// In-process cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemoryCacheConfig {
    /// Maximum number of entries before least-recently-used eviction
    pub max_entries: usize,

    /// Default TTL for entries in seconds, applied when a write gives none
    pub default_ttl: u64,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            default_ttl: 86400, // 24 hours
        }
    }
}

/// Cache backend selection
///
/// The backend is a deployment-time choice: `Memory` keeps a bounded
/// in-process cache, `Redis` shares revocation state across instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheProvider {
    Memory,
    Redis,
}

impl Default for CacheProvider {
    fn default() -> Self {
        CacheProvider::Memory
    }
}

/// Complete cache configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CacheSettings {
    /// Which backend to construct at startup
    #[serde(default)]
    pub provider: CacheProvider,

    /// Redis configuration (used when provider = redis)
    #[serde(default)]
    pub redis: RedisCacheConfig,

    /// Memory cache configuration (used when provider = memory)
    #[serde(default)]
    pub memory: MemoryCacheConfig,
}

impl CacheSettings {
    /// Create from environment variables
    ///
    /// `CACHE_PROVIDER=redis` selects the shared Redis backend; anything
    /// else falls back to the in-process cache.
    pub fn from_env() -> Self {
        let provider = match std::env::var("CACHE_PROVIDER").as_deref() {
            Ok("redis") => CacheProvider::Redis,
            _ => CacheProvider::Memory,
        };

        Self {
            provider,
            redis: RedisCacheConfig::from_env(),
            memory: MemoryCacheConfig::default(),
        }
    }
}

fn default_connection_timeout() -> u64 {
    5
}
