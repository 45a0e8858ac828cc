//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing configuration
//! - `cache` - Cache backend selection and Redis/memory settings
//! - `database` - Database connection and pool configuration

pub mod auth;
pub mod cache;
pub mod database;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::{CacheProvider, CacheSettings, MemoryCacheConfig, RedisCacheConfig};
pub use database::DatabaseConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Cache configuration
    pub cache: CacheSettings,

    /// Database configuration
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            cache: CacheSettings::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            cache: CacheSettings::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.jwt.default_token_ttl, 86400);
        assert_eq!(config.cache.provider, CacheProvider::Memory);
    }
}
