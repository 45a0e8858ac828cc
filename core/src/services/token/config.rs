//! Configuration for the token service

use gl_shared::config::JwtConfig;

use crate::domain::entities::token::DEFAULT_TOKEN_TTL_SECS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,
    /// Default access token time-to-live in seconds
    pub default_token_ttl: u64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            default_token_ttl: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            default_token_ttl: config.default_token_ttl,
        }
    }
}
