//! Token signing configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Default access token time-to-live in seconds.
    /// Individual issuance calls may override this.
    #[serde(default = "default_token_ttl")]
    pub default_token_ttl: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            default_token_ttl: default_token_ttl(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET_KEY")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let default_token_ttl = std::env::var("JWT_TOKEN_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_token_ttl);

        Self {
            secret,
            default_token_ttl,
        }
    }

    /// Set the default token TTL in seconds
    pub fn with_token_ttl(mut self, ttl: u64) -> Self {
        self.default_token_ttl = ttl;
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

fn default_token_ttl() -> u64 {
    86400 // 24 hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.default_token_ttl, 86400);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_token_ttl(3600);

        assert_eq!(config.default_token_ttl, 3600);
        assert!(!config.is_using_default_secret());
    }
}
