//! Token entities for JWT-based authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// Default access token time-to-live (24 hours)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 86400;

/// Cache key prefix for blacklisted access tokens
pub const BLACKLIST_KEY_PREFIX: &str = "blacklist:";

/// Claims structure for the JWT payload.
///
/// Field names on the wire use the compact form (`uid`, `r`, `rt`) so tokens
/// stay small; the claims are immutable once signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for
    #[serde(rename = "uid")]
    pub user_id: i64,

    /// Role ids held by the user at issuance time
    #[serde(rename = "r")]
    pub roles: Vec<Role>,

    /// Id of the refresh token paired with this access token
    #[serde(rename = "rt")]
    pub refresh_token_id: String,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a new access token expiring `ttl_seconds` from now
    pub fn new(
        user_id: i64,
        roles: &[Role],
        refresh_token_id: impl Into<String>,
        ttl_seconds: u64,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            user_id,
            roles: roles.to_vec(),
            refresh_token_id: refresh_token_id.into(),
            iat: now,
            exp: now + ttl_seconds as i64,
        }
    }

    /// Check whether the claims have passed their expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Seconds remaining until expiry, zero if already expired
    pub fn remaining_ttl(&self) -> u64 {
        let now = Utc::now().timestamp();
        if self.exp > now {
            (self.exp - now) as u64
        } else {
            0
        }
    }
}

/// Audit record written for every issued access token.
///
/// Rows are created fire-and-forget at issuance and never updated or
/// deleted by the core; a blacklisted token supersedes its row logically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenRecord {
    /// The signed token string itself (primary key)
    pub id: String,

    /// Time-to-live the token was issued with, in seconds
    pub ttl: u64,

    /// User the token was issued for
    pub user_id: i64,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,
}

impl AccessTokenRecord {
    /// Create an audit record for a freshly issued token
    pub fn new(token: impl Into<String>, ttl: u64, user_id: i64) -> Self {
        Self {
            id: token.into(),
            ttl,
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// Refresh token record persisted by the storage layer.
///
/// At most one live record exists per user: issuing a new access token
/// replaces any previous record in the same storage transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Opaque random identifier (primary key)
    pub id: String,

    /// User this refresh token belongs to
    pub user_id: i64,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Create a new refresh token record with a random id
    pub fn new(user_id: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new(1, &[Role::Admin], "refresh-id", 3600);

        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.roles, vec![Role::Admin]);
        assert_eq!(claims.refresh_token_id, "refresh-id");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new(1, &[], "refresh-id", 3600);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert_eq!(claims.remaining_ttl(), 0);
    }

    #[test]
    fn test_claims_remaining_ttl() {
        let claims = Claims::new(1, &[], "refresh-id", 3600);
        let remaining = claims.remaining_ttl();

        assert!(remaining > 3590 && remaining <= 3600);
    }

    #[test]
    fn test_claims_wire_format() {
        let claims = Claims::new(7, &[Role::Admin, Role::SoftwareDev], "rt-1", 60);
        let json = serde_json::to_string(&claims).unwrap();

        assert!(json.contains("\"uid\":7"));
        assert!(json.contains("\"r\":[7,11]"));
        assert!(json.contains("\"rt\":\"rt-1\""));

        let decoded: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_refresh_token_record_ids_are_unique() {
        let a = RefreshTokenRecord::new(1);
        let b = RefreshTokenRecord::new(1);

        assert_ne!(a.id, b.id);
        assert_eq!(a.user_id, b.user_id);
    }

    #[test]
    fn test_access_token_record() {
        let record = AccessTokenRecord::new("signed.token.string", 86400, 42);

        assert_eq!(record.id, "signed.token.string");
        assert_eq!(record.ttl, 86400);
        assert_eq!(record.user_id, 42);
    }
}
