//! Main token lifecycle implementation

use std::sync::Arc;

use crate::domain::entities::role::Role;
use crate::domain::entities::token::{
    AccessTokenRecord, Claims, RefreshTokenRecord, BLACKLIST_KEY_PREFIX,
};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::cache::CacheService;

use serde_json::Value;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Service managing the access token lifecycle.
///
/// A token moves Issued -> Valid -> Expired or Blacklisted; there is no
/// way back to Valid. Verification needs only the signature and the
/// blacklist cache, so it stays cheap and horizontally scalable; storage
/// is touched only on issuance, refresh, and revocation.
///
/// One instance is constructed at process start and shared (by `Arc`)
/// with every caller, so all requests see the same signing secret and the
/// same revocation ledger.
pub struct TokenService<R, U, C>
where
    R: TokenRepository,
    U: UserRepository,
    C: CacheService,
{
    /// Refresh token and audit persistence
    repository: Arc<R>,
    /// User lookups for refresh resolution
    users: Arc<U>,
    /// Revocation ledger
    cache: Arc<C>,
    /// Stateless JWT codec
    codec: TokenCodec,
    /// Service configuration
    config: TokenServiceConfig,
}

impl<R, U, C> TokenService<R, U, C>
where
    R: TokenRepository,
    U: UserRepository,
    C: CacheService,
{
    /// Create a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for persistence
    /// * `users` - User repository for refresh token resolution
    /// * `cache` - Shared revocation cache
    /// * `config` - Token service configuration
    pub fn new(
        repository: Arc<R>,
        users: Arc<U>,
        cache: Arc<C>,
        config: TokenServiceConfig,
    ) -> Self {
        let codec = TokenCodec::new(&config.secret);
        Self {
            repository,
            users,
            cache,
            codec,
            config,
        }
    }

    /// Issue a new access token for a user
    ///
    /// Rotates the user's refresh token first: any previously issued
    /// refresh token for this user stops working, so at most one refresh
    /// token is live per user at any time. The audit record write is
    /// best-effort and never blocks the returned token.
    ///
    /// # Arguments
    ///
    /// * `user` - The user to issue for
    /// * `roles` - Roles embedded in the claims
    /// * `ttl_seconds` - Optional TTL override, defaults to the configured TTL
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed access token
    /// * `Err(DomainError)` - Rotation or signing failed
    pub async fn issue_token(
        &self,
        user: &User,
        roles: &[Role],
        ttl_seconds: Option<u64>,
    ) -> DomainResult<String> {
        let ttl = ttl_seconds.unwrap_or(self.config.default_token_ttl);

        let refresh_token = self
            .repository
            .rotate_refresh_token(user.id, RefreshTokenRecord::new(user.id))
            .await?;

        let claims = Claims::new(user.id, roles, refresh_token.id, ttl);
        let token = self.codec.encode(&claims)?;

        // Audit trail only; the token is already valid without this row
        if let Err(e) = self
            .repository
            .record_access_token(AccessTokenRecord::new(token.clone(), ttl, user.id))
            .await
        {
            tracing::warn!(user_id = user.id, "failed to record access token: {}", e);
        }

        Ok(token)
    }

    /// Verify an access token and return its claims
    ///
    /// Checks signature, expiry, and the blacklist cache; no storage
    /// round-trip. Every failure collapses to the same opaque
    /// [`DomainError::InvalidToken`], including a cache outage: a
    /// revocation ledger that cannot be read fails closed.
    pub async fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        let claims = self
            .codec
            .decode(token)
            .map_err(|_| DomainError::InvalidToken)?;

        match self.is_token_blacklisted(token).await {
            Ok(false) => Ok(claims),
            Ok(true) => Err(DomainError::InvalidToken),
            Err(e) => {
                tracing::warn!("blacklist lookup failed, rejecting token: {}", e);
                Err(DomainError::InvalidToken)
            }
        }
    }

    /// Extract the refresh token id embedded in a verifiable access token
    ///
    /// Expired or blacklisted access tokens do not give up their refresh
    /// token id.
    pub async fn retrieve_refresh_token(&self, token: &str) -> DomainResult<String> {
        let claims = self.verify_token(token).await?;
        Ok(claims.refresh_token_id)
    }

    /// Exchange a refresh token id for a new access token
    ///
    /// Refresh tokens are single-use: issuing the new token rotates the
    /// user's refresh token again, so a second exchange with the same id
    /// fails. An id that was never issued, was rotated away by a later
    /// login, or was consumed already all yield the same opaque error.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A fresh access token carrying the user's current roles
    /// * `Err(DomainError)` - Unknown id, missing user, or storage failure
    pub async fn refresh_token(&self, refresh_token_id: &str) -> DomainResult<String> {
        let record = self
            .repository
            .find_refresh_token(refresh_token_id)
            .await?
            .ok_or(DomainError::InvalidToken)?;

        let user = self
            .users
            .find_by_id(record.user_id)
            .await?
            .ok_or(DomainError::InvalidToken)?;

        self.issue_token(&user, &user.roles, None).await
    }

    /// Revoke an access token for the remainder of its natural lifetime
    ///
    /// Writes a blacklist cache entry expiring when the token itself
    /// would, and deletes the paired refresh token record. Tokens that do
    /// not decode (already expired, forged, garbage) are ignored:
    /// revoking an already-unusable token is a no-op, not an error.
    /// Only the exact token string is revoked; other tokens issued for
    /// the same user are untouched.
    pub async fn blacklist_token(&self, token: &str) -> DomainResult<()> {
        let claims = match self.codec.decode(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("ignoring blacklist of undecodable token: {}", e);
                return Ok(());
            }
        };

        let remaining = claims.remaining_ttl();
        if remaining == 0 {
            // Natural expiry already rejects it; a cache entry would be waste
            return Ok(());
        }

        self.cache
            .set(&blacklist_key(token), Value::Bool(true), Some(remaining))
            .await?;
        self.repository
            .delete_refresh_token(&claims.refresh_token_id)
            .await?;

        Ok(())
    }

    /// Check whether an exact token string has been blacklisted
    pub async fn is_token_blacklisted(&self, token: &str) -> DomainResult<bool> {
        let value = self.cache.get(&blacklist_key(token)).await?;
        Ok(matches!(value, Some(Value::Bool(true))))
    }
}

fn blacklist_key(token: &str) -> String {
    format!("{}{}", BLACKLIST_KEY_PREFIX, token)
}
