//! Token repository trait defining the interface for token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::{AccessTokenRecord, RefreshTokenRecord};
use crate::errors::DomainResult;

/// Repository trait for refresh token and access token audit persistence.
///
/// # Invariant
/// At most one live refresh token record exists per user. Rotation replaces
/// whatever records a user holds with exactly one new record, and the
/// delete+insert pair must be atomic: two concurrent rotations for the same
/// user may race, but the loser must never leave zero or two live records.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Replace all refresh tokens of a user with a single new record
    ///
    /// Deletes every existing refresh token row for `user_id`, then inserts
    /// `token`, inside one storage transaction.
    ///
    /// # Returns
    /// * `Ok(RefreshTokenRecord)` - The inserted record
    /// * `Err(DomainError)` - Rotation failed; no partial state may remain
    async fn rotate_refresh_token(
        &self,
        user_id: i64,
        token: RefreshTokenRecord,
    ) -> DomainResult<RefreshTokenRecord>;

    /// Find a refresh token by its id
    ///
    /// # Returns
    /// * `Ok(Some(RefreshTokenRecord))` - Token found
    /// * `Ok(None)` - No record with that id (never issued or rotated away)
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_refresh_token(&self, id: &str) -> DomainResult<Option<RefreshTokenRecord>>;

    /// Delete a refresh token by id; deleting an absent id is not an error
    ///
    /// # Returns
    /// * `Ok(true)` - A record was deleted
    /// * `Ok(false)` - No record with that id existed
    async fn delete_refresh_token(&self, id: &str) -> DomainResult<bool>;

    /// Persist an audit record for an issued access token
    ///
    /// Callers treat this as best-effort; a failure here must not be able
    /// to roll back an already-completed rotation.
    async fn record_access_token(&self, token: AccessTokenRecord) -> DomainResult<()>;
}
