//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainResult;

/// Repository trait for User entity read/write operations.
///
/// The core only reads users (to authenticate and to resolve a refresh
/// token back to its principal) and creates them at registration time.
/// Soft-deleted users must not be returned by any lookup.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a live user by email, with roles loaded
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No live user with that email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find a live user by id, with roles loaded
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    /// Create a new user record
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with its storage-assigned id
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate email)
    async fn create(&self, user: NewUser) -> DomainResult<User>;
}
