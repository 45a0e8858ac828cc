//! Password hashing utilities

use crate::errors::{DomainError, DomainResult};

/// Bcrypt work factor used for new password hashes
pub const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password for storage
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {}", e),
    })
}

/// Check a plaintext password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
        message: format!("password verification failed: {}", e),
    })
}
