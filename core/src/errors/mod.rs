//! Domain-specific error types and error handling.

use thiserror::Error;

/// Token-related errors.
///
/// This is the internal taxonomy used between the codec and the lifecycle
/// manager. It never crosses the public verify/refresh boundary: callers
/// only ever see [`DomainError::InvalidToken`], so they cannot probe WHY a
/// given token was rejected.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("token signature verification failed")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("token revoked")]
    Blacklisted,

    #[error("refresh token not found")]
    RefreshTokenNotFound,

    #[error("token generation failed")]
    GenerationFailed,
}

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("email already registered")]
    EmailAlreadyRegistered,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user not found")]
    UserNotFound,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// The single opaque outcome for any token that fails verification or
    /// refresh, regardless of the underlying reason (malformed, bad
    /// signature, expired, revoked, unknown refresh id).
    #[error("invalid token")]
    InvalidToken,

    #[error("storage unavailable: {message}")]
    Storage { message: String },

    #[error("cache unavailable: {message}")]
    Cache { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
