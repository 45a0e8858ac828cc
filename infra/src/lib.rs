//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the GrowLink
//! backend, following Clean Architecture principles. It provides concrete
//! implementations for the storage and cache interfaces defined in
//! `gl_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL repository implementations using SQLx
//! - **Cache**: Redis-backed revocation cache and backend selection
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable the Redis cache backend (default)

/// Cache module - Redis backend and deployment-time backend selection
pub mod cache;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
