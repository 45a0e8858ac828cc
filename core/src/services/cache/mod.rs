//! Cache abstraction used as the token revocation ledger.
//!
//! The trait is backend-agnostic: the in-process bounded implementation
//! lives here, the shared Redis implementation in the infrastructure
//! crate. Whichever backend is selected at startup must be constructed
//! once and shared by every caller so all requests observe the same
//! revocation state.

mod memory;

pub use memory::MemoryCacheService;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::DomainResult;

/// Key/value store with optional per-entry expiry.
///
/// `get` must distinguish an absent key (`None`) from a stored `null` or
/// `false` (`Some(Value)`). After an entry's TTL elapses it must never be
/// returned; returning `None` briefly before physical removal is fine.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Look up a value by key
    async fn get(&self, key: &str) -> DomainResult<Option<Value>>;

    /// Insert or overwrite a value, optionally expiring after `ttl_seconds`
    async fn set(&self, key: &str, value: Value, ttl_seconds: Option<u64>) -> DomainResult<()>;

    /// Remove an entry; removing an absent key is not an error
    async fn delete(&self, key: &str) -> DomainResult<()>;
}
