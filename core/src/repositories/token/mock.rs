//! Mock implementation of TokenRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::token::{AccessTokenRecord, RefreshTokenRecord};
use crate::errors::DomainResult;

use super::r#trait::TokenRepository;

/// In-memory token repository for testing
pub struct MockTokenRepository {
    refresh_tokens: Arc<RwLock<HashMap<String, RefreshTokenRecord>>>,
    access_tokens: Arc<RwLock<Vec<AccessTokenRecord>>>,
}

impl MockTokenRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            refresh_tokens: Arc::new(RwLock::new(HashMap::new())),
            access_tokens: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of live refresh tokens held by a user
    pub async fn refresh_token_count(&self, user_id: i64) -> usize {
        let tokens = self.refresh_tokens.read().await;
        tokens.values().filter(|t| t.user_id == user_id).count()
    }

    /// Number of access token audit rows written so far
    pub async fn access_token_count(&self) -> usize {
        let tokens = self.access_tokens.read().await;
        tokens.len()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn rotate_refresh_token(
        &self,
        user_id: i64,
        token: RefreshTokenRecord,
    ) -> DomainResult<RefreshTokenRecord> {
        let mut tokens = self.refresh_tokens.write().await;
        tokens.retain(|_, t| t.user_id != user_id);
        tokens.insert(token.id.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(&self, id: &str) -> DomainResult<Option<RefreshTokenRecord>> {
        let tokens = self.refresh_tokens.read().await;
        Ok(tokens.get(id).cloned())
    }

    async fn delete_refresh_token(&self, id: &str) -> DomainResult<bool> {
        let mut tokens = self.refresh_tokens.write().await;
        Ok(tokens.remove(id).is_some())
    }

    async fn record_access_token(&self, token: AccessTokenRecord) -> DomainResult<()> {
        let mut tokens = self.access_tokens.write().await;
        tokens.push(token);
        Ok(())
    }
}
