//! Mock implementation of UserRepository for testing

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{DomainError, DomainResult};

use super::r#trait::UserRepository;

/// In-memory user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed the repository with a prebuilt user (id must be unique)
    pub async fn insert(&self, user: User) {
        let mut users = self.users.write().await;
        self.next_id.fetch_max(user.id + 1, Ordering::SeqCst);
        users.push(user);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email == email && !u.is_deleted())
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id && !u.is_deleted()).cloned())
    }

    async fn create(&self, user: NewUser) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email && !u.is_deleted()) {
            return Err(DomainError::Storage {
                message: "duplicate email".to_string(),
            });
        }

        let created = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: user.email,
            password_hash: user.password_hash,
            name: user.name,
            first_name: user.first_name,
            last_name: user.last_name,
            roles: Vec::new(),
            created_at: Some(Utc::now()),
            updated_at: None,
            deleted_at: None,
        };
        users.push(created.clone());
        Ok(created)
    }
}
