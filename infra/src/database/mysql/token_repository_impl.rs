//! MySQL implementation of the TokenRepository trait.
//!
//! Persists refresh token rotation and the access token audit trail. The
//! rotation delete+insert pair runs inside a single transaction so two
//! concurrent rotations for the same user can never leave zero or two
//! live refresh token rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use gl_core::domain::entities::token::{AccessTokenRecord, RefreshTokenRecord};
use gl_core::errors::{DomainError, DomainResult};
use gl_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a RefreshTokenRecord
    fn row_to_refresh_token(row: &sqlx::mysql::MySqlRow) -> DomainResult<RefreshTokenRecord> {
        Ok(RefreshTokenRecord {
            id: row
                .try_get("id")
                .map_err(|e| storage_err(format!("Failed to get id: {}", e)))?,
            user_id: row
                .try_get("userId")
                .map_err(|e| storage_err(format!("Failed to get userId: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created")
                .map_err(|e| storage_err(format!("Failed to get created: {}", e)))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn rotate_refresh_token(
        &self,
        user_id: i64,
        token: RefreshTokenRecord,
    ) -> DomainResult<RefreshTokenRecord> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_err(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query("DELETE FROM RefreshToken WHERE userId = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_err(format!("Failed to delete refresh tokens: {}", e)))?;

        sqlx::query("INSERT INTO RefreshToken (id, userId, created) VALUES (?, ?, ?)")
            .bind(&token.id)
            .bind(token.user_id)
            .bind(token.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_err(format!("Failed to insert refresh token: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| storage_err(format!("Failed to commit rotation: {}", e)))?;

        Ok(token)
    }

    async fn find_refresh_token(&self, id: &str) -> DomainResult<Option<RefreshTokenRecord>> {
        let query = r#"
            SELECT id, userId, created
            FROM RefreshToken
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_err(format!("Failed to find refresh token: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_refresh_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_refresh_token(&self, id: &str) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM RefreshToken WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_err(format!("Failed to delete refresh token: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_access_token(&self, token: AccessTokenRecord) -> DomainResult<()> {
        let query = r#"
            INSERT INTO AccessToken (id, ttl, userId, created)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&token.id)
            .bind(token.ttl as i64)
            .bind(token.user_id)
            .bind(token.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_err(format!("Failed to record access token: {}", e)))?;

        Ok(())
    }
}

fn storage_err(message: String) -> DomainError {
    DomainError::Storage { message }
}
