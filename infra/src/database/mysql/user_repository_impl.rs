//! MySQL implementation of the UserRepository trait.
//!
//! Loads users together with their role assignments and honors the
//! schema's soft-delete convention: a row with a non-NULL `endtime` is
//! invisible to every lookup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use gl_core::domain::entities::role::Role;
use gl_core::domain::entities::user::{NewUser, User};
use gl_core::errors::{DomainError, DomainResult};
use gl_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity (roles loaded separately)
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> DomainResult<User> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| storage_err(format!("Failed to get id: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| storage_err(format!("Failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password")
                .map_err(|e| storage_err(format!("Failed to get password: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| storage_err(format!("Failed to get name: {}", e)))?,
            first_name: row
                .try_get("firstname")
                .map_err(|e| storage_err(format!("Failed to get firstname: {}", e)))?,
            last_name: row
                .try_get("lastname")
                .map_err(|e| storage_err(format!("Failed to get lastname: {}", e)))?,
            roles: Vec::new(),
            created_at: row
                .try_get::<Option<DateTime<Utc>>, _>("begintime")
                .map_err(|e| storage_err(format!("Failed to get begintime: {}", e)))?,
            updated_at: row
                .try_get::<Option<DateTime<Utc>>, _>("updatedate")
                .map_err(|e| storage_err(format!("Failed to get updatedate: {}", e)))?,
            deleted_at: row
                .try_get::<Option<DateTime<Utc>>, _>("endtime")
                .map_err(|e| storage_err(format!("Failed to get endtime: {}", e)))?,
        })
    }

    /// Load the role set assigned to a user
    ///
    /// Role ids present in the mapping table but not defined by [`Role`]
    /// are skipped with a warning rather than failing the whole lookup.
    async fn load_roles(&self, user_id: i64) -> DomainResult<Vec<Role>> {
        let query = r#"
            SELECT r.id
            FROM ag_roles r
            INNER JOIN RoleMapping m ON m.roleId = r.id
            WHERE m.principalId = ? AND r.endtime IS NULL
            ORDER BY r.id
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_err(format!("Failed to load roles: {}", e)))?;

        let mut roles = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row
                .try_get("id")
                .map_err(|e| storage_err(format!("Failed to get role id: {}", e)))?;
            match Role::from_id(id) {
                Some(role) => roles.push(role),
                None => tracing::warn!(user_id, role_id = id, "skipping unknown role id"),
            }
        }
        Ok(roles)
    }

    async fn fetch_user(&self, row: sqlx::mysql::MySqlRow) -> DomainResult<User> {
        let mut user = Self::row_to_user(&row)?;
        user.roles = self.load_roles(user.id).await?;
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let query = r#"
            SELECT id, email, name, firstname, lastname, password,
                   begintime, updatedate, endtime
            FROM users
            WHERE email = ? AND endtime IS NULL
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_err(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(self.fetch_user(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let query = r#"
            SELECT id, email, name, firstname, lastname, password,
                   begintime, updatedate, endtime
            FROM users
            WHERE id = ? AND endtime IS NULL
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_err(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(self.fetch_user(row).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: NewUser) -> DomainResult<User> {
        let now = Utc::now();

        let query = r#"
            INSERT INTO users (email, name, firstname, lastname, password, begintime)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.password_hash)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_err(format!("Failed to create user: {}", e)))?;

        Ok(User {
            id: result.last_insert_id() as i64,
            email: user.email,
            password_hash: user.password_hash,
            name: user.name,
            first_name: user.first_name,
            last_name: user.last_name,
            roles: Vec::new(),
            created_at: Some(now),
            updated_at: None,
            deleted_at: None,
        })
    }
}

fn storage_err(message: String) -> DomainError {
    DomainError::Storage { message }
}
