//! User entity and creation payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Platform user with its assigned roles.
///
/// Users are owned by the storage layer; the core reads them to issue and
/// refresh tokens but never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user id (storage primary key)
    pub id: i64,

    /// Login email, unique among live users
    pub email: String,

    /// Bcrypt hash of the user's password; never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Display name
    pub name: Option<String>,

    /// Given name
    pub first_name: Option<String>,

    /// Family name
    pub last_name: Option<String>,

    /// Roles assigned to the user
    pub roles: Vec<Role>,

    /// Timestamp when the user was created
    pub created_at: Option<DateTime<Utc>>,

    /// Timestamp of the last update
    pub updated_at: Option<DateTime<Utc>>,

    /// Soft-delete timestamp; a deleted user cannot authenticate
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check whether the user holds a specific role
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Check whether the user has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Payload for creating a new user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl NewUser {
    /// Create a minimal registration payload
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            name: None,
            first_name: None,
            last_name: None,
        }
    }
}
