//! Authentication token pair returned to callers.

use serde::{Deserialize, Serialize};

/// Token pair handed back after registration, login, or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// Signed access token
    pub token: String,

    /// Opaque refresh token id paired with the access token
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

impl AuthTokens {
    /// Create a new token pair
    pub fn new(token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}
