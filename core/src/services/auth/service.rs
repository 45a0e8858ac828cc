//! Main authentication service implementation

use std::sync::Arc;

use gl_shared::utils::validation;

use crate::domain::entities::user::{NewUser, User};
use crate::domain::value_objects::AuthTokens;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::cache::CacheService;
use crate::services::token::TokenService;

use super::password;

/// Authentication service for registration, login, refresh, and logout.
///
/// Composes the user repository with the token lifecycle service; all
/// token semantics (rotation, blacklisting, opaque failures) live there.
pub struct AuthService<R, U, C>
where
    R: TokenRepository,
    U: UserRepository,
    C: CacheService,
{
    /// User repository for credential checks and registration
    users: Arc<U>,
    /// Token lifecycle service
    tokens: Arc<TokenService<R, U, C>>,
}

impl<R, U, C> AuthService<R, U, C>
where
    R: TokenRepository,
    U: UserRepository,
    C: CacheService,
{
    /// Create a new authentication service
    pub fn new(users: Arc<U>, tokens: Arc<TokenService<R, U, C>>) -> Self {
        Self { users, tokens }
    }

    /// Register a new user and hand out their first token pair
    ///
    /// # Returns
    ///
    /// * `Ok(AuthTokens)` - Access token plus paired refresh token
    /// * `Err(DomainError)` - Invalid email, email taken, or storage failure
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<AuthTokens> {
        let email = validation::normalize_email(email);
        if !validation::is_valid_email(&email) {
            return Err(AuthError::InvalidEmail.into());
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = password::hash_password(password)?;
        let user = self.users.create(NewUser::new(email, password_hash)).await?;

        self.issue_pair(&user).await
    }

    /// Authenticate with email and password
    ///
    /// An unknown email and a wrong password produce the same error, so a
    /// caller cannot probe which accounts exist.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthTokens> {
        let email = validation::normalize_email(email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_pair(&user).await
    }

    /// Exchange a refresh token for a fresh token pair
    pub async fn refresh(&self, refresh_token_id: &str) -> DomainResult<AuthTokens> {
        let token = self.tokens.refresh_token(refresh_token_id).await?;
        let refresh_token = self.tokens.retrieve_refresh_token(&token).await?;
        Ok(AuthTokens::new(token, refresh_token))
    }

    /// Revoke an access token and its paired refresh token
    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        self.tokens.blacklist_token(token).await
    }

    async fn issue_pair(&self, user: &User) -> DomainResult<AuthTokens> {
        let token = self.tokens.issue_token(user, &user.roles, None).await?;
        let refresh_token = self.tokens.retrieve_refresh_token(&token).await?;
        Ok(AuthTokens::new(token, refresh_token))
    }
}
