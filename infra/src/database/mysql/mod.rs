//! MySQL repository implementations
//!
//! Concrete implementations of the `gl_core` repository traits against
//! the platform schema (`users`, `ag_roles`, `RoleMapping`,
//! `RefreshToken`, `AccessToken`).

mod token_repository_impl;
mod user_repository_impl;

pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
