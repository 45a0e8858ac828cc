//! Repository interfaces consumed by the core services.
//!
//! Concrete implementations live in the infrastructure crate; mock
//! implementations for testing live alongside each trait.

pub mod token;
pub mod user;

pub use token::TokenRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use token::MockTokenRepository;
#[cfg(test)]
pub use user::MockUserRepository;
