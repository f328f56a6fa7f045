//! Domain service for citizen and administrator accounts.
//!
//! Registration, citizen login and admin login. Credentials are compared as
//! stored; no session identity is issued by any of these operations.

use thiserror::Error;

use crate::models::user::{NewUser, User};

/// Errors specific to account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AccountError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Domain service trait for accounts.
#[async_trait::async_trait]
pub trait AccountService: Send + Sync {
    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::DuplicateEmail`] if the email is already registered.
    async fn register(&self, user: NewUser) -> Result<User, AccountError>;

    /// Checks an email/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidCredentials`] unless both match one user.
    async fn login(&self, email: &str, password: &str) -> Result<User, AccountError>;

    /// Checks an admin username/password pair.
    async fn admin_login(&self, username: &str, password: &str) -> Result<(), AccountError>;
}
