//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid business name.
    #[error("invalid business name: {0}")]
    InvalidBusinessName(#[from] artisan_connect_core::BusinessNameError),

    /// A required registration field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Invalid credentials (unknown business name or wrong password).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Another artisan already uses this business name (ignoring case).
    #[error("business name already taken")]
    BusinessNameTaken,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Repository/storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
