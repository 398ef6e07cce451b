//! Unified error handling.
//!
//! Provides a unified `AppError` for front ends. Internal failures are
//! logged in full; callers show [`AppError::user_message`], which never
//! includes storage details.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::directory::DirectoryError;
use crate::store::StoreError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Store backend could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Storage operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Directory operation failed.
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad input from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether this is a failure of the system rather than of the input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::Store(_)
                | Self::Database(_)
                | Self::Auth(AuthError::Repository(_) | AuthError::PasswordHash)
                | Self::Directory(DirectoryError::Repository(_))
        )
    }

    /// Message safe to show to the person at the keyboard.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_internal() {
            tracing::error!(error = %self, "Internal error");
        }

        match self {
            Self::Config(err) => err.to_string(),
            Self::Store(_) | Self::Database(_) => "Internal storage error".to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => {
                    "Invalid business name or password. Please check your credentials.".to_string()
                }
                AuthError::BusinessNameTaken => {
                    "An artisan with this business name already exists.".to_string()
                }
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::InvalidBusinessName(e) => e.to_string(),
                AuthError::MissingField(field) => format!("Please provide a {field}."),
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    "Authentication error".to_string()
                }
            },
            Self::Directory(err) => match err {
                DirectoryError::BusinessNameTaken => {
                    "An artisan with this business name already exists.".to_string()
                }
                DirectoryError::MissingField(field) => format!("Please provide a {field}."),
                DirectoryError::Repository(_) => "Internal storage error".to_string(),
            },
            _ => self.to_string(),
        }
    }
}
