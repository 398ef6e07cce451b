//! Directory error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur in directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Another artisan already uses this business name (ignoring case).
    #[error("business name already taken")]
    BusinessNameTaken,

    /// A required review field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Repository/storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}
