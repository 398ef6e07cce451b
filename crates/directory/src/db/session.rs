//! Session slot repository.

use super::{RepositoryError, Storage, keys};
use crate::models::CurrentUser;

/// Repository for the single current-session slot.
pub struct SessionRepository<'a> {
    storage: &'a Storage,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The logged-in artisan, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the slot cannot be read or decoded.
    pub fn get(&self) -> Result<Option<CurrentUser>, RepositoryError> {
        self.storage.read(keys::CURRENT_USER)
    }

    /// Replace the session with `user`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the slot cannot be written.
    pub fn set(&self, user: &CurrentUser) -> Result<(), RepositoryError> {
        self.storage.write(keys::CURRENT_USER, user)
    }

    /// Clear the session. Clearing an empty session succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the slot cannot be removed.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.storage.remove(keys::CURRENT_USER)
    }
}
