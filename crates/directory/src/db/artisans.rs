//! Artisan repository.
//!
//! Artisans are appended and never deleted. The only in-place change is
//! replacing a stored password credential.

use artisan_connect_core::{ArtisanId, PasswordHash};

use super::{RepositoryError, Storage, keys};
use crate::models::Artisan;

/// Repository for artisan records.
pub struct ArtisanRepository<'a> {
    storage: &'a Storage,
}

impl<'a> ArtisanRepository<'a> {
    /// Create a new artisan repository.
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All artisans in insertion order; empty if none were ever stored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the slot cannot be read or decoded.
    pub fn list(&self) -> Result<Vec<Artisan>, RepositoryError> {
        Ok(self.storage.read(keys::ARTISANS)?.unwrap_or_default())
    }

    /// Get an artisan by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the slot cannot be read or decoded.
    pub fn get_by_id(&self, id: &ArtisanId) -> Result<Option<Artisan>, RepositoryError> {
        Ok(self.list()?.into_iter().find(|a| &a.id == id))
    }

    /// Get an artisan whose business name matches `business_name` exactly
    /// (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the slot cannot be read or decoded.
    pub fn get_by_business_name(
        &self,
        business_name: &str,
    ) -> Result<Option<Artisan>, RepositoryError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|a| a.business_name.as_str() == business_name))
    }

    /// Append a new artisan.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if an artisan with the same business
    /// name exists, compared case-insensitively.
    /// Returns `RepositoryError` if the slot cannot be read or written.
    pub fn create(&self, artisan: Artisan) -> Result<Artisan, RepositoryError> {
        let mut artisans = self.list()?;

        if artisans
            .iter()
            .any(|a| a.business_name.eq_ignore_case(&artisan.business_name))
        {
            return Err(RepositoryError::Conflict(
                "business name already exists".to_owned(),
            ));
        }

        artisans.push(artisan.clone());
        self.storage.write(keys::ARTISANS, &artisans)?;

        Ok(artisan)
    }

    /// Replace the stored password of the artisan with `id`.
    ///
    /// Returns the updated record, or `None` if no artisan has this ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the slot cannot be read or written.
    pub fn set_password(
        &self,
        id: &ArtisanId,
        password: PasswordHash,
    ) -> Result<Option<Artisan>, RepositoryError> {
        let mut artisans = self.list()?;

        let Some(artisan) = artisans.iter_mut().find(|a| &a.id == id) else {
            return Ok(None);
        };
        artisan.password = password;
        let updated = artisan.clone();

        self.storage.write(keys::ARTISANS, &artisans)?;
        Ok(Some(updated))
    }
}
