//! Review repository.

use artisan_connect_core::ArtisanId;

use super::{RepositoryError, Storage, keys};
use crate::models::Review;

/// Repository for review records.
///
/// The stored list is kept newest first by inserting at the front; reads
/// never re-sort.
pub struct ReviewRepository<'a> {
    storage: &'a Storage,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Reviews in stored order, optionally only those for one artisan.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the slot cannot be read or decoded.
    pub fn list(&self, artisan_id: Option<&ArtisanId>) -> Result<Vec<Review>, RepositoryError> {
        let reviews: Vec<Review> = self.storage.read(keys::REVIEWS)?.unwrap_or_default();

        Ok(match artisan_id {
            Some(id) => reviews.into_iter().filter(|r| &r.artisan_id == id).collect(),
            None => reviews,
        })
    }

    /// Insert a review at the front of the list.
    ///
    /// No duplicate check and no check that the artisan exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the slot cannot be read or written.
    pub fn add(&self, review: Review) -> Result<Review, RepositoryError> {
        let mut reviews = self.list(None)?;
        reviews.insert(0, review.clone());
        self.storage.write(keys::REVIEWS, &reviews)?;
        Ok(review)
    }
}
