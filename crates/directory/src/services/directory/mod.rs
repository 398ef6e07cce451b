//! Directory service.
//!
//! Browsing, lookup and reviews. Registration with a password goes through
//! [`crate::services::auth::AuthService`]; this service only handles
//! already-built records.

mod error;

pub use error::DirectoryError;

use artisan_connect_core::ArtisanId;

use crate::db::artisans::ArtisanRepository;
use crate::db::reviews::ReviewRepository;
use crate::db::{RepositoryError, Storage};
use crate::models::{Artisan, CurrentUser, Review};

/// An artisan's public profile with its review thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtisanProfile {
    /// The artisan, without the stored password.
    pub artisan: CurrentUser,
    /// Reviews for this artisan, newest first.
    pub reviews: Vec<Review>,
}

/// Directory service.
pub struct DirectoryService<'a> {
    artisans: ArtisanRepository<'a>,
    reviews: ReviewRepository<'a>,
}

impl<'a> DirectoryService<'a> {
    /// Create a new directory service.
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self {
            artisans: ArtisanRepository::new(storage),
            reviews: ReviewRepository::new(storage),
        }
    }

    // =========================================================================
    // Artisans
    // =========================================================================

    /// All artisans in registration order.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Repository` if storage cannot be read.
    pub fn list_artisans(&self) -> Result<Vec<Artisan>, DirectoryError> {
        Ok(self.artisans.list()?)
    }

    /// Find an artisan by ID.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Repository` if storage cannot be read.
    pub fn find_artisan(&self, id: &ArtisanId) -> Result<Option<Artisan>, DirectoryError> {
        Ok(self.artisans.get_by_id(id)?)
    }

    /// Artisans whose business name, location or specialization contains
    /// `query`, ignoring case. The empty query returns everyone; whitespace
    /// is matched literally.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Repository` if storage cannot be read.
    pub fn search(&self, query: &str) -> Result<Vec<Artisan>, DirectoryError> {
        Ok(self
            .artisans
            .list()?
            .into_iter()
            .filter(|a| a.matches_query(query))
            .collect())
    }

    /// Append a fully built artisan record.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::BusinessNameTaken` if an artisan with the same
    /// business name exists, ignoring case.
    /// Returns `DirectoryError::Repository` if storage fails.
    pub fn create_artisan(&self, artisan: Artisan) -> Result<Artisan, DirectoryError> {
        self.artisans.create(artisan).map_err(|e| match e {
            RepositoryError::Conflict(_) => DirectoryError::BusinessNameTaken,
            other => DirectoryError::Repository(other),
        })
    }

    /// Profile view: the password-free artisan plus its reviews.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Repository` if storage cannot be read.
    pub fn profile(&self, id: &ArtisanId) -> Result<Option<ArtisanProfile>, DirectoryError> {
        let Some(artisan) = self.artisans.get_by_id(id)? else {
            return Ok(None);
        };
        let reviews = self.reviews.list(Some(id))?;

        Ok(Some(ArtisanProfile {
            artisan: artisan.to_current_user(),
            reviews,
        }))
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Reviews in stored order (newest first), optionally for one artisan.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Repository` if storage cannot be read.
    pub fn list_reviews(
        &self,
        artisan_id: Option<&ArtisanId>,
    ) -> Result<Vec<Review>, DirectoryError> {
        Ok(self.reviews.list(artisan_id)?)
    }

    /// Store a review at the front of the list.
    ///
    /// No duplicate check and no check that the artisan exists.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Repository` if storage fails.
    pub fn add_review(&self, review: Review) -> Result<Review, DirectoryError> {
        let review = self.reviews.add(review)?;
        tracing::info!(
            review_id = %review.id,
            artisan_id = %review.artisan_id,
            "Review added"
        );
        Ok(review)
    }

    /// Build a review from form input and store it.
    ///
    /// Author and comment must not be blank; both are stored as typed.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::MissingField` if author or comment is blank.
    /// Returns `DirectoryError::Repository` if storage fails.
    pub fn submit_review(
        &self,
        artisan_id: ArtisanId,
        author: &str,
        comment: &str,
    ) -> Result<Review, DirectoryError> {
        if author.trim().is_empty() {
            return Err(DirectoryError::MissingField("author"));
        }
        if comment.trim().is_empty() {
            return Err(DirectoryError::MissingField("comment"));
        }

        self.add_review(Review::new(
            artisan_id,
            author.to_owned(),
            comment.to_owned(),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use artisan_connect_core::{
        BusinessName, ImagePayload, PasswordHash, ReviewId, Specialization,
    };

    use super::*;
    use crate::store::MemoryStore;

    fn artisan(id: &str, name: &str, spec: Specialization, location: &str) -> Artisan {
        Artisan {
            id: ArtisanId::new(id),
            business_name: BusinessName::parse(name).unwrap(),
            specialization: spec,
            location: location.to_owned(),
            portfolio_images: [
                ImagePayload::parse("data:image/png;base64,AA==").unwrap(),
                ImagePayload::parse("data:image/png;base64,AQ==").unwrap(),
            ],
            password: PasswordHash::new("$argon2id$stub".to_owned()),
        }
    }

    fn seeded(storage: &Storage) -> DirectoryService<'_> {
        let directory = DirectoryService::new(storage);
        directory
            .create_artisan(artisan("1", "Acme Co", Specialization::Carpenter, "Riverside"))
            .unwrap();
        directory
            .create_artisan(artisan("2", "Bright Sparks", Specialization::Electrician, "Hilltop"))
            .unwrap();
        directory
            .create_artisan(artisan("3", "Stitch & Co", Specialization::Tailor, "River Bend"))
            .unwrap();
        directory
    }

    fn names(artisans: &[Artisan]) -> Vec<&str> {
        artisans.iter().map(|a| a.business_name.as_str()).collect()
    }

    #[test]
    fn test_search() {
        let storage = Storage::new(MemoryStore::new());
        let directory = seeded(&storage);

        assert_eq!(names(&directory.search("").unwrap()).len(), 3);
        assert_eq!(
            names(&directory.search("river").unwrap()),
            vec!["Acme Co", "Stitch & Co"]
        );
        assert_eq!(
            names(&directory.search("ELECTRIC").unwrap()),
            vec!["Bright Sparks"]
        );
        assert_eq!(
            names(&directory.search("& co").unwrap()),
            vec!["Stitch & Co"]
        );
        assert!(directory.search("mason").unwrap().is_empty());
        assert!(directory.search("   ").unwrap().is_empty());
    }

    #[test]
    fn test_create_artisan_conflict() {
        let storage = Storage::new(MemoryStore::new());
        let directory = seeded(&storage);
        assert!(matches!(
            directory.create_artisan(artisan("9", "acme co", Specialization::Other, "x")),
            Err(DirectoryError::BusinessNameTaken)
        ));
    }

    #[test]
    fn test_submit_review_validates() {
        let storage = Storage::new(MemoryStore::new());
        let directory = DirectoryService::new(&storage);

        assert!(matches!(
            directory.submit_review(ArtisanId::new("1"), " ", "Nice"),
            Err(DirectoryError::MissingField("author"))
        ));
        assert!(matches!(
            directory.submit_review(ArtisanId::new("1"), "Ada", ""),
            Err(DirectoryError::MissingField("comment"))
        ));
        assert!(directory.list_reviews(None).unwrap().is_empty());
    }

    #[test]
    fn test_add_review_for_unknown_artisan_is_accepted() {
        let storage = Storage::new(MemoryStore::new());
        let directory = DirectoryService::new(&storage);
        let review = Review {
            id: ReviewId::new("r1"),
            artisan_id: ArtisanId::new("ghost"),
            author: "Ada".to_owned(),
            comment: "Who?".to_owned(),
            timestamp: 0,
        };
        directory.add_review(review.clone()).unwrap();
        assert_eq!(
            directory.list_reviews(Some(&ArtisanId::new("ghost"))).unwrap(),
            vec![review]
        );
    }

    #[test]
    fn test_profile() {
        let storage = Storage::new(MemoryStore::new());
        let directory = seeded(&storage);
        directory
            .submit_review(ArtisanId::new("1"), "Ada", "First")
            .unwrap();
        directory
            .submit_review(ArtisanId::new("2"), "Bo", "Elsewhere")
            .unwrap();
        let newest = directory
            .submit_review(ArtisanId::new("1"), "Cy", "Second")
            .unwrap();

        let profile = directory.profile(&ArtisanId::new("1")).unwrap().unwrap();
        assert_eq!(profile.artisan.business_name.as_str(), "Acme Co");
        assert_eq!(profile.reviews.len(), 2);
        assert_eq!(profile.reviews.first(), Some(&newest));

        assert!(directory.profile(&ArtisanId::new("404")).unwrap().is_none());
    }
}
