//! Artisan domain types.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use artisan_connect_core::{ArtisanId, BusinessName, PasswordHash, Portfolio, Specialization};

use super::session::CurrentUser;

/// A registered service provider (domain type).
///
/// Created once at registration and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    /// Unique artisan ID.
    pub id: ArtisanId,
    /// Display name, also the login identifier.
    pub business_name: BusinessName,
    /// Trade offered.
    pub specialization: Specialization,
    /// Free-text location (neighborhood, city).
    pub location: String,
    /// The two portfolio images supplied at registration.
    pub portfolio_images: Portfolio,
    /// Argon2id hash of the artisan's password.
    pub password: PasswordHash,
}

impl Artisan {
    /// Copy of this record without the password, suitable for the session.
    #[must_use]
    pub fn to_current_user(&self) -> CurrentUser {
        CurrentUser {
            id: self.id.clone(),
            business_name: self.business_name.clone(),
            specialization: self.specialization,
            location: self.location.clone(),
            portfolio_images: self.portfolio_images.clone(),
        }
    }

    /// Directory search predicate.
    ///
    /// Case-insensitive substring match against the business name, location
    /// and specialization. An empty query matches every artisan.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.business_name.folded().contains(&query)
            || self.location.to_lowercase().contains(&query)
            || self.specialization.as_str().to_lowercase().contains(&query)
    }
}

/// Input for registering a new artisan.
///
/// Carries the clear-text password only until the auth service hashes it.
#[derive(Debug)]
pub struct ArtisanRegistration {
    /// Requested business name.
    pub business_name: String,
    /// Trade offered.
    pub specialization: Specialization,
    /// Free-text location.
    pub location: String,
    /// Exactly two portfolio images.
    pub portfolio_images: Portfolio,
    /// Clear-text password.
    pub password: SecretString,
}
