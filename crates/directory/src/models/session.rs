//! Session-related types.

use serde::{Deserialize, Serialize};

use artisan_connect_core::{ArtisanId, BusinessName, Portfolio, Specialization};

/// The logged-in artisan as stored in the session slot.
///
/// Same shape as [`super::Artisan`] minus the password. There is no
/// password field to fill, so a session can never leak one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Artisan ID.
    pub id: ArtisanId,
    /// Business name.
    pub business_name: BusinessName,
    /// Trade offered.
    pub specialization: Specialization,
    /// Free-text location.
    pub location: String,
    /// Portfolio images.
    pub portfolio_images: Portfolio,
}
