//! Review domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use artisan_connect_core::{ArtisanId, ReviewId};

/// Feedback left on an artisan's profile.
///
/// `artisan_id` is a weak reference: nothing checks that the artisan exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review ID.
    pub id: ReviewId,
    /// Artisan the review is about.
    pub artisan_id: ArtisanId,
    /// Free-text display name of the reviewer.
    pub author: String,
    /// Review body.
    pub comment: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Review {
    /// Build a review stamped with a fresh ID and the current time.
    #[must_use]
    pub fn new(artisan_id: ArtisanId, author: String, comment: String) -> Self {
        Self {
            id: ReviewId::generate(),
            artisan_id,
            author,
            comment,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// The creation timestamp as a `DateTime`, if it is in range.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}
