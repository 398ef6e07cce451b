//! Domain models for the directory.
//!
//! These are the records persisted by the storage adapter. Field names are
//! serialized in camelCase to keep the stored JSON layout stable.

pub mod artisan;
pub mod review;
pub mod session;

pub use artisan::{Artisan, ArtisanRegistration};
pub use review::Review;
pub use session::CurrentUser;
