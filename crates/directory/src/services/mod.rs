//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Registration, login and the current session
//! - `directory` - Artisan browsing/search and reviews

pub mod auth;
pub mod directory;

pub use auth::{AuthError, AuthService};
pub use directory::{ArtisanProfile, DirectoryError, DirectoryService};
