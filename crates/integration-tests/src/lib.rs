//! Integration tests for Artisan Connect.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p artisan-connect-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `directory_properties` - Uniqueness, ordering and round-trip properties
//! - `session_flow` - Register/login/logout scenarios
//! - `file_store` - Persistence across separately opened file stores
//!
//! This library holds the shared fixtures.

use secrecy::SecretString;
use tempfile::TempDir;

use artisan_connect_core::{ImagePayload, Portfolio, Specialization};
use artisan_connect_directory::models::ArtisanRegistration;
use artisan_connect_directory::{AppState, DirectoryConfig};

/// Two small distinct portfolio images.
///
/// # Panics
///
/// Never; the inputs are valid constants.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn portfolio() -> Portfolio {
    [
        ImagePayload::from_bytes("image/png", b"\x89PNG-first").unwrap(),
        ImagePayload::from_bytes("image/jpeg", b"\xff\xd8-second").unwrap(),
    ]
}

/// A registration for `name` with `password` and fixed other fields.
#[must_use]
pub fn registration(name: &str, password: &str) -> ArtisanRegistration {
    ArtisanRegistration {
        business_name: name.to_owned(),
        specialization: Specialization::Carpenter,
        location: "Riverside".to_owned(),
        portfolio_images: portfolio(),
        password: secret(password),
    }
}

/// Application state over a fresh in-memory store.
#[must_use]
pub fn memory_state() -> AppState {
    AppState::in_memory(DirectoryConfig::default())
}

/// A fresh temporary data directory, removed when dropped.
///
/// # Panics
///
/// Panics if the system temp directory is not writable.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Wrap a clear-text test password.
#[must_use]
pub fn secret(password: &str) -> SecretString {
    SecretString::from(password.to_owned())
}
