//! Authentication service.
//!
//! Registration, login and the single per-scope session. Passwords are
//! stored as Argon2id hashes; the clear text never reaches storage.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;
use secrecy::{ExposeSecret, SecretString};

use artisan_connect_core::{ArtisanId, BusinessName};

use crate::db::artisans::ArtisanRepository;
use crate::db::session::SessionRepository;
use crate::db::{RepositoryError, Storage};
use crate::models::{Artisan, ArtisanRegistration, CurrentUser};

/// Default minimum password length.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Business names are unique ignoring case at registration, but login
/// matches them exactly: "Acme Co" cannot log in as "acme co".
pub struct AuthService<'a> {
    artisans: ArtisanRepository<'a>,
    sessions: SessionRepository<'a>,
    min_password_length: usize,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(storage: &'a Storage, min_password_length: usize) -> Self {
        Self {
            artisans: ArtisanRepository::new(storage),
            sessions: SessionRepository::new(storage),
            min_password_length,
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a new artisan.
    ///
    /// Does not log the artisan in; call [`Self::login`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidBusinessName` if the business name is blank or too long.
    /// Returns `AuthError::MissingField` if the location is blank.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::BusinessNameTaken` if the name is taken, ignoring case.
    pub fn register(&self, registration: ArtisanRegistration) -> Result<Artisan, AuthError> {
        let business_name = BusinessName::parse(&registration.business_name)?;

        if registration.location.trim().is_empty() {
            return Err(AuthError::MissingField("location"));
        }

        let password = registration.password.expose_secret();
        validate_password(password, self.min_password_length)?;
        let password = hash_password(password)?;

        let artisan = Artisan {
            id: ArtisanId::generate(),
            business_name,
            specialization: registration.specialization,
            location: registration.location,
            portfolio_images: registration.portfolio_images,
            password,
        };

        let artisan = self.artisans.create(artisan).map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                tracing::warn!("Registration rejected: business name already taken");
                AuthError::BusinessNameTaken
            }
            other => AuthError::Repository(other),
        })?;

        tracing::info!(
            artisan_id = %artisan.id,
            specialization = %artisan.specialization,
            "Artisan registered"
        );
        Ok(artisan)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Login with business name and password.
    ///
    /// On success the password-free copy of the artisan becomes the current
    /// session (replacing any previous one) and the full record is returned.
    ///
    /// Records written by older clients keep the clear-text password in the
    /// `password` field. Such a record still logs in, and the stored value is
    /// replaced by an Argon2id hash on that first successful login.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no artisan has exactly this
    /// business name and password. Unknown names and wrong passwords are
    /// not distinguished.
    pub fn login(
        &self,
        business_name: &str,
        password: &SecretString,
    ) -> Result<Artisan, AuthError> {
        let Some(artisan) = self.artisans.get_by_business_name(business_name)? else {
            return Err(login_failed());
        };

        let password = password.expose_secret();
        let stored = artisan.password.as_str();
        let artisan = if PasswordHash::new(stored).is_ok() {
            verify_password(password, stored).map_err(|_| login_failed())?;
            artisan
        } else if !password.is_empty() && stored == password {
            self.upgrade_legacy_password(&artisan.id, password)?
        } else {
            return Err(login_failed());
        };

        self.sessions.set(&artisan.to_current_user())?;
        tracing::info!(artisan_id = %artisan.id, "Artisan logged in");

        Ok(artisan)
    }

    /// Replace a clear-text password with its hash.
    fn upgrade_legacy_password(
        &self,
        id: &ArtisanId,
        password: &str,
    ) -> Result<Artisan, AuthError> {
        let hash = hash_password(password)?;
        let artisan = self
            .artisans
            .set_password(id, hash)?
            .ok_or_else(login_failed)?;

        tracing::info!(artisan_id = %artisan.id, "Upgraded clear-text password to Argon2id");
        Ok(artisan)
    }

    /// The logged-in artisan, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the session slot cannot be read.
    pub fn current_user(&self) -> Result<Option<CurrentUser>, AuthError> {
        Ok(self.sessions.get()?)
    }

    /// Clear the session. Safe to call when nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the session slot cannot be cleared.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        tracing::info!("Session cleared");
        Ok(())
    }
}

fn login_failed() -> AuthError {
    tracing::warn!("Login failed: invalid credentials");
    AuthError::InvalidCredentials
}

/// Validate password meets requirements.
fn validate_password(password: &str, min_length: usize) -> Result<(), AuthError> {
    if password.is_empty() {
        return Err(AuthError::MissingField("password"));
    }

    if password.chars().count() < min_length {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {min_length} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<artisan_connect_core::PasswordHash, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| artisan_connect_core::PasswordHash::new(hash.to_string()))
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use artisan_connect_core::{BusinessName, ImagePayload, Specialization};

    use super::*;
    use crate::store::MemoryStore;

    fn secret(password: &str) -> SecretString {
        SecretString::from(password.to_owned())
    }

    fn registration(name: &str, password: &str) -> ArtisanRegistration {
        ArtisanRegistration {
            business_name: name.to_owned(),
            specialization: Specialization::Carpenter,
            location: "Riverside".to_owned(),
            portfolio_images: [
                ImagePayload::parse("data:image/png;base64,AA==").unwrap(),
                ImagePayload::parse("data:image/png;base64,AQ==").unwrap(),
            ],
            password: secret(password),
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("secret123").unwrap();
        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(verify_password("secret123", hash.as_str()).is_ok());
        assert!(verify_password("wrong", hash.as_str()).is_err());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("secret123").unwrap();
        let b = hash_password("secret123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_non_phc_hash() {
        assert!(matches!(
            verify_password("secret123", "secret123"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_validate_password() {
        assert!(matches!(
            validate_password("", 8),
            Err(AuthError::MissingField("password"))
        ));
        assert!(matches!(
            validate_password("short", 8),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("long enough", 8).is_ok());
        assert!(validate_password("x", 1).is_ok());
    }

    #[test]
    fn test_register_stores_hash_not_password() {
        let storage = Storage::new(MemoryStore::new());
        let auth = AuthService::new(&storage, DEFAULT_MIN_PASSWORD_LENGTH);
        let artisan = auth.register(registration("Acme Co", "secret123")).unwrap();
        assert_ne!(artisan.password.as_str(), "secret123");
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        let storage = Storage::new(MemoryStore::new());
        let auth = AuthService::new(&storage, DEFAULT_MIN_PASSWORD_LENGTH);

        assert!(matches!(
            auth.register(registration("  ", "secret123")),
            Err(AuthError::InvalidBusinessName(_))
        ));

        let mut no_location = registration("Acme Co", "secret123");
        no_location.location = " ".to_owned();
        assert!(matches!(
            auth.register(no_location),
            Err(AuthError::MissingField("location"))
        ));
    }

    #[test]
    fn test_register_conflict() {
        let storage = Storage::new(MemoryStore::new());
        let auth = AuthService::new(&storage, DEFAULT_MIN_PASSWORD_LENGTH);
        auth.register(registration("Acme Co", "secret123")).unwrap();
        assert!(matches!(
            auth.register(registration("ACME CO", "other-pass")),
            Err(AuthError::BusinessNameTaken)
        ));
    }

    #[test]
    fn test_login_sets_session() {
        let storage = Storage::new(MemoryStore::new());
        let auth = AuthService::new(&storage, DEFAULT_MIN_PASSWORD_LENGTH);
        let registered = auth.register(registration("Acme Co", "secret123")).unwrap();

        let logged_in = auth.login("Acme Co", &secret("secret123")).unwrap();
        assert_eq!(logged_in, registered);
        assert_eq!(
            auth.current_user().unwrap(),
            Some(registered.to_current_user())
        );
    }

    #[test]
    fn test_failed_login_keeps_previous_session() {
        let storage = Storage::new(MemoryStore::new());
        let auth = AuthService::new(&storage, DEFAULT_MIN_PASSWORD_LENGTH);
        let registered = auth.register(registration("Acme Co", "secret123")).unwrap();
        auth.login("Acme Co", &secret("secret123")).unwrap();

        assert!(matches!(
            auth.login("Acme Co", &secret("wrong-pass")),
            Err(AuthError::InvalidCredentials)
        ));
        assert_eq!(
            auth.current_user().unwrap().map(|u| u.id),
            Some(registered.id)
        );
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = Storage::new(MemoryStore::new());
        let auth = AuthService::new(&storage, DEFAULT_MIN_PASSWORD_LENGTH);
        auth.logout().unwrap();
        auth.logout().unwrap();
        assert!(auth.current_user().unwrap().is_none());
    }

    fn legacy_artisan(password: &str) -> Artisan {
        Artisan {
            id: ArtisanId::new("1712345600000"),
            business_name: BusinessName::parse("Acme Co").unwrap(),
            specialization: Specialization::Carpenter,
            location: "Riverside".to_owned(),
            portfolio_images: registration("Acme Co", "unused-pw").portfolio_images,
            password: artisan_connect_core::PasswordHash::new(password.to_owned()),
        }
    }

    #[test]
    fn test_login_upgrades_clear_text_password() {
        let storage = Storage::new(MemoryStore::new());
        ArtisanRepository::new(&storage)
            .create(legacy_artisan("secret123"))
            .unwrap();
        let auth = AuthService::new(&storage, DEFAULT_MIN_PASSWORD_LENGTH);

        let artisan = auth.login("Acme Co", &secret("secret123")).unwrap();
        assert!(artisan.password.as_str().starts_with("$argon2id$"));

        let stored = ArtisanRepository::new(&storage)
            .get_by_id(&artisan.id)
            .unwrap()
            .unwrap();
        assert_eq!(stored, artisan);
        assert!(verify_password("secret123", stored.password.as_str()).is_ok());
        assert_eq!(
            auth.current_user().unwrap(),
            Some(artisan.to_current_user())
        );
    }

    #[test]
    fn test_clear_text_password_must_match_exactly() {
        let storage = Storage::new(MemoryStore::new());
        ArtisanRepository::new(&storage)
            .create(legacy_artisan("secret123"))
            .unwrap();
        let auth = AuthService::new(&storage, DEFAULT_MIN_PASSWORD_LENGTH);

        assert!(matches!(
            auth.login("Acme Co", &secret("Secret123")),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(auth.current_user().unwrap().is_none());
    }

    #[test]
    fn test_empty_stored_password_never_matches() {
        let storage = Storage::new(MemoryStore::new());
        ArtisanRepository::new(&storage)
            .create(legacy_artisan(""))
            .unwrap();
        let auth = AuthService::new(&storage, DEFAULT_MIN_PASSWORD_LENGTH);

        assert!(matches!(
            auth.login("Acme Co", &secret("")),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
