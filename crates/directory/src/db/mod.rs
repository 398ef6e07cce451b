//! Storage adapter and repositories.
//!
//! # Layout
//!
//! Everything lives in three JSON slots of a [`KeyValueStore`]:
//!
//! - `artisanconnect_artisans` - array of artisans, insertion order
//! - `artisanconnect_reviews` - array of reviews, newest first
//! - `artisanconnect_current_user` - the logged-in artisan without password
//!
//! A slot that was never written reads as "absent" (empty list, no session).
//!
//! # Consistency
//!
//! Repositories do read-modify-write on whole slots without locking across
//! the read and the write. A storage scope must be driven by a single actor;
//! two concurrent creates can both pass the uniqueness check.

pub mod artisans;
pub mod reviews;
pub mod session;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::{KeyValueStore, StoreError};

/// Slot names in the key-value store.
pub mod keys {
    /// Key for the artisan list.
    pub const ARTISANS: &str = "artisanconnect_artisans";

    /// Key for the review list.
    pub const REVIEWS: &str = "artisanconnect_reviews";

    /// Key for the logged-in artisan.
    pub const CURRENT_USER: &str = "artisanconnect_current_user";
}

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The underlying key-value store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A stored slot does not contain valid JSON for its type.
    #[error("data corruption in {key}: {source}")]
    DataCorruption {
        /// Slot that failed to decode.
        key: &'static str,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Uniqueness constraint violation (e.g. business name taken).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// JSON encode/decode over a [`KeyValueStore`].
///
/// `read` returns `None` for a slot that was never written, `write`
/// overwrites unconditionally, and `remove` of an absent slot is a no-op.
pub struct Storage {
    store: Box<dyn KeyValueStore>,
}

impl Storage {
    /// Wrap a key-value backend.
    #[must_use]
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Read and decode the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the backend fails.
    /// Returns `RepositoryError::DataCorruption` if the stored JSON does not decode.
    pub fn read<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, RepositoryError> {
        let Some(raw) = self.store.get(key)? else {
            tracing::debug!(key, "Slot empty");
            return Ok(None);
        };

        let value = serde_json::from_str(&raw)
            .map_err(|source| RepositoryError::DataCorruption { key, source })?;
        tracing::debug!(key, bytes = raw.len(), "Read slot");
        Ok(Some(value))
    }

    /// Encode `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Serialization` if encoding fails.
    /// Returns `RepositoryError::Store` if the backend fails.
    pub fn write<T: Serialize + ?Sized>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(value).map_err(RepositoryError::Serialization)?;
        self.store.set(key, &raw)?;
        tracing::debug!(key, bytes = raw.len(), "Wrote slot");
        Ok(())
    }

    /// Clear whatever is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the backend fails.
    pub fn remove(&self, key: &'static str) -> Result<(), RepositoryError> {
        self.store.remove(key)?;
        tracing::debug!(key, "Removed slot");
        Ok(())
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_read_absent() {
        let storage = Storage::new(MemoryStore::new());
        let value: Option<Vec<String>> = storage.read(keys::REVIEWS).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let storage = Storage::new(MemoryStore::new());
        storage.write(keys::REVIEWS, &vec!["a", "b"]).unwrap();
        let value: Option<Vec<String>> = storage.read(keys::REVIEWS).unwrap();
        assert_eq!(value.unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_writes_plain_json_text() {
        let store = Arc::new(MemoryStore::new());
        let storage = Storage::new(Arc::clone(&store));
        storage.write(keys::ARTISANS, &Vec::<u8>::new()).unwrap();
        assert_eq!(store.get(keys::ARTISANS).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let storage = Storage::new(MemoryStore::new());
        storage.remove(keys::CURRENT_USER).unwrap();
        storage.remove(keys::CURRENT_USER).unwrap();
    }

    #[test]
    fn test_corrupt_slot_is_reported() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::ARTISANS, "{not json").unwrap();
        let storage = Storage::new(Arc::clone(&store));
        let result: Result<Option<Vec<String>>, _> = storage.read(keys::ARTISANS);
        assert!(matches!(
            result,
            Err(RepositoryError::DataCorruption {
                key: keys::ARTISANS,
                ..
            })
        ));
    }
}
