//! Key-value store backends.
//!
//! The directory persists everything as JSON text under a handful of string
//! keys. [`KeyValueStore`] is the seam between the storage adapter and the
//! place those strings actually live:
//!
//! - [`MemoryStore`] - in-process map, one scope per instance
//! - [`FileStore`] - one `<key>.json` file per key under a data directory
//!
//! One store instance is one storage scope. Operations are individually
//! atomic but there are no multi-key transactions.

mod file;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a key-value backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the backend.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A previous writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,
}

/// A string-to-string store with read, overwrite and remove.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
