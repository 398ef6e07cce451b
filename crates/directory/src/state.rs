//! Application state shared by front ends.

use std::sync::Arc;

use crate::config::DirectoryConfig;
use crate::db::Storage;
use crate::services::{AuthService, DirectoryService};
use crate::store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Application state: configuration plus one storage scope.
///
/// This struct is cheaply cloneable via `Arc`. Services are created on
/// demand and borrow the shared storage.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: DirectoryConfig,
    storage: Storage,
}

impl AppState {
    /// Create application state over an arbitrary store.
    #[must_use]
    pub fn new(config: DirectoryConfig, store: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                storage: Storage::new(store),
            }),
        }
    }

    /// Open the file store at `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the data directory cannot be created.
    pub fn open(config: DirectoryConfig) -> Result<Self, StoreError> {
        let store = FileStore::open(&config.data_dir)?;
        Ok(Self::new(config, store))
    }

    /// State backed by a fresh in-memory store.
    #[must_use]
    pub fn in_memory(config: DirectoryConfig) -> Self {
        Self::new(config, MemoryStore::new())
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &DirectoryConfig {
        &self.inner.config
    }

    /// Registration, login and session operations.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.inner.storage, self.inner.config.min_password_length)
    }

    /// Browsing, search and review operations.
    #[must_use]
    pub fn directory(&self) -> DirectoryService<'_> {
        DirectoryService::new(&self.inner.storage)
    }
}
