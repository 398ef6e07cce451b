//! Artisan Connect directory library.
//!
//! Persistence and query layer for the artisan directory:
//!
//! - [`store`] - key-value backends (in-memory, directory of JSON files)
//! - [`db`] - JSON storage adapter and the artisan/review/session repositories
//! - [`services`] - registration/login/session and directory/review services
//! - [`state`] - configuration plus one storage scope, handed to front ends
//!
//! All operations are synchronous. One storage scope is meant to be driven
//! by one actor at a time; see [`db`] for the consistency caveats.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

pub use config::DirectoryConfig;
pub use error::AppError;
pub use state::AppState;
