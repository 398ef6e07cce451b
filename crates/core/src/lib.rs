//! Artisan Connect Core - Shared types library.
//!
//! This crate provides common types used across all Artisan Connect components:
//! - `directory` - Storage adapter, repositories and the directory/session services
//! - `cli` - Command-line front end for browsing and managing the directory
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, business names, specializations,
//!   stored credentials and portfolio images

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
