//! Core types for Artisan Connect.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod business_name;
pub mod credential;
pub mod id;
pub mod portfolio;
pub mod specialization;

pub use business_name::{BusinessName, BusinessNameError};
pub use credential::PasswordHash;
pub use id::*;
pub use portfolio::{ImagePayload, ImagePayloadError, Portfolio};
pub use specialization::Specialization;
