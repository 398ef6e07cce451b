//! Subcommand implementations.
//!
//! - `session` - register, login, logout, whoami
//! - `directory` - list/search, profiles and reviews

pub mod directory;
pub mod session;
