//! Directory configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `AC_DATA_DIR` - Directory holding the JSON slot files (default: `.artisan-connect`)
//! - `AC_MIN_PASSWORD_LENGTH` - Minimum password length at registration (default: 8)
//! - `AC_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)

use std::path::PathBuf;

use thiserror::Error;

use crate::services::auth::DEFAULT_MIN_PASSWORD_LENGTH;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".artisan-connect";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Directory application configuration.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Where the file store keeps its slots.
    pub data_dir: PathBuf,
    /// Minimum accepted password length at registration.
    pub min_password_length: usize,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            log_format: LogFormat::default(),
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("AC_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.data_dir, PathBuf::from);

        let min_password_length = match lookup("AC_MIN_PASSWORD_LENGTH") {
            Some(raw) => {
                let value = raw.trim().parse::<usize>().map_err(|e| {
                    ConfigError::InvalidEnvVar("AC_MIN_PASSWORD_LENGTH".to_string(), e.to_string())
                })?;
                if value == 0 {
                    return Err(ConfigError::InvalidEnvVar(
                        "AC_MIN_PASSWORD_LENGTH".to_string(),
                        "must be at least 1".to_string(),
                    ));
                }
                value
            }
            None => defaults.min_password_length,
        };

        let log_format = match lookup("AC_LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::InvalidEnvVar("AC_LOG_FORMAT".to_string(), e))?,
            None => defaults.log_format,
        };

        Ok(Self {
            data_dir,
            min_password_length,
            log_format,
        })
    }
}
