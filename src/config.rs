//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honored if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/addressbook.json";

/// Configuration for the address book binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON data file (default: "data/addressbook.json")
    pub data_file: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,

    /// Save after every command that changes the book (default: true)
    pub autosave: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Path of the data file (default: "data/addressbook.json")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `AUTOSAVE`: `true`/`false`, `1`/`0`, `yes`/`no` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; a malformed one is not.
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(ConfigError::DotenvError(err.to_string()));
            }
        }

        let data_file = match env::var("ADDRESS_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let autosave = Self::parse_env_bool("AUTOSAVE", true)?;

        Ok(Config {
            data_file,
            log_level,
            autosave,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "warn".to_string(),
            autosave: true,
        }
    }
}
