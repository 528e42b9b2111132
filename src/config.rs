//! Configuration management for the contact book.
//!
//! The core takes no configuration at all; the only knob is the log level
//! for the terminal frontend, read from the environment.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const KNOWN_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_LOG`: logging level (default: "info")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `CONTACT_BOOK_LOG` is set to
    /// something other than a known level name.
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("CONTACT_BOOK_LOG")
            .unwrap_or_else(|_| "info".to_string())
            .to_lowercase();

        if !KNOWN_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_LOG".to_string(),
                reason: format!("expected one of {}", KNOWN_LEVELS.join(", ")),
            });
        }

        Ok(Self { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_known_levels_accept_default() {
        assert!(KNOWN_LEVELS.contains(&Config::default().log_level.as_str()));
    }
}
