//! Error types for the contact book.
//!
//! Validation failures are data, not errors — they live in
//! [`crate::validation::ValidationErrors`]. The types here cover the ambient
//! concerns around the core: configuration loading.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
