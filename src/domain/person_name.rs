//! PersonName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// Names are trimmed at construction time and must be at least 2 characters
/// long after trimming. The stored value is always the trimmed form.
///
/// # Example
///
/// ```
/// use contact_book::domain::PersonName;
///
/// let name = PersonName::new("  Ada  ").unwrap();
/// assert_eq!(name.as_str(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, trimming and validating the input.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty after trimming
    /// - Must be at least 2 characters after trimming
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for whitespace-only input and
    /// `ValidationError::NameTooShort` for a single-character name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if trimmed.chars().count() < 2 {
            return Err(ValidationError::NameTooShort);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
