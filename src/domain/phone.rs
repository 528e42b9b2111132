//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// All non-digit characters are stripped at construction time and the result
/// must be exactly 10 digits. The stored value is always digits only; display
/// formatting is derived via [`PhoneNumber::formatted`].
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(123) 456-7890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert_eq!(phone.formatted(), "(123) 456-7890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, stripping formatting and validating.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty after trimming ("required" takes precedence over
    ///   "wrong format" for whitespace-only input)
    /// - Must contain exactly 10 decimal digits once all non-digit
    ///   characters are removed
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPhone` for whitespace-only input and
    /// `ValidationError::InvalidPhone` if the digit count is not 10.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();

        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyPhone);
        }

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != 10 {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Self(digits))
    }

    /// Get the stored digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Render the number as `(XXX) XXX-XXXX`.
    pub fn formatted(&self) -> String {
        format_phone_number(&self.0)
    }
}

/// Format a stored 10-digit phone string as `(XXX) XXX-XXXX`.
///
/// Anything that does not strip down to exactly 10 digits is returned
/// unchanged. Stored numbers always satisfy the 10-digit invariant, so the
/// fallback only matters for raw input echoed back to the user.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - digits only; use formatted() for human display
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
