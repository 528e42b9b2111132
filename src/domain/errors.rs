//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` output of each variant is the fixed, user-facing message
/// shown next to the offending form field, so the form validator and the
/// value objects always agree on wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided name is empty after trimming.
    EmptyName,

    /// The provided name is shorter than 2 characters after trimming.
    NameTooShort,

    /// The provided email address is empty after trimming.
    EmptyEmail,

    /// The provided email address does not match the expected pattern.
    InvalidEmail,

    /// The provided phone number is empty after trimming.
    EmptyPhone,

    /// The provided phone number does not contain exactly 10 digits.
    InvalidPhone,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::EmptyName => write!(f, "Name is required"),
            Self::NameTooShort => write!(f, "Name must be at least 2 characters"),
            Self::EmptyEmail => write!(f, "Email is required"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::EmptyPhone => write!(f, "Phone number is required"),
            Self::InvalidPhone => write!(f, "Phone number must be exactly 10 digits"),
        }
    }
}

impl std::error::Error for ValidationError {}
