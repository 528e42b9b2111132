//! Form-level validation producing a per-field error mapping.

use crate::models::ContactDraft;
use serde::Serialize;

/// Per-field validation failures for the contact form.
///
/// Each field carries at most one message; an entry is present only when the
/// field failed. An empty mapping means the input is valid. Serialization
/// omits absent fields, matching the "only the fields that failed" contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ValidationErrors {
    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        [&self.name, &self.email, &self.phone]
            .iter()
            .filter(|m| m.is_some())
            .count()
    }

    /// Iterate over `(field, message)` pairs for the failing fields.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, message)| message.map(|m| (field, m)))
    }
}

/// Validate raw contact-form input.
///
/// Pure function of its three inputs: no trimming is assumed, all three
/// fields are checked even when one has already failed, and the returned
/// mapping contains exactly the failing fields with their fixed messages.
///
/// # Example
///
/// ```
/// use contact_book::validation::validate_contact_form;
///
/// let errors = validate_contact_form("A", "ada@x.com", "1234567890");
/// assert_eq!(errors.name.as_deref(), Some("Name must be at least 2 characters"));
/// assert!(errors.email.is_none());
/// assert!(errors.phone.is_none());
///
/// assert!(validate_contact_form("Ada", "ada@x.com", "1234567890").is_empty());
/// ```
pub fn validate_contact_form(name: &str, email: &str, phone: &str) -> ValidationErrors {
    ContactDraft::parse(name, email, phone)
        .err()
        .unwrap_or_default()
}
