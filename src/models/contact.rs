//! Contact model representing one person in the contact book.

use crate::domain::{ContactId, EmailAddress, PersonName, PhoneNumber};
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};

/// A contact in the book.
///
/// Every field is a validated value object, so a `Contact` can only exist in
/// normalized form: trimmed name, lower-cased email, digits-only phone, and a
/// unique non-empty id. Deserialization re-runs the same validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, assigned at creation, never reused
    pub id: ContactId,

    /// Display name, trimmed, at least 2 characters
    pub name: PersonName,

    /// Email address, trimmed and lower-cased
    pub email: EmailAddress,

    /// Phone number, stored as exactly 10 digits
    pub phone: PhoneNumber,
}

/// A contact missing only its id: validated, normalized field values ready
/// for [`ContactStore::add`](crate::store::ContactStore::add).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl ContactDraft {
    /// Validate and normalize raw form input into a draft.
    ///
    /// All three fields are checked independently; every failure is reported,
    /// not just the first one.
    ///
    /// # Errors
    ///
    /// Returns the per-field error mapping when any field is invalid. The
    /// mapping contains an entry for each invalid field and nothing else.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_book::models::ContactDraft;
    ///
    /// let draft = ContactDraft::parse(" Ada ", " ADA@X.COM ", "(123) 456-7890").unwrap();
    /// assert_eq!(draft.name.as_str(), "Ada");
    /// assert_eq!(draft.email.as_str(), "ada@x.com");
    /// assert_eq!(draft.phone.as_str(), "1234567890");
    /// ```
    pub fn parse(name: &str, email: &str, phone: &str) -> Result<Self, ValidationErrors> {
        let name = PersonName::new(name);
        let email = EmailAddress::new(email);
        let phone = PhoneNumber::new(phone);

        match (name, email, phone) {
            (Ok(name), Ok(email), Ok(phone)) => Ok(Self { name, email, phone }),
            (name, email, phone) => Err(ValidationErrors {
                name: name.err().map(|e| e.to_string()),
                email: email.err().map(|e| e.to_string()),
                phone: phone.err().map(|e| e.to_string()),
            }),
        }
    }

    /// Attach an id, producing a full `Contact`.
    pub fn with_id(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}
