//! Contact service layer.
//!
//! The boundary between the presentation layer and the core: validation
//! runs first, the store is touched only on success, and failures come back
//! as data rather than panics or control-flow errors.

use crate::domain::ContactId;
use crate::models::{Contact, ContactDraft};
use crate::store::ContactStore;
use crate::validation::ValidationErrors;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Contact book operations exposed to the presentation layer.
pub trait ContactBook: Send + Sync {
    /// Validate raw form input and, on success, add the contact.
    ///
    /// On failure the per-field error mapping is returned and the store is
    /// left untouched. On success the stored contact (with its fresh id) is
    /// returned and the new contact sits at the front of the list.
    fn validate_and_add(
        &self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Contact, ValidationErrors>;

    /// Delete the contact with the given id.
    ///
    /// Returns whether a contact was removed; an unknown id is a no-op, not
    /// an error.
    fn delete_contact(&self, id: &ContactId) -> bool;

    /// Snapshot of the current ordered contact list, newest first.
    fn contacts(&self) -> Vec<Contact>;
}

/// Default implementation of [`ContactBook`] over an in-memory store.
///
/// A single mutex guards `add`/`remove`/`list`, which preserves the store's
/// atomicity and ordering guarantees if the service is shared across
/// threads. Lock poisoning is recovered by taking the inner value: the store
/// holds only plain owned data, so no half-applied mutation can be observed.
#[derive(Debug, Default)]
pub struct ContactBookService {
    store: Mutex<ContactStore>,
}

impl ContactBookService {
    /// Create a service with an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactBook for ContactBookService {
    fn validate_and_add(
        &self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Contact, ValidationErrors> {
        let draft = ContactDraft::parse(name, email, phone)?;

        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        let contact = store.add(draft);
        info!(id = %contact.id, total = store.len(), "added contact");
        Ok(contact)
    }

    fn delete_contact(&self, id: &ContactId) -> bool {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        let removed = store.remove(id);
        info!(id = %id, removed, total = store.len(), "delete contact");
        removed
    }

    fn contacts(&self) -> Vec<Contact> {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        store.list().to_vec()
    }
}
