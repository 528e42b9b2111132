//! In-memory contact store.
//!
//! The store is the authoritative ordered list of contacts for one running
//! session: created empty at startup, mutated only through [`ContactStore::add`]
//! and [`ContactStore::remove`], discarded at session end. Nothing is
//! persisted.

use crate::domain::ContactId;
use crate::models::{Contact, ContactDraft};
use tracing::debug;

/// Ordered collection of contacts, most-recently-added first.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validated, normalized draft to the front of the list.
    ///
    /// A fresh random id is generated for the new contact; ids are never
    /// reused within a session. Always succeeds, and returns the stored
    /// contact.
    pub fn add(&mut self, draft: ContactDraft) -> Contact {
        let contact = draft.with_id(ContactId::generate());
        debug!(id = %contact.id, name = %contact.name, "contact added");
        self.contacts.insert(0, contact.clone());
        contact
    }

    /// Remove the contact with the given id, if present.
    ///
    /// Returns whether a contact was removed. Removing an absent id is a
    /// no-op, not an error, so calling this twice with the same id leaves
    /// the store in the same state as calling it once.
    pub fn remove(&mut self, id: &ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != *id);
        let removed = self.contacts.len() < before;
        debug!(id = %id, removed, "contact removal");
        removed
    }

    /// The current ordered list, newest first. Read-only.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts in the store.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True when the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ContactDraft {
        ContactDraft::parse(name, &format!("{}@example.com", name.to_lowercase()), "1234567890")
            .unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ContactStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_prepends() {
        let mut store = ContactStore::new();
        store.add(draft("Ada"));
        store.add(draft("Grace"));
        store.add(draft("Edsger"));

        let names: Vec<_> = store.list().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Edsger", "Grace", "Ada"]);
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = ContactStore::new();
        let a = store.add(draft("Ada"));
        let b = store.add(draft("Ada"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_remove_middle_preserves_order() {
        let mut store = ContactStore::new();
        let c = store.add(draft("Cc"));
        let b = store.add(draft("Bb"));
        let a = store.add(draft("Aa"));

        assert!(store.remove(&b.id));

        let ids: Vec<_> = store.list().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut store = ContactStore::new();
        let a = store.add(draft("Ada"));
        let gone = store.add(draft("Grace"));
        store.remove(&gone.id);

        let before: Vec<_> = store.list().to_vec();
        assert!(!store.remove(&gone.id));
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, a.id);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = ContactStore::new();
        let a = store.add(draft("Ada"));

        assert!(store.remove(&a.id));
        assert!(!store.remove(&a.id));
        assert!(store.is_empty());
    }
}
