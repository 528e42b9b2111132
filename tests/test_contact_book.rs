//! End-to-end tests for the contact book service.
//!
//! These tests drive the `ContactBook` boundary the way the frontend does:
//! raw form input in, ordered contact list and per-field errors out.

use contact_book::{ContactBook, ContactBookService, ContactId};

/// Scenario: valid but messy input is accepted and normalized.
#[test]
fn test_add_normalizes_input() {
    let service = ContactBookService::new();

    let contact = service
        .validate_and_add(" Ada ", " ADA@X.COM ", " (123) 456-7890 ")
        .expect("input should validate");

    assert_eq!(contact.name.as_str(), "Ada");
    assert_eq!(contact.email.as_str(), "ada@x.com");
    assert_eq!(contact.phone.as_str(), "1234567890");

    let contacts = service.contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0], contact);
}

/// Scenario: a short name is rejected and nothing is stored.
#[test]
fn test_reject_short_name() {
    let service = ContactBookService::new();

    let errors = service
        .validate_and_add("A", "ada@x.com", "1234567890")
        .expect_err("single-character name should fail");

    assert_eq!(
        errors.name.as_deref(),
        Some("Name must be at least 2 characters")
    );
    assert!(errors.email.is_none());
    assert!(errors.phone.is_none());
    assert!(service.contacts().is_empty());
}

/// Scenario: a phone with the wrong digit count is rejected.
#[test]
fn test_reject_bad_phone() {
    let service = ContactBookService::new();

    let errors = service
        .validate_and_add("Ada", "ada@x.com", "12345")
        .expect_err("5-digit phone should fail");

    assert_eq!(
        errors.phone.as_deref(),
        Some("Phone number must be exactly 10 digits")
    );
    assert!(errors.name.is_none());
    assert!(errors.email.is_none());
}

/// Every invalid field gets its own entry; the store is untouched.
#[test]
fn test_all_errors_reported_store_unchanged() {
    let service = ContactBookService::new();
    service
        .validate_and_add("Ada", "ada@x.com", "1234567890")
        .unwrap();
    let before = service.contacts();

    let errors = service
        .validate_and_add("  ", "not an email", "123")
        .expect_err("all three fields are invalid");

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.name.as_deref(), Some("Name is required"));
    assert_eq!(
        errors.email.as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        errors.phone.as_deref(),
        Some("Phone number must be exactly 10 digits")
    );
    assert_eq!(service.contacts(), before);
}

/// New contacts always land at the front of the list.
#[test]
fn test_insertion_order_newest_first() {
    let service = ContactBookService::new();
    service
        .validate_and_add("Ada", "ada@x.com", "1111111111")
        .unwrap();
    service
        .validate_and_add("Grace", "grace@x.com", "2222222222")
        .unwrap();
    service
        .validate_and_add("Edsger", "edsger@x.com", "3333333333")
        .unwrap();

    let names: Vec<_> = service
        .contacts()
        .iter()
        .map(|c| c.name.as_str().to_string())
        .collect();
    assert_eq!(names, vec!["Edsger", "Grace", "Ada"]);
}

/// Scenario: deleting the middle contact leaves the rest in order.
#[test]
fn test_delete_middle_contact() {
    let service = ContactBookService::new();
    let c = service
        .validate_and_add("Cc", "c@x.com", "1111111111")
        .unwrap();
    let b = service
        .validate_and_add("Bb", "b@x.com", "2222222222")
        .unwrap();
    let a = service
        .validate_and_add("Aa", "a@x.com", "3333333333")
        .unwrap();

    assert!(service.delete_contact(&b.id));

    let ids: Vec<_> = service.contacts().iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, vec![a.id, c.id]);
}

/// Scenario: deleting an absent id is a quiet no-op.
#[test]
fn test_delete_absent_id_is_noop() {
    let service = ContactBookService::new();
    service
        .validate_and_add("Ada", "ada@x.com", "1234567890")
        .unwrap();
    let before = service.contacts();

    let unknown = ContactId::new("never-issued").unwrap();
    assert!(!service.delete_contact(&unknown));
    assert_eq!(service.contacts(), before);
}

/// Removing the same id twice ends in the same state as removing it once.
#[test]
fn test_delete_is_idempotent() {
    let service = ContactBookService::new();
    let contact = service
        .validate_and_add("Ada", "ada@x.com", "1234567890")
        .unwrap();

    assert!(service.delete_contact(&contact.id));
    let after_first = service.contacts();
    assert!(!service.delete_contact(&contact.id));
    assert_eq!(service.contacts(), after_first);
}

/// Ids are unique across every contact issued in a session, even after
/// deletions.
#[test]
fn test_ids_never_reused() {
    let service = ContactBookService::new();
    let mut seen = std::collections::HashSet::new();

    for i in 0..50 {
        let contact = service
            .validate_and_add(
                &format!("User {i}"),
                &format!("user{i}@example.com"),
                "1234567890",
            )
            .unwrap();
        assert!(seen.insert(contact.id.clone()), "id reused: {}", contact.id);
        service.delete_contact(&contact.id);
    }
}

/// Normalization property: `" Foo@Bar.COM "` is stored as `"foo@bar.com"`.
#[test]
fn test_email_normalization_property() {
    let service = ContactBookService::new();
    let contact = service
        .validate_and_add("Foo Bar", " Foo@Bar.COM ", "1234567890")
        .unwrap();
    assert_eq!(contact.email.as_str(), "foo@bar.com");
}
