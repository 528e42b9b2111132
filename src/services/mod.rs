//! Service layer mediating between presentation and the store.

pub mod contact_service;

pub use contact_service::{ContactBook, ContactBookService};
