//! Contact Book - an in-memory contact list with validated, normalized records.
//!
//! The core is two pieces: a pure validator that checks and normalizes raw
//! form input, and an ordered in-memory store with prepend-on-add and
//! delete-by-id semantics. A thin terminal frontend sits on top. Nothing is
//! persisted; the store lives and dies with the session.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (id, name, email, phone)
//! - **models**: the `Contact` record and the pre-id `ContactDraft`
//! - **validation**: form-level validation producing a per-field error mapping
//! - **store**: the ordered in-memory contact list
//! - **services**: the `ContactBook` boundary the frontend talks to
//! - **console**: interactive terminal frontend (presentation only)
//! - **config**: environment configuration (log level)
//! - **error**: error types for the ambient concerns

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod validation;

pub use config::Config;
pub use domain::{
    format_phone_number, ContactId, EmailAddress, PersonName, PhoneNumber, ValidationError,
};
pub use error::{ConfigError, ConfigResult};
pub use models::{Contact, ContactDraft};
pub use services::{ContactBook, ContactBookService};
pub use store::ContactStore;
pub use validation::{validate_contact_form, ValidationErrors};
