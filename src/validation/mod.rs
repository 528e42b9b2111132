//! Form input validation.
//!
//! The validator is a pure function over the three raw input strings; it
//! reports every failing field at once instead of stopping at the first.
//! Phone display formatting lives with the value object in
//! [`crate::domain::phone`] and is re-exported here for convenience.

pub mod form;

pub use crate::domain::format_phone_number;
pub use form::{validate_contact_form, ValidationErrors};
