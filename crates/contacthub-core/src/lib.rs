//! Core types and trait definitions for the Contact Hub store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod contact;
pub mod store;
pub mod validate;

pub use contact::{Contact, ContactDraft, NewContact};
pub use store::ContactStore;
pub use validate::{Field, FieldError, FieldErrorKind, ValidationErrors};
