//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `contacthub-store-sqlite`). The HTTP
//! layer (`contacthub-api`) depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use uuid::Uuid;

use crate::contact::{Contact, NewContact};

/// Abstraction over a Contact Hub storage backend.
///
/// Contacts are append/delete only: there is no update operation. Write
/// serialisation is the backend's concern; callers never lock.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every stored contact, newest `created_at` first. Contacts created in the
  /// same instant come back most-recently-inserted first.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Persist a validated contact. The store assigns `id`, `created_at` and
  /// `updated_at`, and returns the stored record.
  fn create_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove a contact, returning what was stored. Returns `None` if no
  /// contact had that id, which includes a concurrent delete that won.
  fn delete_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;
}
