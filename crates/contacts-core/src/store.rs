//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `contacts-store-sqlite`). The JSON
//! API depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::contact::{Contact, ContactInput};

/// Abstraction over a contacts backend.
///
/// Each operation is a single atomic statement against the backing store.
/// "No such contact" is reported as `Ok(None)`, never as an error, so callers
/// can tell a missing row apart from a failed query.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every stored contact, in no particular order.
  fn list(&self) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Persist a new contact. The id and `created_at` are assigned by the store.
  ///
  /// Fails if another contact already uses the same email.
  fn create(
    &self,
    input: ContactInput,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Overwrite name, email, phone and address of contact `id`.
  ///
  /// An absent address clears the stored one. Returns the updated contact, or
  /// `None` if no contact matched.
  fn update(
    &self,
    id: Uuid,
    input: ContactInput,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove contact `id`. Returns the removed contact, or `None` if no
  /// contact matched.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;
}
