//! JSON REST API for the contacts service.
//!
//! Exposes an axum [`Router`] backed by any [`contacts_core::store::ContactStore`].
//! The store handle is passed in explicitly, so tests can mount the router over
//! an isolated in-memory store.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = contacts_api::api_router(Arc::new(store));
//! ```

pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use contacts_core::store::ContactStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update_one::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
