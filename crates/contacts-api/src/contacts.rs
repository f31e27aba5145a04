//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/contacts`      | All contacts, unordered |
//! | `POST`   | `/contacts`      | Body: [`ContactBody`]; returns 201 + stored contact |
//! | `GET`    | `/contacts/:id`  | 404 if not found |
//! | `PUT`    | `/contacts/:id`  | Body: [`ContactBody`]; overwrites all mutable fields |
//! | `DELETE` | `/contacts/:id`  | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use contacts_core::{
  contact::{Contact, ContactInput},
  store::ContactStore,
};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::error::ApiError;

/// JSON body accepted by `POST /contacts` and `PUT /contacts/:id`.
///
/// Every field is optional at the wire level so that missing fields are
/// reported as a validation error rather than a deserialisation failure.
#[derive(Debug, Default, Deserialize)]
pub struct ContactBody {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub phone:   Option<String>,
  pub address: Option<String>,
}

impl TryFrom<ContactBody> for ContactInput {
  type Error = contacts_core::Error;

  fn try_from(b: ContactBody) -> Result<Self, Self::Error> {
    ContactInput::new(b.name, b.email, b.phone, b.address)
  }
}

/// Ids are opaque to clients; anything that is not a UUID can't name a
/// stored contact.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::contact_not_found())
}

/// Unwrap a request body into validated input.
///
/// A body sent without a JSON content type is read as empty, so it fails the
/// presence check like any other body lacking the required fields.
fn contact_input(
  body: Result<Json<ContactBody>, JsonRejection>,
) -> Result<ContactInput, ApiError> {
  let body = match body {
    Ok(Json(body)) => body,
    Err(JsonRejection::MissingJsonContentType(_)) => ContactBody::default(),
    Err(rejection) => return Err(rejection.into()),
  };
  Ok(ContactInput::try_from(body)?)
}

fn message(text: &str) -> Json<Value> { Json(json!({ "message": text })) }

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let contacts = store.list().await.map_err(ApiError::store)?;
  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let id = parse_id(&id)?;
  let contact = store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  Ok(Json(contact))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts` — returns 201 + the stored [`Contact`], including the
/// generated `id` and `created_at`.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<ContactBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let input = contact_input(body)?;

  let contact = store.create(input).await.map_err(ApiError::store)?;
  tracing::debug!(id = %contact.id, "created contact");
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — overwrites name, email, phone and address.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Result<Json<ContactBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  let input = contact_input(body)?;
  let id = parse_id(&id)?;

  store
    .update(id, input)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  Ok(message("Contact updated successfully"))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  let id = parse_id(&id)?;

  store
    .delete(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  Ok(message("Contact deleted successfully"))
}
