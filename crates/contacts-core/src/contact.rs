//! Contact — the single persisted entity.
//!
//! [`Contact`] is the stored record as returned by a
//! [`ContactStore`](crate::store::ContactStore). [`ContactInput`] is the
//! validated set of mutable fields accepted by create and update.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{Error, Result};

/// A stored contact.
///
/// `id` and `created_at` are assigned by the store on insertion and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
  pub id:         Uuid,
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  pub address:    Option<String>,
  pub created_at: DateTime<Utc>,
}

impl Contact {
  /// Build a fresh contact from `input` with a new id and the current time.
  pub fn from_input(input: ContactInput) -> Self {
    Self {
      id:         Uuid::new_v4(),
      name:       input.name,
      email:      input.email,
      phone:      input.phone,
      address:    input.address,
      created_at: Utc::now(),
    }
  }
}

/// The mutable fields of a contact, checked for presence.
///
/// Only constructible through [`ContactInput::new`], so a store never sees
/// an empty name, email, or phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
  name:    String,
  email:   String,
  phone:   String,
  address: Option<String>,
}

impl ContactInput {
  /// Accept the fields if `name`, `email` and `phone` are all non-empty.
  ///
  /// No format checks are made; any non-empty string is accepted.
  pub fn new(
    name:    Option<String>,
    email:   Option<String>,
    phone:   Option<String>,
    address: Option<String>,
  ) -> Result<Self> {
    match (non_empty(name), non_empty(email), non_empty(phone)) {
      (Some(name), Some(email), Some(phone)) => {
        Ok(Self { name, email, phone, address })
      }
      _ => Err(Error::MissingRequiredFields),
    }
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn email(&self) -> &str { &self.email }

  pub fn phone(&self) -> &str { &self.phone }

  pub fn address(&self) -> Option<&str> { self.address.as_deref() }
}

fn non_empty(s: Option<String>) -> Option<String> {
  s.filter(|s| !s.is_empty())
}
