//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. UUIDs are stored as hyphenated
//! lowercase strings.

use chrono::{DateTime, Utc};
use contacts_core::contact::Contact;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ────────────────────────────────────────────────────────────────

/// Column list shared by every query that yields a [`RawContact`].
pub const CONTACT_COLUMNS: &str = "id, name, email, phone, address, created_at";

/// A `contacts` row as plain strings, before decoding.
pub struct RawContact {
  pub id:         String,
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  pub address:    Option<String>,
  pub created_at: String,
}

impl RawContact {
  /// Read a row selected with [`CONTACT_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawContact {
      id:         row.get(0)?,
      name:       row.get(1)?,
      email:      row.get(2)?,
      phone:      row.get(3)?,
      address:    row.get(4)?,
      created_at: row.get(5)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         decode_uuid(&self.id)?,
      name:       self.name,
      email:      self.email,
      phone:      self.phone,
      address:    self.address,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dt_survives_encoding() {
    let now = Utc::now();
    assert_eq!(decode_dt(&encode_dt(now)).unwrap(), now);
  }

  #[test]
  fn bad_uuid_column_is_rejected() {
    let raw = RawContact {
      id:         "not-a-uuid".into(),
      name:       "Ann".into(),
      email:      "ann@x.com".into(),
      phone:      "111".into(),
      address:    None,
      created_at: encode_dt(Utc::now()),
    };
    assert!(matches!(raw.into_contact(), Err(Error::Uuid(_))));
  }

  #[test]
  fn bad_timestamp_column_is_rejected() {
    let raw = RawContact {
      id:         encode_uuid(Uuid::new_v4()),
      name:       "Ann".into(),
      email:      "ann@x.com".into(),
      phone:      "111".into(),
      address:    None,
      created_at: "2024-13-45 99:00:00".into(),
    };
    assert!(matches!(raw.into_contact(), Err(Error::DateParse(_))));
  }
}
