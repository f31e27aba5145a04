//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use contacts_core::{
  contact::{Contact, ContactInput},
  store::ContactStore,
};

use crate::{
  encode::{encode_dt, encode_uuid, RawContact, CONTACT_COLUMNS},
  schema::{PRAGMAS, SCHEMA, SEED_CONTACTS, TABLE_EXISTS},
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contacts store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Create the contacts table if absent, seeding it only when this call
  /// created it.
  async fn init_schema(&self) -> Result<()> {
    let created = self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;

        let tx = conn.transaction()?;
        let existed = tx
          .query_row(TABLE_EXISTS, [], |_| Ok(()))
          .optional()?
          .is_some();

        tx.execute_batch(SCHEMA)?;

        if !existed {
          let now = encode_dt(Utc::now());
          for (name, email, phone, address) in SEED_CONTACTS {
            tx.execute(
              "INSERT INTO contacts (id, name, email, phone, address, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
              rusqlite::params![
                encode_uuid(Uuid::new_v4()),
                name,
                email,
                phone,
                address,
                now,
              ],
            )?;
          }
        }

        tx.commit()?;
        Ok(!existed)
      })
      .await?;

    if created {
      tracing::info!(
        seeded = SEED_CONTACTS.len(),
        "created contacts table with sample rows"
      );
    } else {
      tracing::debug!("contacts table already present; skipping seed");
    }
    Ok(())
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = crate::Error;

  async fn list(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {CONTACT_COLUMNS} FROM contacts"))?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn get(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
              rusqlite::params![id_str],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn create(&self, input: ContactInput) -> Result<Contact> {
    let contact = Contact::from_input(input);

    let id_str  = encode_uuid(contact.id);
    let at_str  = encode_dt(contact.created_at);
    let name    = contact.name.clone();
    let email   = contact.email.clone();
    let phone   = contact.phone.clone();
    let address = contact.address.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (id, name, email, phone, address, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, name, email, phone, address, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(contact)
  }

  async fn update(&self, id: Uuid, input: ContactInput) -> Result<Option<Contact>> {
    let id_str  = encode_uuid(id);
    let name    = input.name().to_owned();
    let email   = input.email().to_owned();
    let phone   = input.phone().to_owned();
    let address = input.address().map(str::to_owned);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "UPDATE contacts
                 SET name = ?1, email = ?2, phone = ?3, address = ?4
                 WHERE id = ?5
                 RETURNING {CONTACT_COLUMNS}"
              ),
              rusqlite::params![name, email, phone, address, id_str],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn delete(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("DELETE FROM contacts WHERE id = ?1 RETURNING {CONTACT_COLUMNS}"),
              rusqlite::params![id_str],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }
}
