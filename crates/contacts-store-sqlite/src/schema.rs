//! SQL schema and sample rows for the contacts store.

/// Connection-level settings, applied outside any transaction.
pub const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
";

/// Table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    phone       TEXT NOT NULL,
    address     TEXT,
    created_at  TEXT NOT NULL    -- RFC 3339 UTC; store-assigned
);
";

/// Checks whether the contacts table is already present.
pub const TABLE_EXISTS: &str =
  "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'contacts'";

/// Sample contacts inserted only when the table is first created:
/// `(name, email, phone, address)`.
pub const SEED_CONTACTS: [(&str, &str, &str, &str); 2] = [
  ("John Doe", "john@example.com", "1234567890", "123 Main St"),
  ("Jane Smith", "jane@example.com", "0987654321", "456 Elm St"),
];
