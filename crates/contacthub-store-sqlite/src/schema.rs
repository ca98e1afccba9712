//! SQL schema for the Contact Hub SQLite store.
//!
//! Executed once at connection startup. There are no migrations; the table
//! shape is fixed.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are inserted and deleted, never updated.
CREATE TABLE IF NOT EXISTS contacts (
    contact_id  TEXT PRIMARY KEY,
    name        TEXT NOT NULL CHECK (name  <> ''),
    email       TEXT NOT NULL CHECK (email <> ''),
    phone       TEXT NOT NULL CHECK (phone <> ''),
    message     TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC, fixed millisecond width
    updated_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS contacts_created_idx ON contacts(created_at);

PRAGMA user_version = 1;
";
