//! Embedded ledger schema, gated by `PRAGMA user_version`.
//!
//! The logical schema is exactly the LedgerRecord fields: identity key,
//! descriptive attributes, the two optional price columns, the derived
//! discount, the observation day, and the append bookkeeping
//! (`record_id`, `seq`).

use crate::errors::{Result, StoreError};
use rusqlite::Connection;

/// Current schema version written to `user_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Schema for version 1.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS ledger_records (
    record_id       TEXT PRIMARY KEY,
    seq             INTEGER NOT NULL,
    product_key     TEXT NOT NULL,
    display_name    TEXT NOT NULL,
    pack_size       TEXT NOT NULL,
    list_price      REAL,
    observed_price  REAL,
    discount        REAL NOT NULL,
    observed_at     TEXT NOT NULL,
    source_url      TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_ledger_records_key
    ON ledger_records (product_key, observed_at, seq);
"#;

/// Initialize or validate the ledger schema.
///
/// A fresh database gets the embedded schema and the current version; a
/// database at the current version passes through untouched.
///
/// # Errors
///
/// Returns [`StoreError::SchemaVersion`] when the database was written by a
/// different schema version. The ledger is an audit trail; silently
/// migrating or recreating it is never acceptable.
pub fn init_schema(conn: &Connection) -> Result<()> {
    let found: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    match found {
        0 => {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.pragma_update(None, "user_version", &SCHEMA_VERSION)?;
            tracing::debug!(version = SCHEMA_VERSION, "initialized ledger schema");
            Ok(())
        }
        v if v == SCHEMA_VERSION => Ok(()),
        v => Err(StoreError::SchemaVersion {
            found: v,
            expected: SCHEMA_VERSION,
        }),
    }
}
