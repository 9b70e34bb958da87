//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::Result;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
///
/// # Errors
///
/// Fails when the file cannot be opened or configured.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
///
/// # Errors
///
/// Fails when SQLite cannot allocate the in-memory database.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection with the settings the ledger needs
///
/// # Errors
///
/// Fails when a pragma cannot be applied.
pub fn configure(conn: &Connection) -> Result<()> {
    // WAL keeps the ledger readable while a save transaction is open
    conn.pragma_update(None, "journal_mode", &"WAL")?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    Ok(())
}
