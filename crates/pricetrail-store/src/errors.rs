//! Error handling for pricetrail-store
//!
//! Store-local error enum, converted to the core error facility at the
//! collaborator-contract boundary.

use pricetrail_core::{TrailError, TrailErrorKind};
use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the SQLite ledger store and the report sinks.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite failure
    #[error("sqlite failure: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Filesystem failure (report log directory or file)
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),

    /// Ledger database was created by an incompatible schema version
    #[error("unsupported ledger schema version {found} (expected {expected})")]
    SchemaVersion { found: i64, expected: i64 },

    /// A persisted row could not be decoded back into a ledger record
    #[error("corrupt ledger row: {0}")]
    Corrupt(String),
}

impl From<StoreError> for TrailError {
    fn from(err: StoreError) -> Self {
        let kind = match &err {
            StoreError::Io(_) => TrailErrorKind::Io,
            StoreError::Sqlite(_) | StoreError::SchemaVersion { .. } | StoreError::Corrupt(_) => {
                TrailErrorKind::Persistence
            }
        };
        TrailError::new(kind)
            .with_op("ledger_store")
            .with_message(err.to_string())
    }
}
