//! Pricetrail Store - durable ledger persistence and report logging
//!
//! Provides the SQLite-backed [`SqliteLedgerStore`] (append-only persistence
//! of ledger records) and the [`DailyLogSink`] (one change-log file per
//! run-day). Both implement the collaborator contracts from
//! `pricetrail_core::hooks`, so the engine itself never touches a file or a
//! database.

pub mod db;
pub mod errors;
pub mod ledger_store;
pub mod report_log;
pub mod schema;

pub use errors::{Result, StoreError};
pub use ledger_store::SqliteLedgerStore;
pub use report_log::DailyLogSink;
