//! Pricetrail Core - Incremental observation ledger and change-detection engine
//!
//! This crate provides the foundational data structures and operations for
//! pricetrail, including:
//! - Snapshot and LedgerRecord models with explicit price optionality
//! - Snapshot normalization (price parsing, MRP fallback, derived discount)
//! - Deterministic NEW/CHANGED/UNCHANGED classification against history
//! - Append-only ledger fold with audit-order sorting
//! - Change-report rendering for the daily change log
//! - Collaborator contracts (source, store, notifier, report sink)
//!
//! The engine is a pure, single-threaded transformation: one batch in, one
//! updated ledger and report set out. All I/O lives behind the contracts in
//! [`hooks`].

pub mod batch;
pub mod classify;
pub mod errors;
pub mod hooks;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod render;

// Re-export commonly used types
pub use batch::process;
pub use errors::{Result, TrailError, TrailErrorKind};
pub use model::{
    BatchOutcome, BatchSummary, ChangeReportEntry, Classification, Ledger, LedgerRecord,
    PriceMovement, ProcessingNote, ProductKey, RawSnapshot, Snapshot,
};
pub use normalize::normalize_snapshot;
