//! Core domain models for pricetrail
//!
//! Value types with named, typed fields and explicit optionality for price
//! fields. Snapshots are produced once by a source, consumed once by the
//! engine, and either discarded (UNCHANGED) or promoted into an immutable
//! LedgerRecord (NEW or CHANGED).

mod ledger;
mod report;
mod snapshot;

pub use ledger::{Ledger, LedgerRecord};
pub use report::{
    BatchOutcome, BatchSummary, ChangeReportEntry, Classification, PriceMovement, ProcessingNote,
};
pub use snapshot::{ProductKey, RawSnapshot, Snapshot};
