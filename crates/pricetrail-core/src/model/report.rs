//! Batch outcome types.
//!
//! One [`ChangeReportEntry`] is produced per NEW/CHANGED snapshot; UNCHANGED
//! snapshots are silent. All types are plain serde values so outcomes can be
//! logged or replayed downstream.

use serde::{Deserialize, Serialize};

use super::ledger::{Ledger, LedgerRecord};
use super::snapshot::{ProductKey, Snapshot};

/// Outcome of comparing one snapshot to the identity's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// No prior record for the identity
    New,
    /// Prior record exists and the observed price differs (including
    /// absent-vs-present)
    Changed,
    /// Prior record exists with an identical observed price; other field
    /// drift (MRP, pack size, discount) is deliberately ignored
    Unchanged,
}

impl Classification {
    /// Stable display label
    pub fn label(&self) -> &'static str {
        match self {
            Classification::New => "NEW",
            Classification::Changed => "CHANGED",
            Classification::Unchanged => "UNCHANGED",
        }
    }
}

/// Direction of a reported price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceMovement {
    /// New price is higher than the prior price
    Increase,
    /// New price is lower than the prior price
    Decrease,
    /// No numeric delta: an absent-vs-present transition, or equal values
    Flat,
}

impl PriceMovement {
    /// Classify a prior/new price pair.
    pub fn from_prices(old_price: Option<f64>, new_price: Option<f64>) -> Self {
        match (old_price, new_price) {
            (Some(old), Some(new)) if new > old => PriceMovement::Increase,
            (Some(old), Some(new)) if new < old => PriceMovement::Decrease,
            _ => PriceMovement::Flat,
        }
    }

    /// Stable display label
    pub fn label(&self) -> &'static str {
        match self {
            PriceMovement::Increase => "increase",
            PriceMovement::Decrease => "decrease",
            PriceMovement::Flat => "no numeric change",
        }
    }
}

/// One structured report for a NEW or CHANGED snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeReportEntry {
    /// NEW or CHANGED (UNCHANGED entries are never reported)
    pub classification: Classification,

    /// The full new snapshot
    pub snapshot: Snapshot,

    /// Immediately preceding record for the identity; `None` for NEW
    pub prior: Option<LedgerRecord>,

    /// Complete prior history for the identity, chronological (oldest first)
    pub history: Vec<LedgerRecord>,

    /// Signed delta `prior_price - new_price`; present only when both sides
    /// carry a price
    pub delta: Option<f64>,

    /// Direction of the change; `None` for NEW
    pub movement: Option<PriceMovement>,
}

/// Counts over one engine invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub new: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl BatchSummary {
    /// Total reported changes (NEW + CHANGED)
    pub fn total_changes(&self) -> usize {
        self.new + self.changed
    }

    /// Total snapshots classified
    pub fn total(&self) -> usize {
        self.new + self.changed + self.unchanged
    }
}

/// Non-fatal condition surfaced during batch processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ProcessingNote {
    /// Two or more snapshots in the batch share an identity key; the last
    /// one wins and the earlier ones are skipped without classification.
    DuplicateIdentity {
        product_key: ProductKey,
        skipped: usize,
    },
}

/// Everything `process` returns: the folded ledger, the reports, the counts,
/// and any processing notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub ledger: Ledger,
    pub reports: Vec<ChangeReportEntry>,
    pub summary: BatchSummary,
    pub notes: Vec<ProcessingNote>,
}
