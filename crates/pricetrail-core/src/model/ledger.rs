use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::snapshot::{ProductKey, Snapshot};

/// A persisted Snapshot, immutable once appended.
///
/// `seq` is a monotone append sequence assigned by the owning [`Ledger`]; it
/// breaks ties deterministically when multiple records for one product share
/// an observation day (the record appended last wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Unique record identifier (UUIDv7)
    pub record_id: String,

    /// Monotone append sequence within the ledger
    pub seq: u64,

    /// The promoted observation
    pub snapshot: Snapshot,
}

impl LedgerRecord {
    /// Identity key of the recorded product
    pub fn product_key(&self) -> &ProductKey {
        &self.snapshot.product_key
    }
}

/// Append-only historical store of all past observations.
///
/// Every record ever appended remains in the ledger; records are never
/// deleted or mutated. Physical order is an audit/presentation concern only:
/// classification always scans all records for an identity, so callers must
/// not rely on order for correctness.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ledger {
    records: Vec<LedgerRecord>,
    next_seq: u64,
}

impl Ledger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously persisted records.
    ///
    /// The append sequence resumes after the highest persisted `seq`.
    pub fn from_records(records: Vec<LedgerRecord>) -> Self {
        let next_seq = records.iter().map(|r| r.seq + 1).max().unwrap_or(0);
        Self { records, next_seq }
    }

    /// All records, in current (audit) order
    pub fn records(&self) -> &[LedgerRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full history for one identity, chronological (oldest first).
    ///
    /// Ordered by (`observed_at` ascending, `seq` ascending) regardless of
    /// the ledger's physical order.
    pub fn history_for(&self, key: &ProductKey) -> Vec<&LedgerRecord> {
        let mut history: Vec<&LedgerRecord> = self
            .records
            .iter()
            .filter(|r| r.product_key() == key)
            .collect();
        history.sort_by_key(|r| (r.snapshot.observed_at, r.seq));
        history
    }

    /// Latest prior record for one identity: maximum `observed_at`, ties
    /// broken by maximum `seq` (the record appended last).
    pub fn latest_for(&self, key: &ProductKey) -> Option<&LedgerRecord> {
        self.records
            .iter()
            .filter(|r| r.product_key() == key)
            .max_by_key(|r| (r.snapshot.observed_at, r.seq))
    }

    /// Promote a snapshot into a new record.
    ///
    /// Assigns a fresh UUIDv7 `record_id` and the next append sequence.
    /// Existing records are never touched.
    pub fn append(&mut self, snapshot: Snapshot) -> &LedgerRecord {
        let record = LedgerRecord {
            record_id: Uuid::now_v7().to_string(),
            seq: self.next_seq,
            snapshot,
        };
        self.next_seq += 1;
        self.records.push(record);
        self.records.last().expect("record was just pushed")
    }

    /// Re-sort into audit order: `product_key` ascending, `observed_at`
    /// descending, `seq` descending (latest-first per product).
    pub fn sort_for_audit(&mut self) {
        self.records.sort_by(|a, b| {
            a.product_key()
                .cmp(b.product_key())
                .then(b.snapshot.observed_at.cmp(&a.snapshot.observed_at))
                .then(b.seq.cmp(&a.seq))
        });
    }
}
