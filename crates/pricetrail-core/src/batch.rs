//! Batch orchestration: the engine entry point.
//!
//! [`process`] accepts a batch of normalized snapshots and the current
//! ledger, and produces the folded ledger, one report per NEW/CHANGED
//! snapshot, and summary counts. It performs no I/O and is deterministic:
//! the same batch against the same ledger always yields the same outcome.

use std::collections::BTreeMap;

use crate::classify::classify_against;
use crate::model::{
    BatchOutcome, BatchSummary, ChangeReportEntry, Classification, Ledger, PriceMovement,
    ProcessingNote, ProductKey, Snapshot,
};

/// Resolve intra-batch duplicate identities: the last snapshot per key wins.
///
/// Earlier duplicates are skipped entirely (never classified) and surfaced
/// as [`ProcessingNote::DuplicateIdentity`], one note per affected key in
/// key order.
fn dedup_last_wins(batch: Vec<Snapshot>) -> (Vec<Snapshot>, Vec<ProcessingNote>) {
    let mut last_index: BTreeMap<ProductKey, usize> = BTreeMap::new();
    for (index, snapshot) in batch.iter().enumerate() {
        last_index.insert(snapshot.product_key.clone(), index);
    }

    let mut skipped: BTreeMap<ProductKey, usize> = BTreeMap::new();
    let mut survivors = Vec::with_capacity(last_index.len());
    for (index, snapshot) in batch.into_iter().enumerate() {
        if last_index[&snapshot.product_key] == index {
            survivors.push(snapshot);
        } else {
            *skipped.entry(snapshot.product_key).or_insert(0) += 1;
        }
    }

    let notes = skipped
        .into_iter()
        .map(|(product_key, count)| ProcessingNote::DuplicateIdentity {
            product_key,
            skipped: count,
        })
        .collect();

    (survivors, notes)
}

/// Ingest one batch against the ledger.
///
/// For each snapshot (per identity, independently):
/// - classify against the identity's latest prior record;
/// - for NEW and CHANGED, capture the prior record and full history as they
///   stood before this batch, then promote the snapshot to a new record;
/// - discard UNCHANGED snapshots without writing.
///
/// Existing records are never edited or removed. After the fold the ledger
/// is re-sorted into audit order (a presentation concern only).
///
/// Idempotent on UNCHANGED: re-running the same batch against the ledger
/// this call produced yields zero new records and an empty report list.
pub fn process(batch: Vec<Snapshot>, ledger: Ledger) -> BatchOutcome {
    let mut ledger = ledger;
    let batch_len = batch.len();
    let (survivors, notes) = dedup_last_wins(batch);

    tracing::debug!(
        batch_len,
        deduped_len = survivors.len(),
        ledger_len = ledger.len(),
        "processing batch"
    );

    let mut reports = Vec::new();
    let mut summary = BatchSummary::default();

    for snapshot in survivors {
        let prior = ledger.latest_for(&snapshot.product_key);
        let classification = classify_against(prior, &snapshot);

        match classification {
            Classification::Unchanged => {
                summary.unchanged += 1;
            }
            Classification::New => {
                summary.new += 1;
                reports.push(ChangeReportEntry {
                    classification,
                    snapshot: snapshot.clone(),
                    prior: None,
                    history: Vec::new(),
                    delta: None,
                    movement: None,
                });
                ledger.append(snapshot);
            }
            Classification::Changed => {
                summary.changed += 1;
                let prior = prior.cloned();
                let history = ledger
                    .history_for(&snapshot.product_key)
                    .into_iter()
                    .cloned()
                    .collect();

                let old_price = prior.as_ref().and_then(|r| r.snapshot.observed_price);
                let new_price = snapshot.observed_price;
                let delta = match (old_price, new_price) {
                    (Some(old), Some(new)) => Some(old - new),
                    _ => None,
                };

                reports.push(ChangeReportEntry {
                    classification,
                    snapshot: snapshot.clone(),
                    prior,
                    history,
                    delta,
                    movement: Some(PriceMovement::from_prices(old_price, new_price)),
                });
                ledger.append(snapshot);
            }
        }
    }

    ledger.sort_for_audit();

    tracing::debug!(
        new_count = summary.new,
        changed_count = summary.changed,
        unchanged_count = summary.unchanged,
        "batch processed"
    );

    BatchOutcome {
        ledger,
        reports,
        summary,
        notes,
    }
}
