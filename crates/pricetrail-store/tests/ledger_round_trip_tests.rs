//! Round-trip tests for the on-disk ledger store.
//!
//! The persisted ledger must preserve every appended record across
//! save/load cycles and keep the engine's idempotence guarantee intact.

use chrono::NaiveDate;
use pricetrail_core::model::{Ledger, ProductKey, RawSnapshot};
use pricetrail_core::normalize::normalize_snapshot;
use pricetrail_core::process;
use pricetrail_store::SqliteLedgerStore;

fn raw(url: &str, price_text: &str, day: u32) -> RawSnapshot {
    RawSnapshot {
        source_url: url.to_string(),
        display_name: format!("Product {}", url),
        pack_size: "1 kg".to_string(),
        list_price_text: price_text.to_string(),
        observed_price_text: price_text.to_string(),
        observed_at: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
    }
}

#[test]
fn test_process_save_reload_process_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("ledger.db");

    let batch = vec![
        normalize_snapshot(&raw("u1", "10", 1)),
        normalize_snapshot(&raw("u2", "20", 1)),
    ];

    // First run: everything is NEW, persisted to disk
    {
        let mut store = SqliteLedgerStore::open(&db_path).unwrap();
        let outcome = process(batch.clone(), store.load_ledger().unwrap());
        assert_eq!(outcome.summary.new, 2);
        store.save_ledger(&outcome.ledger).unwrap();
    }

    // Second run against the reloaded ledger: nothing to report
    {
        let mut store = SqliteLedgerStore::open(&db_path).unwrap();
        let outcome = process(batch, store.load_ledger().unwrap());
        assert!(outcome.reports.is_empty());
        assert_eq!(outcome.summary.unchanged, 2);
        store.save_ledger(&outcome.ledger).unwrap();
        assert_eq!(store.load_ledger().unwrap().len(), 2);
    }
}

#[test]
fn test_superseded_records_remain_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("ledger.db");

    let mut store = SqliteLedgerStore::open(&db_path).unwrap();

    let first = process(
        vec![normalize_snapshot(&raw("u1", "80", 1))],
        store.load_ledger().unwrap(),
    );
    store.save_ledger(&first.ledger).unwrap();

    let second = process(
        vec![normalize_snapshot(&raw("u1", "72", 2))],
        store.load_ledger().unwrap(),
    );
    assert_eq!(second.summary.changed, 1);
    store.save_ledger(&second.ledger).unwrap();

    // Both the superseded and the new record are on disk
    let history = store.history(&ProductKey::from_url("u1")).unwrap();
    let prices: Vec<Option<f64>> = history
        .iter()
        .map(|r| r.snapshot.observed_price)
        .collect();
    assert_eq!(prices, vec![Some(80.0), Some(72.0)]);
}

#[test]
fn test_reload_resumes_append_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("ledger.db");

    let mut store = SqliteLedgerStore::open(&db_path).unwrap();
    let outcome = process(
        vec![
            normalize_snapshot(&raw("u1", "10", 1)),
            normalize_snapshot(&raw("u2", "20", 1)),
        ],
        Ledger::new(),
    );
    store.save_ledger(&outcome.ledger).unwrap();

    let mut reloaded = store.load_ledger().unwrap();
    let record = reloaded.append(normalize_snapshot(&raw("u3", "30", 2)));
    assert_eq!(record.seq, 2);
}

#[test]
fn test_load_on_fresh_database_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteLedgerStore::open(dir.path().join("ledger.db")).unwrap();
    assert!(store.load_ledger().unwrap().is_empty());
}
