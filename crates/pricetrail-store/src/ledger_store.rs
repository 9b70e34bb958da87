//! SQLite-backed ledger store.
//!
//! Persistence is insert-only: `save` writes records the database has not
//! seen (keyed by `record_id`) inside one transaction and never updates or
//! deletes an existing row, so the on-disk ledger keeps the same append-only
//! guarantee the in-memory [`Ledger`] has.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use pricetrail_core::hooks::LedgerStore;
use pricetrail_core::model::{Ledger, LedgerRecord, ProductKey, Snapshot};

use crate::db;
use crate::errors::{Result, StoreError};
use crate::schema;

/// Durable ledger store over a single SQLite database.
pub struct SqliteLedgerStore {
    conn: Connection,
}

impl SqliteLedgerStore {
    /// Open (or create) the ledger database at the given path.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened or carries an incompatible
    /// schema version.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory ledger database (for testing).
    ///
    /// # Errors
    ///
    /// Fails when SQLite cannot allocate the in-memory database.
    pub fn in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Load every persisted record in audit order.
    ///
    /// # Errors
    ///
    /// Fails when the database cannot be read or a row cannot be decoded.
    pub fn load_ledger(&self) -> Result<Ledger> {
        let mut stmt = self.conn.prepare(
            "SELECT record_id, seq, product_key, display_name, pack_size,
                    list_price, observed_price, discount, observed_at, source_url
             FROM ledger_records
             ORDER BY product_key ASC, observed_at DESC, seq DESC",
        )?;
        let records = stmt
            .query_map([], record_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let records = records
            .into_iter()
            .collect::<Result<Vec<LedgerRecord>>>()?;

        tracing::debug!(ledger_len = records.len(), "loaded ledger");
        Ok(Ledger::from_records(records))
    }

    /// Persist the ledger: insert every record the database has not seen.
    ///
    /// Runs in one transaction; rows already present (same `record_id`) are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Fails when the transaction cannot be committed; nothing is partially
    /// written in that case.
    pub fn save_ledger(&mut self, ledger: &Ledger) -> Result<()> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO ledger_records
                    (record_id, seq, product_key, display_name, pack_size,
                     list_price, observed_price, discount, observed_at, source_url)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for record in ledger.records() {
                let snapshot = &record.snapshot;
                inserted += stmt.execute(params![
                    record.record_id,
                    record.seq as i64,
                    snapshot.product_key.as_str(),
                    snapshot.display_name,
                    snapshot.pack_size,
                    snapshot.list_price,
                    snapshot.observed_price,
                    snapshot.discount_fraction,
                    snapshot.observed_at.format("%Y-%m-%d").to_string(),
                    snapshot.source_url,
                ])?;
            }
        }
        tx.commit()?;

        tracing::debug!(
            inserted,
            ledger_len = ledger.len(),
            "saved ledger"
        );
        Ok(())
    }

    /// Full persisted history for one product key, chronological.
    ///
    /// # Errors
    ///
    /// Fails when the database cannot be read or a row cannot be decoded.
    pub fn history(&self, key: &ProductKey) -> Result<Vec<LedgerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT record_id, seq, product_key, display_name, pack_size,
                    list_price, observed_price, discount, observed_at, source_url
             FROM ledger_records
             WHERE product_key = ?1
             ORDER BY observed_at ASC, seq ASC",
        )?;
        let records = stmt
            .query_map([key.as_str()], record_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        records.into_iter().collect()
    }
}

/// Decode one row into a LedgerRecord.
///
/// Returned as a nested result so SQLite access errors and decode errors
/// stay distinguishable inside `query_map`.
fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Result<LedgerRecord>> {
    let record_id: String = row.get(0)?;
    let seq: i64 = row.get(1)?;
    let product_key: String = row.get(2)?;
    let display_name: String = row.get(3)?;
    let pack_size: String = row.get(4)?;
    let list_price: Option<f64> = row.get(5)?;
    let observed_price: Option<f64> = row.get(6)?;
    let discount: f64 = row.get(7)?;
    let observed_at: String = row.get(8)?;
    let source_url: String = row.get(9)?;

    let decoded = NaiveDate::parse_from_str(&observed_at, "%Y-%m-%d")
        .map_err(|e| {
            StoreError::Corrupt(format!(
                "record {} has invalid observed_at '{}': {}",
                record_id, observed_at, e
            ))
        })
        .map(|observed_at| LedgerRecord {
            record_id,
            seq: seq as u64,
            snapshot: Snapshot {
                product_key: ProductKey::from_url(&product_key),
                display_name,
                pack_size,
                list_price,
                observed_price,
                discount_fraction: discount,
                observed_at,
                source_url,
            },
        });

    Ok(decoded)
}

impl LedgerStore for SqliteLedgerStore {
    fn load(&mut self) -> pricetrail_core::Result<Ledger> {
        Ok(self.load_ledger()?)
    }

    fn save(&mut self, ledger: &Ledger) -> pricetrail_core::Result<()> {
        Ok(self.save_ledger(ledger)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(url: &str, price: Option<f64>, day: u32) -> Snapshot {
        Snapshot {
            product_key: ProductKey::from_url(url),
            display_name: format!("Product {}", url),
            pack_size: "1 kg".to_string(),
            list_price: price,
            observed_price: price,
            discount_fraction: 0.0,
            observed_at: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            source_url: url.to_string(),
        }
    }

    #[test]
    fn test_save_then_load_preserves_records() {
        let mut store = SqliteLedgerStore::in_memory().unwrap();
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", Some(10.0), 1));
        ledger.append(snap("u2", None, 2));
        ledger.sort_for_audit();

        store.save_ledger(&ledger).unwrap();
        let loaded = store.load_ledger().unwrap();

        assert_eq!(loaded, ledger);
    }

    #[test]
    fn test_repeated_saves_never_duplicate() {
        let mut store = SqliteLedgerStore::in_memory().unwrap();
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", Some(10.0), 1));

        store.save_ledger(&ledger).unwrap();
        store.save_ledger(&ledger).unwrap();

        assert_eq!(store.load_ledger().unwrap().len(), 1);
    }

    #[test]
    fn test_history_is_chronological() {
        let mut store = SqliteLedgerStore::in_memory().unwrap();
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", Some(12.0), 5));
        ledger.append(snap("u1", Some(10.0), 1));
        ledger.append(snap("u2", Some(99.0), 3));
        ledger.sort_for_audit();
        store.save_ledger(&ledger).unwrap();

        let history = store.history(&ProductKey::from_url("u1")).unwrap();
        let prices: Vec<Option<f64>> = history
            .iter()
            .map(|r| r.snapshot.observed_price)
            .collect();
        assert_eq!(prices, vec![Some(10.0), Some(12.0)]);
    }

    #[test]
    fn test_absent_prices_round_trip_as_null() {
        let mut store = SqliteLedgerStore::in_memory().unwrap();
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", None, 1));
        store.save_ledger(&ledger).unwrap();

        let loaded = store.load_ledger().unwrap();
        assert_eq!(loaded.records()[0].snapshot.observed_price, None);
        assert_eq!(loaded.records()[0].snapshot.list_price, None);
    }
}
