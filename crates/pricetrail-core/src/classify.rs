//! Snapshot classification against ledger history.
//!
//! For one snapshot, given the ledger's existing records for the same
//! identity, decide NEW / CHANGED / UNCHANGED. Classification is
//! per-identity and independent: the outcome for one product never depends
//! on any other product in the batch.

use crate::model::{Classification, Ledger, LedgerRecord, Snapshot};

/// Decide the classification for one snapshot given the latest prior record.
///
/// - No prior record → NEW.
/// - Prior exists and the observed price differs → CHANGED. `Option`
///   equality makes absent-vs-present a difference, so a product going from
///   priced to unpriced (or back) is a reportable change, not a failure.
/// - Prior exists with an identical observed price → UNCHANGED, regardless
///   of MRP, pack size, or discount drift.
pub fn classify_against(prior: Option<&LedgerRecord>, snapshot: &Snapshot) -> Classification {
    match prior {
        None => Classification::New,
        Some(record) if record.snapshot.observed_price != snapshot.observed_price => {
            Classification::Changed
        }
        Some(_) => Classification::Unchanged,
    }
}

/// Classify one snapshot against the ledger.
///
/// The comparison baseline is the identity's latest prior record: maximum
/// `observed_at`, ties broken by maximum `seq` (see
/// [`Ledger::latest_for`]).
pub fn classify(snapshot: &Snapshot, ledger: &Ledger) -> Classification {
    classify_against(ledger.latest_for(&snapshot.product_key), snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductKey;
    use chrono::NaiveDate;

    fn snap(url: &str, price: Option<f64>, day: u32) -> Snapshot {
        Snapshot {
            product_key: ProductKey::from_url(url),
            display_name: "Test".to_string(),
            pack_size: "1 kg".to_string(),
            list_price: price,
            observed_price: price,
            discount_fraction: 0.0,
            observed_at: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            source_url: url.to_string(),
        }
    }

    #[test]
    fn test_no_prior_record_is_new() {
        let ledger = Ledger::new();
        let classification = classify(&snap("u1", Some(100.0), 1), &ledger);
        assert_eq!(classification, Classification::New);
    }

    #[test]
    fn test_identical_price_is_unchanged() {
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", Some(50.0), 1));

        let classification = classify(&snap("u1", Some(50.0), 2), &ledger);
        assert_eq!(classification, Classification::Unchanged);
    }

    #[test]
    fn test_differing_price_is_changed() {
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", Some(80.0), 1));

        let classification = classify(&snap("u1", Some(72.0), 2), &ledger);
        assert_eq!(classification, Classification::Changed);
    }

    #[test]
    fn test_absent_after_present_is_changed() {
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", Some(80.0), 1));

        let classification = classify(&snap("u1", None, 2), &ledger);
        assert_eq!(classification, Classification::Changed);
    }

    #[test]
    fn test_present_after_absent_is_changed() {
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", None, 1));

        let classification = classify(&snap("u1", Some(80.0), 2), &ledger);
        assert_eq!(classification, Classification::Changed);
    }

    #[test]
    fn test_absent_after_absent_is_unchanged() {
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", None, 1));

        let classification = classify(&snap("u1", None, 2), &ledger);
        assert_eq!(classification, Classification::Unchanged);
    }

    #[test]
    fn test_mrp_drift_alone_is_unchanged() {
        let mut ledger = Ledger::new();
        ledger.append(snap("u1", Some(50.0), 1));

        let mut next = snap("u1", Some(50.0), 2);
        next.list_price = Some(60.0);
        next.discount_fraction = 0.17;
        next.pack_size = "2 kg".to_string();

        assert_eq!(classify(&next, &ledger), Classification::Unchanged);
    }

    #[test]
    fn test_baseline_is_latest_by_date_then_seq() {
        let mut ledger = Ledger::new();
        // Same day, two records: seq 0 then seq 1. The later append is the
        // baseline, so a snapshot matching seq 1's price is UNCHANGED.
        ledger.append(snap("u1", Some(10.0), 1));
        ledger.append(snap("u1", Some(12.0), 1));

        assert_eq!(
            classify(&snap("u1", Some(12.0), 2), &ledger),
            Classification::Unchanged
        );
        assert_eq!(
            classify(&snap("u1", Some(10.0), 2), &ledger),
            Classification::Changed
        );
    }

    #[test]
    fn test_classification_ignores_other_identities() {
        let mut ledger = Ledger::new();
        ledger.append(snap("u2", Some(80.0), 1));

        // u1 has no history even though u2 does
        assert_eq!(
            classify(&snap("u1", Some(80.0), 2), &ledger),
            Classification::New
        );
    }
}
