//! Audit block renderer for change reports.
//!
//! Produces one plain-text block per NEW/CHANGED entry in the format the
//! daily change log uses: identity label, descriptive attributes, current
//! prices, then the full prior-price history in chronological order.

use crate::model::{ChangeReportEntry, Classification, LedgerRecord};

/// Terminator appended after every block in the change log.
pub const BLOCK_RULE: &str = "===========";

/// Format an optional price for display.
fn price_label(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("{}", value),
        None => "unavailable".to_string(),
    }
}

/// Render the `date: price` history lines for one identity, oldest first.
pub fn render_history_lines(history: &[LedgerRecord]) -> String {
    let mut out = String::new();
    for record in history {
        out.push_str(&format!(
            "{}: {}\n",
            record.snapshot.observed_at.format("%Y-%m-%d"),
            price_label(record.snapshot.observed_price)
        ));
    }
    out
}

/// Render one report entry as an audit block.
///
/// NEW entries carry `Previous prices: None`; CHANGED entries carry the old
/// → new transition with the signed delta and a movement label, followed by
/// every previously recorded price.
pub fn render_report_block(entry: &ChangeReportEntry) -> String {
    let snapshot = &entry.snapshot;
    let mut out = String::new();

    out.push_str(&format!("[{}]\n", entry.classification.label()));
    out.push_str(&format!("SKU Name: {}\n", snapshot.display_name));
    out.push_str(&format!("Pack Size: {}\n", snapshot.pack_size));
    out.push_str(&format!("MRP: {}\n", price_label(snapshot.list_price)));
    out.push_str(&format!(
        "Selling Price: {}\n",
        price_label(snapshot.observed_price)
    ));
    out.push_str(&format!("Discount: {}\n", snapshot.discount_fraction));
    out.push_str(&format!("Product URL: {}\n", snapshot.source_url));
    out.push_str(&format!(
        "LastUpdated: {}\n",
        snapshot.observed_at.format("%Y-%m-%d")
    ));

    if entry.classification == Classification::Changed {
        let old_price = entry.prior.as_ref().and_then(|r| r.snapshot.observed_price);
        out.push_str(&format!(
            "Price change: {} -> {}",
            price_label(old_price),
            price_label(snapshot.observed_price)
        ));
        match (entry.delta, entry.movement) {
            (Some(delta), Some(movement)) => {
                out.push_str(&format!(" ({} of {})\n", movement.label(), delta.abs()));
            }
            (_, Some(movement)) => {
                out.push_str(&format!(" ({})\n", movement.label()));
            }
            _ => out.push('\n'),
        }
    }

    if entry.history.is_empty() {
        out.push_str("Previous prices: None\n");
    } else {
        out.push_str("Previous prices:\n");
        out.push_str(&render_history_lines(&entry.history));
    }

    out.push('\n');
    out.push_str(BLOCK_RULE);
    out.push('\n');
    out
}
