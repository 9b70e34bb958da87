//! Snapshot normalization.
//!
//! Converts raw captured text fields into typed, comparison-ready values
//! before classification. A price that fails to parse is treated as absent,
//! never as zero; an absent MRP falls back to the selling price so the
//! product reads as having zero discount rather than an unknown one.

use crate::model::{ProductKey, RawSnapshot, Snapshot};

/// Parse a captured price string into a numeric value.
///
/// Strips thousands separators and surrounding whitespace. Sentinel strings
/// ("Price not found", "N/A", ...) and any other non-numeric text yield
/// `None`. Non-finite and negative parses are rejected as capture noise.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive the discount fraction from the two price fields.
///
/// `round((mrp - observed_price) / mrp, 2)` when `mrp > 0` and the observed
/// price is present; `0.0` otherwise. Discount is a pure function of these
/// two inputs and is never taken from scraped discount text.
pub fn derive_discount(list_price: Option<f64>, observed_price: Option<f64>) -> f64 {
    match (list_price, observed_price) {
        (Some(mrp), Some(price)) if mrp > 0.0 => round2((mrp - price) / mrp),
        _ => 0.0,
    }
}

/// Normalize one raw observation into a typed [`Snapshot`].
///
/// An unparseable observed price is not discarded: the snapshot propagates
/// with `observed_price = None` and the classifier treats absent-vs-present
/// as a reportable change.
pub fn normalize_snapshot(raw: &RawSnapshot) -> Snapshot {
    let observed_price = parse_price(&raw.observed_price_text);

    // MRP fallback: absent, invalid, or sentinel MRP text defaults to the
    // selling price (zero discount rather than unknown discount).
    let list_price = parse_price(&raw.list_price_text).or(observed_price);

    let discount_fraction = derive_discount(list_price, observed_price);

    Snapshot {
        product_key: ProductKey::from_url(&raw.source_url),
        display_name: raw.display_name.trim().to_string(),
        pack_size: raw.pack_size.trim().to_string(),
        list_price,
        observed_price,
        discount_fraction,
        observed_at: raw.observed_at,
        source_url: raw.source_url.trim().to_string(),
    }
}
