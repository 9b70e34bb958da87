use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity key correlating observations of the same product across time.
///
/// Identity is URL-based: display names are not guaranteed unique (two
/// distinct products can share one), so the source URL is the stable
/// correlate. Construction trims surrounding whitespace and nothing else;
/// URL canonicalization beyond that is a capture concern, not an engine
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductKey(String);

impl ProductKey {
    /// Build a key from a product URL
    pub fn from_url(url: &str) -> Self {
        Self(url.trim().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One observation of one product exactly as captured, before normalization.
///
/// Price fields are free-form text: capture failures surface as sentinel
/// strings (for example `"Price not found"`), never as missing entries, so
/// the batch shape stays stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    /// Product page URL (identity source)
    pub source_url: String,

    /// Human label as displayed on the page
    pub display_name: String,

    /// Free-form descriptive attribute (e.g. "500 gm"), not compared
    pub pack_size: String,

    /// MRP as captured; may be a sentinel or non-numeric
    pub list_price_text: String,

    /// Selling price as captured; may be a sentinel or non-numeric
    pub observed_price_text: String,

    /// Observation day
    pub observed_at: NaiveDate,
}

/// One normalized observation of one product at one point in time.
///
/// Immutable once built. `discount_fraction` is always derived from
/// (`list_price`, `observed_price`) and never carried over from scraped
/// discount text, so it stays internally consistent with the two price
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Identity key (URL-based, see [`ProductKey`])
    pub product_key: ProductKey,

    /// Human label
    pub display_name: String,

    /// Descriptive attribute, not used for comparison
    pub pack_size: String,

    /// MRP; `None` only when the observed price is also unparseable
    /// (otherwise the MRP fallback substitutes the selling price)
    pub list_price: Option<f64>,

    /// Selling price; `None` when the captured text failed to parse
    pub observed_price: Option<f64>,

    /// Derived discount in [0, 1], rounded to two decimals
    pub discount_fraction: f64,

    /// Observation day
    pub observed_at: NaiveDate,

    /// Product page URL, kept for reference and reporting
    pub source_url: String,
}

impl Snapshot {
    /// Check whether a selling price was observed
    pub fn has_price(&self) -> bool {
        self.observed_price.is_some()
    }
}
