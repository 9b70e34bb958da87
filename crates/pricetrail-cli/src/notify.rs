//! Log-based notifier.
//!
//! Price-change triggers land in the structured log, where an outer
//! process can pick them up for desktop or chat delivery. Fire-and-forget:
//! this notifier cannot fail and never blocks the batch.

use pricetrail_core::hooks::Notifier;

/// Notifier that emits one `tracing` event per price change.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn price_changed(&self, display_name: &str, old_price: Option<f64>, new_price: Option<f64>) {
        tracing::info!(
            product = display_name,
            old_price = ?old_price,
            new_price = ?new_price,
            "price changed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_accepts_absent_prices() {
        let notifier = LogNotifier;
        notifier.price_changed("Product", Some(80.0), None);
        notifier.price_changed("Product", None, Some(72.0));
    }
}
