//! History command: print the recorded price history for one product.

use clap::Args;

use pricetrail_core::model::ProductKey;
use pricetrail_core::render::render_history_lines;
use pricetrail_store::SqliteLedgerStore;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(long, default_value = ".pricetrail/ledger.db")]
    pub db: String,

    /// Product URL (the identity key)
    pub url: String,
}

pub fn execute(args: HistoryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteLedgerStore::open(&args.db)?;
    let key = ProductKey::from_url(&args.url);
    let history = store.history(&key)?;

    if history.is_empty() {
        println!("No records for {}", key);
        return Ok(());
    }

    let latest = &history[history.len() - 1];
    println!("{} ({})", latest.snapshot.display_name, key);
    print!("{}", render_history_lines(&history));

    Ok(())
}
