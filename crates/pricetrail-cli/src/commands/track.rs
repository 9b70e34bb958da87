//! Track command: ingest one snapshot batch and report changes.

use clap::Args;

use pricetrail_core::hooks::{LedgerStore, Notifier, ReportSink, SnapshotSource};
use pricetrail_core::model::{Classification, ProcessingNote, Snapshot};
use pricetrail_core::render::render_report_block;
use pricetrail_core::{normalize_snapshot, process};
use pricetrail_core_types::schema::{EVENT_END, EVENT_START};
use pricetrail_core_types::RequestContext;
use pricetrail_store::{DailyLogSink, SqliteLedgerStore};

use crate::notify::LogNotifier;
use crate::source::JsonBatchSource;

#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Batch file: JSON array of raw snapshots
    #[arg(long)]
    pub batch: String,

    #[arg(long, default_value = ".pricetrail/ledger.db")]
    pub db: String,

    #[arg(long, default_value = "change_log")]
    pub log_dir: String,

    /// Suppress per-change blocks on stdout (they still go to the log file)
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: TrackArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    tracing::info!(
        request_id = %ctx.request_id,
        event = EVENT_START,
        batch = %args.batch,
        "track run"
    );

    if let Some(parent) = std::path::Path::new(&args.db).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut source = JsonBatchSource::new(&args.batch);
    let raw_batch = source.fetch()?;
    let batch: Vec<Snapshot> = raw_batch.iter().map(normalize_snapshot).collect();

    let mut store = SqliteLedgerStore::open(&args.db)?;
    let ledger = LedgerStore::load(&mut store)?;
    let outcome = process(batch, ledger);

    // Persist first: if the updated ledger cannot be saved, the batch's
    // classification work is wasted and nothing below may claim success.
    LedgerStore::save(&mut store, &outcome.ledger)?;

    let mut sink = DailyLogSink::new(&args.log_dir)?;
    let notifier = LogNotifier;

    for entry in &outcome.reports {
        let block = render_report_block(entry);
        sink.write_block(&block)?;
        if !args.quiet {
            println!("{}", block);
        }
        if entry.classification == Classification::Changed {
            let old_price = entry.prior.as_ref().and_then(|r| r.snapshot.observed_price);
            notifier.price_changed(
                &entry.snapshot.display_name,
                old_price,
                entry.snapshot.observed_price,
            );
        }
    }

    for note in &outcome.notes {
        match note {
            ProcessingNote::DuplicateIdentity {
                product_key,
                skipped,
            } => {
                tracing::warn!(
                    product_key = %product_key,
                    skipped,
                    "duplicate identity in batch; kept the last snapshot"
                );
            }
        }
    }

    let summary = outcome.summary;
    tracing::info!(
        request_id = %ctx.request_id,
        event = EVENT_END,
        new_count = summary.new,
        changed_count = summary.changed,
        unchanged_count = summary.unchanged,
        "track run"
    );

    if summary.total_changes() == 0 {
        println!("No new entries or price changes.");
    } else {
        println!("Total changes: {}", summary.total_changes());
        println!("New products added: {}", summary.new);
        println!("Products with price change: {}", summary.changed);
        println!("Change log: {}", sink.path().display());
    }

    Ok(())
}
