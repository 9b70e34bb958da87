//! Collaborator contracts around the engine.
//!
//! The engine itself performs no I/O; snapshot acquisition, ledger
//! persistence, notification dispatch, and report logging all live behind
//! these traits so the core stays a pure function.

use crate::errors::Result;
use crate::model::{Ledger, RawSnapshot};

/// Supplies a batch of raw observations.
///
/// A failure to observe a given product must surface as a RawSnapshot with
/// sentinel price text, not as a missing entry, so the batch shape stays
/// stable and "no data" can be reported as its own outcome.
pub trait SnapshotSource {
    /// Fetch the next batch of raw snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error only when the source itself is unreachable (for
    /// example, the batch file cannot be read), never for individual
    /// products.
    fn fetch(&mut self) -> Result<Vec<RawSnapshot>>;
}

/// Durable history of ledger records.
///
/// Implementations must preserve every previously appended record across
/// `save`/`load` cycles; the ledger is a full audit trail, not a
/// current-state table.
pub trait LedgerStore {
    /// Load the full ledger.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the store cannot be read; fatal to the run.
    fn load(&mut self) -> Result<Ledger>;

    /// Persist the ledger.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the store cannot be written. Persistence
    /// failure must abort the run before any success is reported, since the
    /// batch's classification work is wasted without it.
    fn save(&mut self, ledger: &Ledger) -> Result<()>;
}

/// Receives one trigger per CHANGED classification.
///
/// Fire-and-forget: implementations must never block or fail the batch.
/// Delivery problems are the implementation's to swallow (typically by
/// logging them).
pub trait Notifier {
    /// Notify that a product's observed price changed.
    fn price_changed(&self, display_name: &str, old_price: Option<f64>, new_price: Option<f64>);
}

/// Notifier that discards every trigger (default for tests and library use).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn price_changed(&self, _: &str, _: Option<f64>, _: Option<f64>) {}
}

/// Receives rendered report blocks for durable logging or display.
pub trait ReportSink {
    /// Append one rendered block.
    ///
    /// # Errors
    ///
    /// Returns `Io` when the sink cannot be written.
    fn write_block(&mut self, block: &str) -> Result<()>;
}

/// Sink that collects blocks in memory (for tests).
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    blocks: Vec<String>,
}

impl VecSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks written so far
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }
}

impl ReportSink for VecSink {
    fn write_block(&mut self, block: &str) -> Result<()> {
        self.blocks.push(block.to_string());
        Ok(())
    }
}
