//! Daily change-log sink.
//!
//! Appends rendered report blocks to one file per run-day
//! (`<dir>/<YYYY-MM-DD>.txt`), mirroring the change-log directory layout the
//! tracking workflow expects. Files are only ever appended to.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use pricetrail_core::hooks::ReportSink;

use crate::errors::Result;

/// Append-only report sink writing one log file per day.
pub struct DailyLogSink {
    path: PathBuf,
}

impl DailyLogSink {
    /// Create a sink for today's log file under `dir`.
    ///
    /// # Errors
    ///
    /// Fails when the log directory cannot be created.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::for_date(dir, chrono::Local::now().date_naive())
    }

    /// Create a sink for a specific day's log file under `dir`.
    ///
    /// # Errors
    ///
    /// Fails when the log directory cannot be created.
    pub fn for_date<P: AsRef<Path>>(dir: P, date: NaiveDate) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        let path = dir
            .as_ref()
            .join(format!("{}.txt", date.format("%Y-%m-%d")));
        Ok(Self { path })
    }

    /// Path of the log file this sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, block: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        Ok(())
    }
}

impl ReportSink for DailyLogSink {
    fn write_block(&mut self, block: &str) -> pricetrail_core::Result<()> {
        Ok(self.append(block)?)
    }
}
