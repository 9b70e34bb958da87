//! JSON batch source.
//!
//! Stands in for the scraping pipeline: a batch is a JSON array of raw
//! snapshots, one per product observation, produced by whatever capture
//! process runs upstream.

use std::path::{Path, PathBuf};

use pricetrail_core::hooks::SnapshotSource;
use pricetrail_core::model::RawSnapshot;
use pricetrail_core::{Result, TrailError, TrailErrorKind};

/// Snapshot source reading one batch file from disk.
pub struct JsonBatchSource {
    path: PathBuf,
}

impl JsonBatchSource {
    /// Create a source for the given batch file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SnapshotSource for JsonBatchSource {
    fn fetch(&mut self) -> Result<Vec<RawSnapshot>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            TrailError::new(TrailErrorKind::Io)
                .with_op("batch_read")
                .with_message(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&text).map_err(|e| {
            TrailError::new(TrailErrorKind::Serialization)
                .with_op("batch_parse")
                .with_message(format!("invalid batch file {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fetch_parses_batch_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{
                "source_url": "https://example.com/p/1",
                "display_name": "Test Product",
                "pack_size": "1 kg",
                "list_price_text": "50",
                "observed_price_text": "45",
                "observed_at": "2026-08-01"
            }}]"#
        )
        .unwrap();

        let batch = JsonBatchSource::new(&path).fetch().unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].display_name, "Test Product");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = JsonBatchSource::new("/nonexistent/batch.json")
            .fetch()
            .unwrap_err();
        assert_eq!(err.kind(), TrailErrorKind::Io);
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonBatchSource::new(&path).fetch().unwrap_err();
        assert_eq!(err.kind(), TrailErrorKind::Serialization);
    }
}
