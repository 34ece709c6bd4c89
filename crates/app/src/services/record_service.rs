//! Record service — fetch the item store snapshot, newest first.

use sensorboard_domain::error::SensorboardError;
use sensorboard_domain::record::{Record, sort_newest_first};

use crate::ports::{RecordStore, ScanOutput};

/// Application service that reads and orders records.
///
/// Stateless: every call performs its own scan.
pub struct RecordService<S> {
    store: S,
}

impl<S: RecordStore> RecordService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Scan the store and return its records by descending `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged; callers decide how much of it to
    /// expose.
    pub async fn fetch(&self) -> Result<Vec<Record>, SensorboardError> {
        let ScanOutput {
            mut records,
            truncated,
        } = self.store.scan().await?;
        if truncated {
            tracing::warn!(
                count = records.len(),
                "item store returned a partial scan, remaining pages were not read"
            );
        }
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Same as [`fetch`](Self::fetch), with failures logged and turned into
    /// an empty sequence.
    pub async fn fetch_or_empty(&self) -> Vec<Record> {
        match self.fetch().await {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch records");
                Vec::new()
            }
        }
    }
}
