//! Record store port — read-only access to the item store.

use std::future::Future;

use sensorboard_domain::error::SensorboardError;
use sensorboard_domain::record::Record;

/// Result of a single scan of the item store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutput {
    /// Items in the order the store returned them.
    pub records: Vec<Record>,
    /// Whether the store signalled more items beyond those returned.
    pub truncated: bool,
}

impl ScanOutput {
    /// A complete scan holding `records`.
    #[must_use]
    pub fn complete(records: Vec<Record>) -> Self {
        Self {
            records,
            truncated: false,
        }
    }
}

/// Reads every item of the configured collection.
pub trait RecordStore {
    /// Scan the whole collection.
    ///
    /// An empty collection is an empty [`ScanOutput`], never an error.
    fn scan(&self) -> impl Future<Output = Result<ScanOutput, SensorboardError>> + Send;
}

impl<T: RecordStore + Send + Sync> RecordStore for std::sync::Arc<T> {
    fn scan(&self) -> impl Future<Output = Result<ScanOutput, SensorboardError>> + Send {
        (**self).scan()
    }
}
