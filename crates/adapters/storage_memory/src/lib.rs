//! # sensorboard-adapter-storage-memory
//!
//! In-memory item store holding a fixed snapshot of records.
//!
//! Used to run the dashboard without AWS access and to drive end-to-end
//! tests. The snapshot can be seeded from a JSON file holding an array of
//! objects, e.g.:
//!
//! ```json
//! [
//!   {"device_id": "DCDA0C5A94CC", "temperature": 21.5, "timestamp": 1700000000},
//!   {"device_id": "DCDA0C5A94CC", "temperature": 21.7}
//! ]
//! ```
//!
//! ## Dependency rule
//!
//! Depends on `sensorboard-app` (port traits) and `sensorboard-domain` only.

use std::path::Path;

use serde_json::Value;

use sensorboard_app::ports::{RecordStore, ScanOutput};
use sensorboard_domain::error::{DecodeError, SensorboardError};
use sensorboard_domain::record::Record;

/// Errors raised while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),

    /// The seed file is not valid JSON.
    #[error("failed to parse seed file")]
    Json(#[from] serde_json::Error),

    /// The seed is valid JSON but not an array.
    #[error("seed must be a JSON array, found {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// An element of the seed array is not an object.
    #[error("invalid seed record")]
    Decode(#[from] DecodeError),
}

/// Record store serving the same snapshot on every scan.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<Record>,
}

impl InMemoryRecordStore {
    /// Create a store over the given records, kept in insertion order.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the input is not a JSON array of objects.
    pub fn from_json_str(input: &str) -> Result<Self, SeedError> {
        match serde_json::from_str::<Value>(input)? {
            Value::Array(items) => {
                let records = items
                    .into_iter()
                    .map(Record::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::new(records))
            }
            Value::Object(_) => Err(SeedError::NotAnArray { found: "object" }),
            _ => Err(SeedError::NotAnArray { found: "scalar" }),
        }
    }

    /// Read and parse a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Number of records in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn scan(&self) -> impl Future<Output = Result<ScanOutput, SensorboardError>> + Send {
        let output = ScanOutput::complete(self.records.clone());
        async { Ok(output) }
    }
}
