//! Storage-specific error type wrapping AWS SDK errors.

use sensorboard_domain::error::{DecodeError, SensorboardError};

/// Errors originating from the DynamoDB storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The `Scan` request failed (network, credentials, missing table, …).
    #[error("scan of table `{table}` failed: {message}")]
    Scan {
        /// Table that was scanned.
        table: String,
        /// Full error chain as rendered by the SDK.
        message: String,
        /// Underlying SDK error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A returned item could not be mapped into a record.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl StorageError {
    pub(crate) fn scan(table: &str, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Scan {
            table: table.to_string(),
            message: aws_sdk_dynamodb::error::DisplayErrorContext(&err).to_string(),
            source: Box::new(err),
        }
    }
}

impl From<StorageError> for SensorboardError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Decode(inner) => Self::Decode(inner),
            other @ StorageError::Scan { .. } => Self::Store(Box::new(other)),
        }
    }
}
