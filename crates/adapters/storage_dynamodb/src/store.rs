//! DynamoDB implementation of [`RecordStore`].

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;

use sensorboard_app::ports::{RecordStore, ScanOutput};
use sensorboard_domain::error::SensorboardError;

use crate::attribute::item_to_record;
use crate::error::StorageError;

/// Configuration for the DynamoDB storage adapter.
pub struct Config {
    /// Name of the pre-provisioned table.
    pub table_name: String,
    /// AWS region hosting the table (e.g. `eu-central-1`).
    pub region: String,
    /// Endpoint override, e.g. `http://localhost:8000` for DynamoDB Local.
    pub endpoint_url: Option<String>,
    /// Follow `LastEvaluatedKey` until the scan is exhausted.
    pub follow_pages: bool,
}

impl Config {
    /// Build a [`DynamoDbRecordStore`] from this configuration.
    ///
    /// Credentials come from the standard AWS chain (environment, profile,
    /// IMDS). No request is sent to the table here.
    pub async fn build(self) -> DynamoDbRecordStore {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(self.region));
        if let Some(url) = self.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;

        DynamoDbRecordStore::new(Client::new(&sdk_config), self.table_name)
            .with_follow_pages(self.follow_pages)
    }
}

/// DynamoDB-backed record store reading a single table with `Scan`.
#[derive(Debug, Clone)]
pub struct DynamoDbRecordStore {
    client: Client,
    table_name: String,
    follow_pages: bool,
}

impl DynamoDbRecordStore {
    /// Create a store over a pre-built client.
    ///
    /// Only the first page of each scan is read unless
    /// [`with_follow_pages`](Self::with_follow_pages) enables paging.
    #[must_use]
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            follow_pages: false,
        }
    }

    /// Enable or disable following continuation keys.
    #[must_use]
    pub fn with_follow_pages(mut self, follow_pages: bool) -> Self {
        self.follow_pages = follow_pages;
        self
    }

    /// Name of the scanned table.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn scan_table(&self) -> Result<ScanOutput, StorageError> {
        let mut records = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(|err| StorageError::scan(&self.table_name, err))?;

            for item in output.items() {
                records.push(item_to_record(item)?);
            }

            match output.last_evaluated_key() {
                Some(last_key) if !last_key.is_empty() => {
                    if !self.follow_pages {
                        return Ok(ScanOutput {
                            records,
                            truncated: true,
                        });
                    }
                    tracing::debug!(table = %self.table_name, read = records.len(), "following scan page");
                    exclusive_start_key = Some(last_key.clone());
                }
                _ => break,
            }
        }

        Ok(ScanOutput::complete(records))
    }
}

impl RecordStore for DynamoDbRecordStore {
    async fn scan(&self) -> Result<ScanOutput, SensorboardError> {
        Ok(self.scan_table().await?)
    }
}
