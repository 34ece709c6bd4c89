//! # sensorboard-adapter-storage-dynamodb
//!
//! Item store adapter for Amazon DynamoDB using the
//! [AWS SDK](https://docs.rs/aws-sdk-dynamodb).
//!
//! ## Responsibilities
//! - Implement the `RecordStore` port defined in `sensorboard-app::ports`
//! - Build the DynamoDB client once from region, endpoint, and the standard
//!   AWS credential chain
//! - Map DynamoDB attribute values into JSON records
//!
//! ## Dependency rule
//! Depends on `sensorboard-app` (for port traits) and `sensorboard-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod attribute;
pub mod error;
pub mod store;

pub use error::StorageError;
pub use store::{Config, DynamoDbRecordStore};
