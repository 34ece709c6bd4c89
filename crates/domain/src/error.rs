//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SensorboardError`] via `From`.

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum SensorboardError {
    /// The item store could not be reached or refused the request.
    #[error("item store error: {0}")]
    Store(Box<dyn std::error::Error + Send + Sync>),

    /// The item store answered with something that is not a record.
    #[error("malformed item: {0}")]
    Decode(#[from] DecodeError),
}

/// A stored item could not be mapped into a [`Record`](crate::record::Record).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The attribute holds a type with no JSON representation (e.g. binary).
    #[error("attribute `{attribute}` has unsupported type {kind}")]
    UnsupportedType {
        /// Name of the offending attribute.
        attribute: String,
        /// Store-side type tag, e.g. `B`.
        kind: &'static str,
    },

    /// A numeric attribute could not be represented as a JSON number.
    #[error("attribute `{attribute}` holds invalid number `{value}`")]
    InvalidNumber {
        /// Name of the offending attribute.
        attribute: String,
        /// Raw value as sent by the store.
        value: String,
    },

    /// The payload is not a JSON object.
    #[error("expected an object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },
}
