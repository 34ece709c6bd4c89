//! Record — one schema-less item reported by a sensor.
//!
//! Records are owned by the item store; this system only observes them.
//! The `timestamp` field is the one field with meaning here: it drives the
//! newest-first ordering of every result sequence.

mod order_key;

pub use order_key::OrderKey;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Name of the field used for ordering.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// An open-ended mapping from field name to value.
///
/// Serializes as a plain JSON object with keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap an existing field map.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a single field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Borrow every field.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Ordering key derived from the `timestamp` field.
    ///
    /// A missing field yields the default key; the record is left untouched.
    #[must_use]
    pub fn order_key(&self) -> OrderKey {
        OrderKey::from_value(self.get(TIMESTAMP_FIELD))
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Value> for Record {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Null => Err(DecodeError::NotAnObject { found: "null" }),
            Value::Bool(_) => Err(DecodeError::NotAnObject { found: "bool" }),
            Value::Number(_) => Err(DecodeError::NotAnObject { found: "number" }),
            Value::String(_) => Err(DecodeError::NotAnObject { found: "string" }),
            Value::Array(_) => Err(DecodeError::NotAnObject { found: "array" }),
        }
    }
}

/// Sort records by descending ordering key.
///
/// The sort is stable, so records sharing a key keep their relative order.
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by_cached_key(|record| std::cmp::Reverse(record.order_key()));
}
