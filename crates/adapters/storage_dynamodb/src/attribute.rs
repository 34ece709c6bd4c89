//! Mapping from DynamoDB attribute values to JSON.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use sensorboard_domain::error::DecodeError;
use sensorboard_domain::record::Record;

/// Convert one scanned item into a [`Record`].
///
/// # Errors
///
/// Returns [`DecodeError`] if any attribute has no JSON representation.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<Record, DecodeError> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), to_json(name, value)?)))
        .collect::<Result<Map<String, Value>, DecodeError>>()
        .map(Record::new)
}

/// `path` locates `value` inside the item (`payload.readings[2]`) and is
/// what decode errors report.
fn to_json(path: &str, value: &AttributeValue) -> Result<Value, DecodeError> {
    match value {
        AttributeValue::S(text) => Ok(Value::String(text.clone())),
        AttributeValue::N(raw) => number(path, raw),
        AttributeValue::Bool(flag) => Ok(Value::Bool(*flag)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| to_json(&format!("{path}[{index}]"), item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(fields) => fields
            .iter()
            .map(|(key, item)| Ok((key.clone(), to_json(&format!("{path}.{key}"), item)?)))
            .collect::<Result<Map<String, Value>, DecodeError>>()
            .map(Value::Object),
        AttributeValue::Ss(items) => Ok(Value::Array(
            items.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(items) => items
            .iter()
            .map(|raw| number(path, raw))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) => Err(unsupported(path, "B")),
        AttributeValue::Bs(_) => Err(unsupported(path, "BS")),
        _ => Err(unsupported(path, "unknown")),
    }
}

/// Integers stay integers; everything else goes through `f64`.
fn number(path: &str, raw: &str) -> Result<Value, DecodeError> {
    if let Ok(int) = raw.parse::<i64>() {
        return Ok(Value::from(int));
    }
    if let Ok(int) = raw.parse::<u64>() {
        return Ok(Value::from(int));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| DecodeError::InvalidNumber {
            attribute: path.to_string(),
            value: raw.to_string(),
        })
}

fn unsupported(path: &str, kind: &'static str) -> DecodeError {
    DecodeError::UnsupportedType {
        attribute: path.to_string(),
        kind,
    }
}
