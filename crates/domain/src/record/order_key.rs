//! Ordering key derived from a record's `timestamp` value.

use std::cmp::Ordering;

use serde_json::Value;

use crate::time::rfc3339_to_epoch;

/// `2^127`, the first float past the `i128` range.
const I128_BOUND: f64 = 1.701_411_834_604_692_3e38;

/// Comparable form of a `timestamp` value.
///
/// Integers and floats compare by exact numeric value, so integers beyond
/// `f64` precision keep their order. Text that is neither numeric nor an
/// RFC 3339 datetime compares lexicographically and ranks above every number.
#[derive(Debug, Clone)]
pub enum OrderKey {
    Integer(i128),
    Float(f64),
    Text(String),
}

impl Default for OrderKey {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl OrderKey {
    /// Derive the key from an optional field value.
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(num)) => {
                if let Some(int) = num.as_i64() {
                    Self::Integer(i128::from(int))
                } else if let Some(int) = num.as_u64() {
                    Self::Integer(i128::from(int))
                } else {
                    num.as_f64().map_or_else(Self::default, Self::Float)
                }
            }
            Some(Value::String(text)) => Self::from_text(text),
            _ => Self::default(),
        }
    }

    fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if let Ok(int) = trimmed.parse::<i128>() {
            return Self::Integer(int);
        }
        if let Some(num) = trimmed.parse::<f64>().ok().filter(|num| num.is_finite()) {
            return Self::Float(num);
        }
        if let Some(epoch) = rfc3339_to_epoch(trimmed) {
            return Self::Float(epoch);
        }
        Self::Text(text.to_string())
    }
}

/// Exact comparison of an integer against a float.
fn cmp_integer_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Less;
    }
    let whole = float.trunc();
    if whole >= I128_BOUND {
        return Ordering::Less;
    }
    if whole < -I128_BOUND {
        return Ordering::Greater;
    }
    #[allow(clippy::cast_possible_truncation)]
    let whole_int = whole as i128;
    int.cmp(&whole_int)
        .then_with(|| 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal))
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            (Self::Float(left), Self::Float(right)) => left
                .partial_cmp(right)
                .unwrap_or_else(|| left.total_cmp(right)),
            (Self::Integer(left), Self::Float(right)) => cmp_integer_float(*left, *right),
            (Self::Float(left), Self::Integer(right)) => {
                cmp_integer_float(*right, *left).reverse()
            }
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            (Self::Integer(_) | Self::Float(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Integer(_) | Self::Float(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderKey {}
