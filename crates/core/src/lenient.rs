//! Lenient field decoders for upstream JSON.
//!
//! Upstream feeds are loosely typed. Each decoder maps any JSON value to a
//! defined Rust value instead of failing the whole record:
//!
//! | input            | number      | optional number | string          |
//! |------------------|-------------|-----------------|-----------------|
//! | absent / `null`  | `0.0`       | `None`          | `""`            |
//! | number           | value       | `Some(value)`   | decimal text    |
//! | numeric string   | parsed      | `Some(parsed)`  | as-is           |
//! | anything else    | `NaN`       | `Some(NaN)`     | JSON text       |
//!
//! `NaN` is the "not a number" marker carried into computed fields; it
//! serializes back out as JSON `null`.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so absent fields take
//! the same path as `null`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, coerce_number))
}

pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(coerce_number(&v)),
    })
}

/// Non-negative whole count. Fractional, negative or out-of-range values are
/// treated as absent rather than rounded, so the caller's fallback applies.
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let n = optional_number(deserializer)?;
    Ok(n.filter(|n| is_whole_count(*n)).map(|n| n as u64))
}

fn is_whole_count(n: f64) -> bool {
    // `u64::MAX as f64` is 2^64, the first value that no longer fits.
    n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n < u64::MAX as f64
}

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// A `null` collection decodes like an absent one.
pub fn sequence<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
