//! Lenient numeric decoding.
//!
//! Money fields come back from the backend as JSON numbers, numeric strings
//! (decimal columns), or `null`. They all decode to `f64`, with `null` and
//! missing values mapping to `0.0`.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom("number out of range")),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid amount: {s}"))),
        other => Err(de::Error::custom(format!("invalid amount: {other}"))),
    }
}

pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid number: {s}"))),
        other => Err(de::Error::custom(format!("invalid number: {other}"))),
    }
}
