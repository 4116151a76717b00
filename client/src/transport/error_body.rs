//! # Error Body Extraction
//!
//! Turns a failed response body into the one-line message shown to the user.
//!
//! Priority: a truthy `detail` field, then a truthy `message` field, then
//! the whole JSON body. Strings are used as-is, everything else is rendered
//! as JSON. A body that is not JSON at all falls back to the status line.

use reqwest::StatusCode;
use serde_json::Value;

/// Message used when the backend sent a JSON body with nothing useful in it.
pub const GENERIC_FAILURE: &str = "API request failed";

pub fn extract_error_message(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => message_from_json(&value),
        Err(_) => status_line(status),
    }
}

/// `HTTP 502: Bad Gateway`
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {}: {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}

fn message_from_json(value: &Value) -> String {
    if !is_truthy(value) {
        return GENERIC_FAILURE.to_string();
    }

    let Value::Object(map) = value else {
        return render(value);
    };

    if let Some(detail) = map.get("detail").filter(|d| is_truthy(d)) {
        return render(detail);
    }
    if let Some(message) = map.get("message").filter(|m| is_truthy(m)) {
        return render(message);
    }
    value.to_string()
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
