//! Record parser: one line of `journalctl -o json` output into a [`ParsedRecord`].
//!
//! Blank lines, lines that are not JSON, and JSON values that are not objects
//! yield `None`. Missing fields are never an error.

use crate::types::ParsedRecord;
use serde_json::{Map, Value};

pub const MESSAGE_FIELD: &str = "MESSAGE";
pub const PRIORITY_FIELD: &str = "PRIORITY";
pub const REALTIME_TIMESTAMP_FIELD: &str = "__REALTIME_TIMESTAMP";

/// Parse one input line.
pub fn parse(line: &str) -> Option<ParsedRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let fields: Map<String, Value> = match serde_json::from_str(line) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::trace!(kind = json_kind(&other), "skipping non-object record");
            return None;
        }
        Err(err) => {
            tracing::trace!(error = %err, "skipping malformed record");
            return None;
        }
    };

    Some(ParsedRecord {
        message: fields.get(MESSAGE_FIELD).map(message_text).unwrap_or_default(),
        raw_severity: fields.get(PRIORITY_FIELD).and_then(scalar_text),
        raw_timestamp: fields.get(REALTIME_TIMESTAMP_FIELD).and_then(scalar_text),
    })
}

/// journald emits messages that are not valid UTF-8 as an array of byte
/// values; those are decoded lossily. Anything else that is not a string
/// counts as an empty message.
fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let bytes: Option<Vec<u8>> = items
                .iter()
                .map(|v| v.as_u64().and_then(|n| u8::try_from(n).ok()))
                .collect();
            bytes
                .map(|b| String::from_utf8_lossy(&b).into_owned())
                .unwrap_or_default()
        }
        _ => String::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
