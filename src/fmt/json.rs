//! One JSON object per line, for log shippers and `jq`.

use super::Formatter;
use crate::engine::Record;
use serde::Serialize;

/// Flat JSONL entry. Only the fixed record fields are emitted.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// RFC 3339.
    ts: String,
    level: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
    msg: &'a str,
}

/// `{"ts":"2025-01-15T14:30:00+01:00","level":"info","name":"app","msg":"started"}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &Record<'_>) -> Result<Vec<u8>, crate::Error> {
        let entry = JsonEntry {
            ts: record.timestamp.to_rfc3339(),
            level: record.level.as_str(),
            name: record.name,
            msg: record.message,
        };
        let mut bytes = serde_json::to_vec(&entry)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn emits_one_object_per_line() {
        let bytes = JsonFormatter
            .format(&Record::now(Level::Warn, "app.db", "slow \"query\""))
            .unwrap();
        assert_eq!(bytes.last(), Some(&b'\n'));

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["level"], "warn");
        assert_eq!(value["name"], "app.db");
        assert_eq!(value["msg"], "slow \"query\"");
        assert!(value["ts"].as_str().is_some());
    }

    #[test]
    fn root_logger_has_no_name_field() {
        let bytes = JsonFormatter
            .format(&Record::now(Level::Info, "", "m"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.get("name").is_none());
    }
}
