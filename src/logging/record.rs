//! Structured records as a backend receives them.

use std::collections::BTreeMap;

use log::kv::{self, Key, Value, VisitSource};
use log::Record;
use serde::Serialize;

use super::severity::Severity;
use super::structured::{EVENT_ID_KEY, EVENT_NAME_KEY, ORIGINAL_FORMAT_KEY};

/// A single structured log record, rebuilt from a `log::Record`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub event_id: i32,
    pub event_name: String,
    pub level: Severity,
    pub target: String,
    pub message_template: String,
    pub message: String,
    pub params: BTreeMap<String, serde_json::Value>,
}

impl LogEvent {
    pub fn from_record(record: &Record<'_>) -> Self {
        let mut event = LogEvent {
            event_id: 0,
            event_name: String::new(),
            level: Severity::from(record.level()),
            target: record.target().to_string(),
            message_template: String::new(),
            message: record.args().to_string(),
            params: BTreeMap::new(),
        };
        // Visiting our own collector never fails.
        let _ = record.key_values().visit(&mut event);
        event
    }

    pub fn param_i64(&self, name: &str) -> Option<i64> {
        self.params.get(name).and_then(|v| v.as_i64())
    }
}

impl<'kvs> VisitSource<'kvs> for LogEvent {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        match key.as_str() {
            EVENT_ID_KEY => {
                self.event_id = value
                    .to_i64()
                    .and_then(|id| i32::try_from(id).ok())
                    .unwrap_or_default();
            }
            EVENT_NAME_KEY => self.event_name = value.to_string(),
            ORIGINAL_FORMAT_KEY => self.message_template = value.to_string(),
            name => {
                self.params.insert(name.to_string(), to_json(&value));
            }
        }
        Ok(())
    }
}

fn to_json(value: &Value<'_>) -> serde_json::Value {
    if let Some(n) = value.to_i64() {
        serde_json::Value::from(n)
    } else if let Some(n) = value.to_u64() {
        serde_json::Value::from(n)
    } else if let Some(b) = value.to_bool() {
        serde_json::Value::Bool(b)
    } else if let Some(f) = value.to_f64() {
        serde_json::Value::from(f)
    } else {
        serde_json::Value::String(value.to_string())
    }
}
