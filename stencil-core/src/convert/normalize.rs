//! Positional naming of triggers and notifications
//!
//! Both functions return fresh records; the source document is not touched.

use serde_json::Value;
use tracing::debug;

use crate::domain::pipeline::Record;

/// Name each trigger `unnamed<i>` by position
pub fn normalize_triggers(triggers: &[Record]) -> Vec<Record> {
    triggers
        .iter()
        .enumerate()
        .map(|(i, trigger)| with_name(trigger, format!("unnamed{}", i)))
        .collect()
}

/// Name each notification `<type><i>` by position
pub fn normalize_notifications(notifications: &[Record]) -> Vec<Record> {
    notifications
        .iter()
        .enumerate()
        .map(|(i, notification)| {
            let type_value = render_type(notification.get("type"));
            if type_value.is_empty() {
                debug!("Notification {} has no type, naming it by index only", i);
            }
            with_name(notification, format!("{}{}", type_value, i))
        })
        .collect()
}

fn with_name(record: &Record, name: String) -> Record {
    let mut named = record.clone();
    named.insert("name".to_string(), Value::String(name));
    named
}

fn render_type(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
