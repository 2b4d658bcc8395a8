//! Stage configuration extraction

use crate::domain::pipeline::Record;

/// Keys that describe graph structure rather than stage behaviour
pub const STRUCTURAL_KEYS: [&str; 4] = ["type", "name", "refId", "requisiteStageRefIds"];

/// Copy a raw stage record without its structural keys
///
/// Remaining entries keep their values and their source order.
pub fn extract_config(raw: &Record) -> Record {
    raw.iter()
        .filter(|(key, _)| !STRUCTURAL_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
