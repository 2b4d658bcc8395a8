//! Pipeline configuration domain types
//!
//! The source document exactly as the orchestration service stores it.
//! Triggers, notifications and stages are open-ended records; stages are
//! decoded into [`RawStage`] only when a conversion runs.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Open-ended key/value record, kept in source key order
pub type Record = Map<String, Value>;

/// Concrete pipeline configuration
///
/// Every field is optional on the wire and an explicit `null` reads as the
/// field's default. Unknown top-level keys (`id`, `index`, `updateTs`, ...)
/// are ignored. Stages stay plain values until [`RawStage`] decoding.
///
/// [`RawStage`]: crate::convert::RawStage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub application: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_modified_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parallel: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub limit_concurrent: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub triggers: Vec<Record>,
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: Vec<Record>,
    #[serde(
        rename = "parameterConfig",
        alias = "parameters",
        deserialize_with = "null_as_default"
    )]
    pub parameters: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub expected_artifacts: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub stages: Vec<Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_gate_document() {
        let config: PipelineConfig = serde_json::from_value(json!({
            "id": "2b1c6a0e",
            "application": "myapp",
            "name": "Deploy App",
            "lastModifiedBy": "jane@example.com",
            "limitConcurrent": true,
            "keepWaitingPipelines": false,
            "parameterConfig": [{ "name": "region", "default": "us-west-2" }],
            "stages": [{ "type": "wait", "refId": "1", "name": "Wait", "waitTime": 30 }]
        }))
        .unwrap();

        assert_eq!(config.application, "myapp");
        assert_eq!(config.last_modified_by, "jane@example.com");
        assert!(config.limit_concurrent);
        assert!(!config.parallel);
        assert_eq!(config.description, "");
        assert_eq!(config.parameters.len(), 1);
        assert!(config.triggers.is_empty());
        assert_eq!(config.stages[0]["waitTime"], json!(30));
    }

    #[test]
    fn test_parameters_alias() {
        let config: PipelineConfig =
            serde_json::from_value(json!({ "parameters": [{ "name": "tag" }] })).unwrap();
        assert_eq!(config.parameters, vec![json!({ "name": "tag" })]);
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{
                "application": "app",
                "name": "p",
                "description": null,
                "lastModifiedBy": null,
                "parallel": null,
                "triggers": null,
                "notifications": null,
                "parameterConfig": null,
                "expectedArtifacts": null,
                "stages": null
            }"#,
        )
        .unwrap();

        assert_eq!(config.description, "");
        assert_eq!(config.last_modified_by, "");
        assert!(!config.parallel);
        assert!(config.triggers.is_empty());
        assert!(config.notifications.is_empty());
        assert!(config.parameters.is_empty());
        assert!(config.expected_artifacts.is_empty());
        assert!(config.stages.is_empty());
    }

    #[test]
    fn test_non_object_stage_survives_deserialization() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"stages":["oops"]}"#).unwrap();
        assert_eq!(config.stages, vec![json!("oops")]);
    }

    #[test]
    fn test_record_preserves_key_order() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{"stages":[{"zeta":1,"type":"wait","alpha":2,"refId":"1","name":"W"}]}"#,
        )
        .unwrap();
        let keys: Vec<_> = config.stages[0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "type", "alpha", "refId", "name"]);
    }
}
