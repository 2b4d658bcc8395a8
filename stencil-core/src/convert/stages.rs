//! Stage graph reconstruction
//!
//! Raw stage records are decoded into [`RawStage`] values first, so a
//! malformed stage anywhere in the pipeline fails the whole conversion
//! before a single template stage exists.

use serde_json::Value;
use tracing::debug;

use super::config::extract_config;
use super::id::stage_id;
use crate::domain::pipeline::Record;
use crate::domain::template::TemplateStage;
use crate::error::{ConvertError, FieldProblem, Result};

/// A stage record with its structural fields validated
#[derive(Debug, Clone, PartialEq)]
pub struct RawStage {
    pub stage_type: String,
    pub ref_id: String,
    pub name: String,
    pub requisite_stage_ref_ids: Vec<String>,
    /// Everything that is not a structural key
    pub config: Record,
}

impl RawStage {
    /// Decode the stage found at `index` in the source pipeline
    pub fn decode(index: usize, value: &Value) -> Result<Self> {
        let record = value.as_object().ok_or_else(|| {
            ConvertError::malformed_stage(index, "stage", FieldProblem::WrongType)
        })?;

        Ok(Self {
            stage_type: required_string(index, record, "type")?,
            ref_id: required_string(index, record, "refId")?,
            name: required_string(index, record, "name")?,
            requisite_stage_ref_ids: requisite_ref_ids(index, record)?,
            config: extract_config(record),
        })
    }

    /// Synthesized template ID of this stage
    pub fn id(&self) -> String {
        stage_id(&self.stage_type, &self.ref_id)
    }
}

fn required_string(index: usize, record: &Record, field: &'static str) -> Result<String> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        None => Err(ConvertError::malformed_stage(
            index,
            field,
            FieldProblem::Missing,
        )),
        Some(_) => Err(ConvertError::malformed_stage(
            index,
            field,
            FieldProblem::WrongType,
        )),
    }
}

fn requisite_ref_ids(index: usize, record: &Record) -> Result<Vec<String>> {
    const FIELD: &str = "requisiteStageRefIds";
    let wrong_type = || ConvertError::malformed_stage(index, FIELD, FieldProblem::WrongType);

    match record.get(FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(wrong_type))
            .collect(),
        Some(_) => Err(wrong_type()),
    }
}

/// Decode every raw stage, failing on the first malformed one
pub fn decode_stages(records: &[Value]) -> Result<Vec<RawStage>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| RawStage::decode(index, record))
        .collect()
}

/// Resolve requisite refIds into template stage IDs
///
/// Every stage carrying a matching refId contributes an edge; references
/// with no match are dropped. Repeated IDs keep their first position.
pub fn resolve_depends_on(stages: &[RawStage], stage: &RawStage) -> Vec<String> {
    let mut depends_on: Vec<String> = Vec::new();

    for reference in &stage.requisite_stage_ref_ids {
        let mut matched = false;
        for target in stages.iter().filter(|s| &s.ref_id == reference) {
            matched = true;
            let id = target.id();
            if !depends_on.contains(&id) {
                depends_on.push(id);
            }
        }
        if !matched {
            debug!(
                "Stage '{}' requires unknown refId '{}', dropping the edge",
                stage.name, reference
            );
        }
    }

    depends_on
}

/// Convert raw stage records into template stages, preserving input order
pub fn build_stages(records: &[Value]) -> Result<Vec<TemplateStage>> {
    let stages = decode_stages(records)?;

    Ok(stages
        .iter()
        .map(|stage| TemplateStage {
            id: stage.id(),
            stage_type: stage.stage_type.clone(),
            depends_on: resolve_depends_on(&stages, stage),
            name: stage.name.clone(),
            config: stage.config.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_single_stage_without_requisites() {
        let stages = build_stages(&records(json!([
            { "type": "deploy", "refId": "1", "name": "Deploy", "requisiteStageRefIds": [] }
        ])))
        .unwrap();

        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].id, "deploy1");
        assert_eq!(stages[0].stage_type, "deploy");
        assert_eq!(stages[0].name, "Deploy");
        assert!(stages[0].depends_on.is_empty());
        assert!(stages[0].config.is_empty());
    }

    #[test]
    fn test_dependency_resolved_through_ref_id() {
        let stages = build_stages(&records(json!([
            { "type": "bake", "refId": "1", "name": "Bake" },
            { "type": "deploy", "refId": "2", "name": "Deploy", "requisiteStageRefIds": ["1"] }
        ])))
        .unwrap();

        assert!(stages[0].depends_on.is_empty());
        assert_eq!(stages[1].depends_on, vec!["bake1"]);
    }

    #[test]
    fn test_dependency_order_follows_requisites() {
        let stages = build_stages(&records(json!([
            { "type": "bake", "refId": "1", "name": "Bake" },
            { "type": "findImage", "refId": "2", "name": "Find" },
            { "type": "deploy", "refId": "3", "name": "Deploy", "requisiteStageRefIds": ["2", "1"] }
        ])))
        .unwrap();

        assert_eq!(stages[2].depends_on, vec!["findImage2", "bake1"]);
    }

    #[test]
    fn test_dangling_reference_is_dropped() {
        let stages = build_stages(&records(json!([
            { "type": "bake", "refId": "1", "name": "Bake" },
            { "type": "deploy", "refId": "2", "name": "Deploy", "requisiteStageRefIds": ["9", "1"] }
        ])))
        .unwrap();

        assert_eq!(stages[1].depends_on, vec!["bake1"]);
    }

    #[test]
    fn test_duplicate_requisites_collapse() {
        let stages = build_stages(&records(json!([
            { "type": "bake", "refId": "1", "name": "Bake" },
            { "type": "deploy", "refId": "2", "name": "Deploy", "requisiteStageRefIds": ["1", "1"] }
        ])))
        .unwrap();

        assert_eq!(stages[1].depends_on, vec!["bake1"]);
    }

    #[test]
    fn test_shared_ref_id_contributes_every_match() {
        let stages = build_stages(&records(json!([
            { "type": "bake", "refId": "1", "name": "Bake" },
            { "type": "wait", "refId": "1", "name": "Wait" },
            { "type": "deploy", "refId": "2", "name": "Deploy", "requisiteStageRefIds": ["1"] }
        ])))
        .unwrap();

        assert_eq!(stages[2].depends_on, vec!["bake1", "wait1"]);
    }

    #[test]
    fn test_matches_with_same_id_collapse() {
        let stages = build_stages(&records(json!([
            { "type": "bake", "refId": "1", "name": "Bake east" },
            { "type": "bake", "refId": "1", "name": "Bake west" },
            { "type": "wait", "refId": "3", "name": "Wait" },
            { "type": "deploy", "refId": "2", "name": "Deploy", "requisiteStageRefIds": ["3", "1"] }
        ])))
        .unwrap();

        assert_eq!(stages[3].depends_on, vec!["wait3", "bake1"]);
    }

    #[test]
    fn test_null_requisites_treated_as_empty() {
        let stages = build_stages(&records(json!([
            { "type": "wait", "refId": "1", "name": "Wait", "requisiteStageRefIds": null }
        ])))
        .unwrap();
        assert!(stages[0].depends_on.is_empty());
    }

    #[test]
    fn test_stage_order_is_input_order() {
        let stages = build_stages(&records(json!([
            { "type": "deploy", "refId": "2", "name": "Deploy", "requisiteStageRefIds": ["1"] },
            { "type": "bake", "refId": "1", "name": "Bake" }
        ])))
        .unwrap();

        let ids: Vec<_> = stages.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["deploy2", "bake1"]);
        assert_eq!(stages[0].depends_on, vec!["bake1"]);
    }

    #[test]
    fn test_config_carries_stage_specific_fields() {
        let stages = build_stages(&records(json!([
            {
                "type": "manualJudgment",
                "refId": "1",
                "name": "Approve",
                "judgmentInputs": [],
                "notifications": [{ "type": "slack" }]
            }
        ])))
        .unwrap();

        assert_eq!(
            serde_json::Value::Object(stages[0].config.clone()),
            json!({ "judgmentInputs": [], "notifications": [{ "type": "slack" }] })
        );
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let err = build_stages(&records(json!([
            { "type": "bake", "refId": "1", "name": "Bake" },
            { "type": "deploy", "refId": "2" }
        ])))
        .unwrap_err();

        assert_eq!(
            err,
            ConvertError::malformed_stage(1, "name", FieldProblem::Missing)
        );
    }

    #[test]
    fn test_non_string_ref_id_is_malformed() {
        let err = build_stages(&records(json!([
            { "type": "bake", "refId": 1, "name": "Bake" }
        ])))
        .unwrap_err();

        assert_eq!(
            err,
            ConvertError::malformed_stage(0, "refId", FieldProblem::WrongType)
        );
    }

    #[test]
    fn test_non_string_type_is_malformed() {
        let err = build_stages(&records(json!([
            { "type": 3, "refId": "1", "name": "Bake" }
        ])))
        .unwrap_err();

        assert_eq!(
            err,
            ConvertError::malformed_stage(0, "type", FieldProblem::WrongType)
        );
    }

    #[test]
    fn test_null_name_is_malformed() {
        let err = build_stages(&records(json!([
            { "type": "bake", "refId": "1", "name": null }
        ])))
        .unwrap_err();

        assert_eq!(
            err,
            ConvertError::malformed_stage(0, "name", FieldProblem::WrongType)
        );
    }

    #[test]
    fn test_non_object_stage_is_malformed() {
        let err = build_stages(&records(json!([
            { "type": "bake", "refId": "1", "name": "Bake" },
            "oops"
        ])))
        .unwrap_err();

        assert_eq!(
            err,
            ConvertError::malformed_stage(1, "stage", FieldProblem::WrongType)
        );
    }

    #[test]
    fn test_missing_type_is_malformed() {
        let err = build_stages(&records(json!([{ "refId": "1", "name": "Bake" }]))).unwrap_err();
        assert!(err.is_malformed_stage());
    }

    #[test]
    fn test_bad_requisites_are_malformed() {
        let err = build_stages(&records(json!([
            { "type": "deploy", "refId": "2", "name": "Deploy", "requisiteStageRefIds": [1] }
        ])))
        .unwrap_err();
        assert_eq!(
            err,
            ConvertError::malformed_stage(0, "requisiteStageRefIds", FieldProblem::WrongType)
        );

        let err = build_stages(&records(json!([
            { "type": "deploy", "refId": "2", "name": "Deploy", "requisiteStageRefIds": "1" }
        ])))
        .unwrap_err();
        assert!(err.is_malformed_stage());
    }

    #[test]
    fn test_dependency_fidelity_on_diamond() {
        let stages = build_stages(&records(json!([
            { "type": "jenkins", "refId": "a", "name": "Build" },
            { "type": "deploy", "refId": "b", "name": "Staging", "requisiteStageRefIds": ["a"] },
            { "type": "deploy", "refId": "c", "name": "Canary", "requisiteStageRefIds": ["a"] },
            { "type": "manualJudgment", "refId": "d", "name": "Gate", "requisiteStageRefIds": ["b", "c"] }
        ])))
        .unwrap();

        assert_eq!(stages[1].depends_on, vec!["jenkinsa"]);
        assert_eq!(stages[2].depends_on, vec!["jenkinsa"]);
        assert_eq!(stages[3].depends_on, vec!["deployb", "deployc"]);
    }
}
