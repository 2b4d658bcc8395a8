//! Pipeline template domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::pipeline::Record;

/// Schema version written into every template
pub const TEMPLATE_SCHEMA: &str = "1";

/// Declarative, reusable pipeline template
///
/// Field order here is the key order of the serialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTemplate {
    pub schema: String,
    pub id: String,
    pub metadata: TemplateMetadata,
    pub protect: bool,
    pub configuration: TemplateConfiguration,
    /// Left empty for manual editing
    pub variables: Vec<Value>,
    pub stages: Vec<TemplateStage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfiguration {
    pub concurrent_executions: ConcurrentExecutions,
    pub triggers: Vec<Record>,
    pub parameters: Vec<Value>,
    pub notifications: Vec<Record>,
    pub expected_artifacts: Vec<Value>,
}

/// Concurrency flags, always exactly these two keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcurrentExecutions {
    pub parallel: bool,
    pub limit_concurrent: bool,
}

/// One stage node of the template graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStage {
    pub id: String,
    #[serde(rename = "type")]
    pub stage_type: String,
    pub depends_on: Vec<String>,
    pub name: String,
    pub config: Record,
}
