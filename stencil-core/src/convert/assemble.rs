//! Template assembly

use tracing::info;

use super::id::template_id;
use super::normalize::{normalize_notifications, normalize_triggers};
use super::stages::build_stages;
use crate::domain::pipeline::PipelineConfig;
use crate::domain::template::{
    ConcurrentExecutions, PipelineTemplate, TEMPLATE_SCHEMA, TemplateConfiguration,
    TemplateMetadata,
};
use crate::error::Result;

/// Description used when the pipeline has none
pub const FALLBACK_DESCRIPTION: &str = "This template does not have a description";

/// Convert a pipeline configuration into a pipeline template
///
/// Stages are validated before anything else is built, so a malformed
/// stage returns an error and no template at all.
///
/// # Example
/// ```
/// use stencil_core::convert_pipeline;
/// use stencil_core::domain::pipeline::PipelineConfig;
///
/// let config: PipelineConfig = serde_json::from_value(serde_json::json!({
///     "application": "myapp",
///     "name": "Deploy App!",
///     "stages": [{ "type": "deploy", "refId": "1", "name": "Deploy" }]
/// }))?;
///
/// let template = convert_pipeline(&config)?;
/// assert_eq!(template.id, "myapp-DeployApp");
/// assert_eq!(template.stages[0].id, "deploy1");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert_pipeline(config: &PipelineConfig) -> Result<PipelineTemplate> {
    let stages = build_stages(&config.stages)?;

    let description = if config.description.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        config.description.clone()
    };

    let template = PipelineTemplate {
        schema: TEMPLATE_SCHEMA.to_string(),
        id: template_id(&config.application, &config.name),
        metadata: TemplateMetadata {
            name: config.name.clone(),
            description,
            owner: config.last_modified_by.clone(),
            scopes: vec![config.application.clone()],
        },
        protect: false,
        configuration: TemplateConfiguration {
            concurrent_executions: ConcurrentExecutions {
                parallel: config.parallel,
                limit_concurrent: config.limit_concurrent,
            },
            triggers: normalize_triggers(&config.triggers),
            parameters: config.parameters.clone(),
            notifications: normalize_notifications(&config.notifications),
            expected_artifacts: config.expected_artifacts.clone(),
        },
        variables: Vec::new(),
        stages,
    };

    info!(
        "Converted pipeline '{}' into template '{}' with {} stage(s)",
        config.name,
        template.id,
        template.stages.len()
    );

    Ok(template)
}
