//! Pipeline template endpoints

use reqwest::Method;
use stencil_core::domain::template::PipelineTemplate;
use stencil_core::dto::task::TaskRef;
use tracing::{debug, info};

use crate::SpinnakerClient;
use crate::error::{ClientError, Result};

impl SpinnakerClient {
    // =============================================================================
    // Pipeline Templates
    // =============================================================================

    /// Check whether a template with this ID is already registered
    pub async fn template_exists(&self, template_id: &str) -> Result<bool> {
        let url = self.url(&["pipelineTemplates", template_id])?;
        let response = self.request(Method::GET, url).send().await?;

        match self.handle_response::<serde_json::Value>(response).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Register a template, updating it if the ID already exists
    ///
    /// # Returns
    /// The task started by the gateway to persist the template
    pub async fn publish_template(&self, template: &PipelineTemplate) -> Result<TaskRef> {
        let url = if self.template_exists(&template.id).await? {
            info!("Template '{}' exists, updating it", template.id);
            self.url(&["pipelineTemplates", &template.id])?
        } else {
            info!("Creating template '{}'", template.id);
            self.url(&["pipelineTemplates"])?
        };

        debug!("Publishing template to {}", url);
        let response = self.request(Method::POST, url).json(template).send().await?;

        let task: TaskRef = self.handle_response(response).await?;
        if task.reference.is_empty() {
            return Err(ClientError::ParseError(
                "Gateway returned an empty task reference".to_string(),
            ));
        }
        Ok(task)
    }
}
