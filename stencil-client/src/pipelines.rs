//! Pipeline configuration endpoints

use reqwest::Method;
use stencil_core::domain::pipeline::PipelineConfig;
use tracing::debug;

use crate::SpinnakerClient;
use crate::error::Result;

impl SpinnakerClient {
    // =============================================================================
    // Pipeline Configurations
    // =============================================================================

    /// Fetch the stored configuration of a pipeline
    ///
    /// # Arguments
    /// * `application` - The owning application
    /// * `pipeline` - The pipeline name
    ///
    /// # Returns
    /// The pipeline configuration document
    pub async fn get_pipeline_config(
        &self,
        application: &str,
        pipeline: &str,
    ) -> Result<PipelineConfig> {
        let url = self.url(&["applications", application, "pipelineConfigs", pipeline])?;
        debug!("Fetching pipeline config from {}", url);
        let response = self.request(Method::GET, url).send().await?;

        self.handle_response(response).await
    }
}
