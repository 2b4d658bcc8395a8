//! Convert command handlers
//!
//! Fetches or reads a pipeline configuration, converts it and writes the
//! rendered template.

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use stencil_client::SpinnakerClient;
use stencil_core::convert_pipeline;
use stencil_core::domain::pipeline::PipelineConfig;
use stencil_core::domain::template::PipelineTemplate;
use tracing::info;

use crate::config::Config;
use crate::render::{render_template, write_output};

/// Convert a pipeline stored in Spinnaker
pub async fn convert_remote(
    config: &Config,
    application: &str,
    pipeline: &str,
    output: Option<PathBuf>,
    publish: bool,
) -> Result<()> {
    let client_config = config.client_config()?;
    let client = SpinnakerClient::from_config(&client_config).await?;

    info!("Fetching pipeline '{}' of application '{}'", pipeline, application);
    let pipeline_config = client
        .get_pipeline_config(application, pipeline)
        .await
        .with_context(|| {
            format!(
                "Failed to fetch pipeline '{}' of application '{}'",
                pipeline, application
            )
        })?;

    let template = convert_and_write(&pipeline_config, output.as_deref())?;

    if publish {
        let task = client.publish_template(&template).await?;
        eprintln!("{}", "✓ Template published successfully!".green().bold());
        eprintln!("  ID:   {}", template.id.cyan());
        eprintln!("  Task: {}", task.reference.dimmed());
    }

    Ok(())
}

/// Convert a pipeline configuration read from a JSON file
pub fn convert_file(path: &Path, output: Option<&Path>) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pipeline file: {}", path.display()))?;

    let pipeline_config: PipelineConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse pipeline JSON: {}", path.display()))?;

    convert_and_write(&pipeline_config, output)?;
    Ok(())
}

fn convert_and_write(
    pipeline_config: &PipelineConfig,
    output: Option<&Path>,
) -> Result<PipelineTemplate> {
    let template = convert_pipeline(pipeline_config)?;
    let rendered = render_template(&template)?;
    write_output(&rendered, output)?;

    if let Some(path) = output {
        eprintln!("{}", "✓ Template written successfully!".green().bold());
        eprintln!("  ID:     {}", template.id.cyan());
        eprintln!("  Stages: {}", template.stages.len().to_string().dimmed());
        eprintln!("  File:   {}", path.display().to_string().dimmed());
    }

    Ok(template)
}
