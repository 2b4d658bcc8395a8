//! Template rendering
//!
//! Serializes a template to YAML behind the generated-file banner.

use anyhow::{Context, Result};
use std::path::Path;
use stencil_core::domain::template::PipelineTemplate;

/// Banner written above every generated template
pub const GENERATED_TEMPLATE_HEADER: &str = "\
# GENERATED BY stencil
#
# The output generated by this tool should be used as a base for further
# modifications. It does not make assumptions as to what things can be made into
# variables, modules, partials or Jinja templates. This is your responsibility as
# the owner of the template.
#
# Some recommendations to massage the initial output:
#
# * Rename the pipeline stage IDs, notification names and trigger names to be
#   more meaningful. Enumerated stage IDs is ultimately a detriment for
#   long-term maintainability.
# * The template is currently ordered, so keys may not necessarily be structured
#   in the most sensible format. You may want to massage the template a little.
";

/// Render a template as a YAML document with the banner on top
pub fn render_template(template: &PipelineTemplate) -> Result<String> {
    let yaml = serde_yaml::to_string(template).context("Failed to serialize template to YAML")?;
    Ok(format!("{}{}", GENERATED_TEMPLATE_HEADER, yaml))
}

/// Write rendered output to a file, or stdout when no path is given
pub fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write template to {}", path.display())),
        None => {
            print!("{}", rendered);
            Ok(())
        }
    }
}
