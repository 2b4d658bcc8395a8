//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod convert;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a deployed pipeline into a pipeline template
    Convert {
        /// Application owning the pipeline
        application: String,

        /// Pipeline name
        pipeline: String,

        /// Write the template to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also register the template with Spinnaker
        #[arg(long)]
        publish: bool,
    },
    /// Convert a pipeline configuration JSON file into a pipeline template
    ConvertFile {
        /// Path to the pipeline configuration JSON
        path: PathBuf,

        /// Write the template to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Convert {
            application,
            pipeline,
            output,
            publish,
        } => convert::convert_remote(config, &application, &pipeline, output, publish).await,
        Commands::ConvertFile { path, output } => convert::convert_file(&path, output.as_deref()),
    }
}
