//! Stencil CLI
//!
//! Converts a deployed Spinnaker pipeline into a pipeline template.

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Spinnaker pipeline template converter", long_about = None)]
struct Cli {
    /// Spinnaker API gateway URL
    #[arg(long, env = "SPINNAKER_API", global = true)]
    api: Option<String>,

    /// PEM client certificate
    #[arg(long, env = "SPINNAKER_CLIENT_CERT", global = true)]
    cert_path: Option<PathBuf>,

    /// PEM private key for the client certificate
    #[arg(long, env = "SPINNAKER_CLIENT_KEY", global = true)]
    key_path: Option<PathBuf>,

    /// Session cookie value
    #[arg(long, env = "SPINNAKER_API_SESSION", global = true)]
    api_session: Option<String>,

    /// Access token (JWT or basic credential)
    #[arg(long, env = "SPINNAKER_ACCESS_TOKEN", global = true, hide_env_values = true)]
    access_token: Option<String>,

    /// Skip server certificate verification
    #[arg(long, global = true)]
    insecure: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "10", global = true)]
    client_timeout: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config {
        api: cli.api,
        cert_path: cli.cert_path,
        key_path: cli.key_path,
        api_session: cli.api_session,
        access_token: cli.access_token,
        insecure: cli.insecure,
        client_timeout: cli.client_timeout,
    };

    handle_command(cli.command, &config).await
}

/// Logs go to stderr so stdout only carries the rendered template
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let default_filter = format!(
        "stencil_cli={0},stencil_client={0},stencil_core={0}",
        default_level
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
