//! Configuration module
//!
//! Collects the global CLI settings and turns them into a client
//! configuration when a command needs the network.

use anyhow::{Result, bail};
use std::path::PathBuf;
use std::time::Duration;
use stencil_client::ClientConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the Spinnaker API gateway
    pub api: Option<String>,
    pub cert_path: Option<PathBuf>,
    pub key_path: Option<PathBuf>,
    pub api_session: Option<String>,
    pub access_token: Option<String>,
    pub insecure: bool,
    /// Request timeout in seconds
    pub client_timeout: u64,
}

impl Config {
    /// Build the client configuration for network commands
    pub fn client_config(&self) -> Result<ClientConfig> {
        let Some(api) = &self.api else {
            bail!("SPINNAKER_API must be set (or pass --api)");
        };

        let client = ClientConfig {
            endpoint: api.clone(),
            cert_path: self.cert_path.clone(),
            key_path: self.key_path.clone(),
            insecure: self.insecure,
            session: self.api_session.clone(),
            access_token: self.access_token.clone(),
            timeout: Duration::from_secs(self.client_timeout),
        };
        client.validate()?;

        Ok(client)
    }
}
