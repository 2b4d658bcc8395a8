//! Client configuration
//!
//! Connection settings for the orchestration service: endpoint, TLS client
//! certificate, session cookie, access token and request timeout.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Orchestration service client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API gateway (e.g., "https://gate.example.com")
    pub endpoint: String,

    /// PEM client certificate
    pub cert_path: Option<PathBuf>,

    /// PEM private key matching `cert_path`
    pub key_path: Option<PathBuf>,

    /// Skip server certificate verification
    pub insecure: bool,

    /// Value of the `SESSION` cookie sent with every request
    pub session: Option<String>,

    /// Access token, sent as Bearer or Basic authorization
    pub access_token: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a new configuration with defaults
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            cert_path: None,
            key_path: None,
            insecure: false,
            session: None,
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the PEM certificate/key pair used for mutual TLS
    pub fn with_client_cert(mut self, cert_path: PathBuf, key_path: PathBuf) -> Self {
        self.cert_path = Some(cert_path);
        self.key_path = Some(key_path);
        self
    }

    /// Sets the session cookie value
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Sets the access token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(invalid("endpoint cannot be empty"));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(invalid("endpoint must start with http:// or https://"));
        }

        match (&self.cert_path, &self.key_path) {
            (Some(_), None) => return Err(invalid("cert_path is set but key_path is not")),
            (None, Some(_)) => return Err(invalid("key_path is set but cert_path is not")),
            _ => {}
        }

        if self.timeout.is_zero() {
            return Err(invalid("timeout must be greater than 0"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> ClientError {
    ClientError::InvalidConfig(message.to_string())
}
