//! Stencil HTTP Client
//!
//! A typed HTTP client for the Spinnaker API gateway, covering the two
//! endpoints the converter needs: reading a pipeline configuration and
//! publishing a pipeline template.
//!
//! # Example
//!
//! ```no_run
//! use stencil_client::{ClientConfig, SpinnakerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://gate.example.com")
//!         .with_access_token("eyJhbGciOiJSUzI1NiJ9...");
//!     let client = SpinnakerClient::from_config(&config).await?;
//!
//!     let pipeline = client.get_pipeline_config("myapp", "Deploy App").await?;
//!     println!("Fetched pipeline with {} stage(s)", pipeline.stages.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
mod pipelines;
mod templates;

// Re-export commonly used types
pub use auth::AccessToken;
pub use config::ClientConfig;
pub use error::{ClientError, Result};

use std::path::Path;
use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::tls::Version;
use reqwest::{Client, Identity, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for the Spinnaker API gateway
///
/// The access token is fixed at construction and attached to every request.
#[derive(Debug, Clone)]
pub struct SpinnakerClient {
    /// Base URL of the gateway (e.g., "https://gate.example.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Authorization sent with each request
    access_token: Option<AccessToken>,
}

impl SpinnakerClient {
    /// Create a client from a validated configuration
    ///
    /// Loads the PEM certificate/key pair when one is configured, installs
    /// the session cookie and classifies the access token.
    pub async fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = config.endpoint.trim_end_matches('/').to_string();
        let mut builder = Client::builder().use_rustls_tls().timeout(config.timeout);

        if let Some(session) = &config.session {
            let url = parse_url(&base_url)?;
            let jar = Jar::default();
            jar.add_cookie_str(&format!("SESSION={}", session), &url);
            builder = builder.cookie_provider(Arc::new(jar));
        }

        if let (Some(cert_path), Some(key_path)) = (&config.cert_path, &config.key_path) {
            debug!("Configuring TLS with pem cert/key pair");
            let identity = load_identity(cert_path, key_path).await?;
            builder = builder
                .identity(identity)
                .min_tls_version(Version::TLS_1_2);
        }

        if config.insecure {
            debug!("Server certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build()?;
        let access_token = config.access_token.as_deref().and_then(AccessToken::parse);

        Ok(Self {
            base_url,
            client,
            access_token,
        })
    }

    /// Create a client around a custom HTTP client
    ///
    /// # Example
    /// ```
    /// use stencil_client::SpinnakerClient;
    /// use reqwest::Client;
    ///
    /// let client = SpinnakerClient::with_client("http://localhost:8084", Client::new(), None);
    /// assert_eq!(client.base_url(), "http://localhost:8084");
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        client: Client,
        access_token: Option<&str>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            access_token: access_token.and_then(AccessToken::parse),
        }
    }

    /// Get the base URL of the gateway
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the authorization scheme in use, if any
    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    /// Build an endpoint URL from path segments, percent-encoding each one
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = parse_url(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start a request with the authorization header attached
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.access_token {
            Some(token) => builder.header(reqwest::header::AUTHORIZATION, token.header_value()),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-2xx responses become [`ClientError::ApiError`] carrying the body.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

fn parse_url(base_url: &str) -> Result<Url> {
    Url::parse(base_url)
        .map_err(|e| ClientError::InvalidRequest(format!("Invalid URL {}: {}", base_url, e)))
}

async fn load_identity(cert_path: &Path, key_path: &Path) -> Result<Identity> {
    let mut pem = read_pem(cert_path).await?;
    pem.push(b'\n');
    pem.extend(read_pem(key_path).await?);

    Identity::from_pem(&pem).map_err(ClientError::InvalidIdentity)
}

async fn read_pem(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|source| ClientError::CertificateRead {
            path: path.to_path_buf(),
            source,
        })
}
