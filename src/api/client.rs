//! Directory data source client.
//!
//! `DirectoryProvider` is the seam between the core and the network: the
//! TUI layer spawns a fetch task against whatever provider it was given,
//! and tests substitute canned in-memory providers. The real implementation
//! is `HttpDirectoryProvider`, which issues a single GET for the full
//! collection — filtering is entirely client-side, so no query parameters
//! are ever sent.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::Company;

/// Errors that can occur while fetching the directory.
/// Variants carry enough info to render a human-readable status message.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint returned a non-success response.
    Api { status: u16, message: String },
    /// The response body did not match the expected company collection shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of company records. One read operation, GET semantics,
/// returning the full collection in a single response.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the complete company collection.
    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError>;
}

/// HTTP provider backed by a JSON endpoint serving `GET {base_url}/companies`.
pub struct HttpDirectoryProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDirectoryProvider {
    /// Creates a new HTTP provider.
    ///
    /// # Arguments
    /// * `base_url` - Optional endpoint base (defaults to the local dev server)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| "http://localhost:5000".to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DirectoryProvider for HttpDirectoryProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        let url = format!("{}/companies", self.base_url);
        info!("Fetching company directory from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Directory response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Directory API error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let companies: Vec<Company> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        info!("Fetched {} company records", companies.len());
        Ok(companies)
    }
}
