//! HTTP client wrapper for the Connect REST API

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::models::RemoteError;
use reqwest::{Client, Method, Response, StatusCode};
use std::time::{Duration, Instant};

/// Client for the control plane REST API
///
/// Holds no per-request state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    /// Create a new API client for the given settings
    pub fn new(config: Config) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("connect-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get a reference to the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL for an API path such as `/connectors`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> CliResult<Response> {
        let url = self.url(path);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let start = Instant::now();
        tracing::debug!(%method, %url, "sending request");
        let response = request.send().await.map_err(|e| {
            tracing::debug!(%method, %url, error = %e, "request failed");
            CliError::from(e)
        })?;
        tracing::debug!(
            %method,
            %url,
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "received response"
        );

        Ok(response)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> CliResult<Response> {
        self.send(Method::GET, path, None).await
    }

    /// Make a POST request, with a JSON body when given
    pub async fn post(&self, path: &str, body: Option<&serde_json::Value>) -> CliResult<Response> {
        self.send(Method::POST, path, body).await
    }

    /// Make a PUT request without a body
    pub async fn put(&self, path: &str) -> CliResult<Response> {
        self.send(Method::PUT, path, None).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> CliResult<Response> {
        self.send(Method::DELETE, path, None).await
    }
}

/// Human-readable reason for a non-success response
///
/// Prefers the `message` field of the control plane's JSON error body and
/// falls back to the HTTP reason phrase.
pub(crate) async fn failure_reason(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    reason_from_body(status, &body)
}

pub(crate) fn reason_from_body(status: StatusCode, body: &str) -> String {
    if let Ok(remote) = serde_json::from_str::<RemoteError>(body) {
        if !remote.message.is_empty() {
            return remote.message;
        }
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

/// Convert an unexpected response into a transport error
pub(crate) async fn transport_error(response: Response) -> CliError {
    let status = response.status().as_u16();
    CliError::Transport {
        status,
        message: failure_reason(response).await,
    }
}
