//! Transport seam between the client and the network.
//!
//! The [`Transport`] trait is the only place I/O happens. Production code
//! uses [`HttpTransport`] over reqwest; tests substitute a recording mock
//! so every property of the dispatcher can be checked without a network.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::request::{ApiRequest, Method};

/// Raw response from the remote API: status plus the unmodified body text.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body, byte-for-byte as received.
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One-shot request execution.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request against the fully composed `url` and return the
    /// raw response. Implementations must not retry.
    async fn execute(&self, request: &ApiRequest, url: &str) -> Result<ApiResponse>;
}

/// HTTPS transport over reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pancake/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest, url: &str) -> Result<ApiResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        };

        let mut builder = self.client.request(method, url);
        if let Some(body) = &request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        debug!(method = %request.method, path = %request.path, "sending request");

        let response = builder.send().await.map_err(|e| ClientError::Transport {
            method: request.method,
            path: request.path.clone(),
            reason: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ClientError::Transport {
            method: request.method,
            path: request.path.clone(),
            reason: format!("failed to read response body: {e}"),
        })?;

        debug!(
            method = %request.method,
            path = %request.path,
            status = status,
            body_length = body.len(),
            "request completed"
        );

        Ok(ApiResponse { status, body })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
