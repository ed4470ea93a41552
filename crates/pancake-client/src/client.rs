//! The dispatcher: guard, compose, send, surface.
//!
//! [`PosClient`] ties the resolved configuration, the write guard, and a
//! [`Transport`] together. Each call to [`PosClient::send`] performs at most
//! one HTTP request; mutating requests are checked against the guard before
//! the transport is touched, so a refused write makes zero network calls.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::guard::WriteGuard;
use crate::request::ApiRequest;
use crate::transport::{ApiResponse, HttpTransport, Transport};

/// Guarded single-shot client for the Pancake POS API.
pub struct PosClient<T: Transport> {
    config: ClientConfig,
    guard: WriteGuard,
    transport: T,
}

impl PosClient<HttpTransport> {
    /// Build a client entirely from the process environment.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        let guard = WriteGuard::from_env();
        let transport = HttpTransport::new(config.timeout_secs)?;
        Ok(Self::new(config, guard, transport))
    }
}

impl<T: Transport> PosClient<T> {
    /// Assemble a client from explicit parts.
    pub fn new(config: ClientConfig, guard: WriteGuard, transport: T) -> Self {
        Self {
            config,
            guard,
            transport,
        }
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a shop-scoped path: `/shops/{SHOP_ID}` + `suffix`.
    pub fn shop_path(&self, suffix: &str) -> String {
        format!("/shops/{}{}", self.config.shop_id, suffix)
    }

    /// Dispatch one request and return the raw response.
    ///
    /// Mutating requests must pass the write guard first. A non-2xx status
    /// is surfaced as [`ClientError::RemoteApi`] with the response body
    /// attached, unmodified, so callers can still emit it.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        if request.method.is_mutating() {
            self.guard.ensure_confirmed()?;
        }

        let url = request.url(&self.config);
        debug!(method = %request.method, path = %request.path, "dispatching");

        let response = self.transport.execute(&request, &url).await?;

        if !response.is_success() {
            return Err(ClientError::RemoteApi {
                method: request.method,
                path: request.path,
                status: response.status,
                body: response.body,
            });
        }

        Ok(response)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
