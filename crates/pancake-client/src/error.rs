//! Error types for the Pancake POS client.
//!
//! Every failure mode of a single invocation surfaces through
//! [`ClientError`]. Configuration and guard errors are raised before any
//! network I/O; transport and remote errors carry the method and path of
//! the one request that failed.

use crate::request::Method;

/// Unified error type for the Pancake POS client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable `{name}`")]
    MissingEnv { name: String },

    /// An environment variable is set but its value cannot be used.
    #[error("invalid value for environment variable `{name}`: {reason}")]
    InvalidEnv { name: String, reason: String },

    /// `POS_BASE_URL` does not parse as a URL.
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A mutating call was attempted without `CONFIRM_WRITE=YES`.
    #[error("write not confirmed: set CONFIRM_WRITE=YES to allow mutating calls")]
    WriteNotConfirmed,

    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("transport failure for {method} {path}: {reason}")]
    Transport {
        method: Method,
        path: String,
        reason: String,
    },

    /// The remote API answered with a non-2xx status. The raw response body
    /// is carried along so callers can still emit it for inspection.
    #[error("remote API returned {status} for {method} {path}")]
    RemoteApi {
        method: Method,
        path: String,
        status: u16,
        body: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience alias used throughout the client crate.
pub type Result<T> = std::result::Result<T, ClientError>;
