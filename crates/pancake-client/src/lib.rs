//! Guarded HTTP client for the Pancake POS REST API.
//!
//! This crate provides the three small pieces every `pancake` invocation is
//! built from:
//!
//! - **Config resolver** — reads `POS_API_KEY` (or `API_KEY`), `SHOP_ID`,
//!   and the optional `POS_BASE_URL` / `POS_TIMEOUT_SECS` into an immutable
//!   [`ClientConfig`], failing fast when a required variable is missing.
//!
//! - **Write guard** — refuses any mutating (POST/PUT) call unless
//!   `CONFIRM_WRITE=YES` is set, before any network I/O happens.
//!
//! - **Request dispatcher** — composes the full URL (base + path + caller
//!   query + `api_key` parameter), issues exactly one HTTP request, and
//!   returns the raw response body untouched.
//!
//! Payloads are opaque: the client never parses, validates, or reshapes the
//! JSON it forwards. The remote schema belongs to Pancake POS, not to this
//! wrapper.
//!
//! # Example
//!
//! ```rust,no_run
//! use pancake_client::{ApiRequest, PosClient};
//!
//! # async fn run() -> pancake_client::Result<()> {
//! let client = PosClient::from_env()?;
//! let path = client.shop_path("/purchases");
//! let response = client
//!     .send(ApiRequest::get(path).with_query(Some("?status=1".into())))
//!     .await?;
//! println!("{}", response.body);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod request;
pub mod transport;

pub use client::PosClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, Result};
pub use guard::{CONFIRM_WRITE_VAR, WriteGuard};
pub use request::{ApiRequest, Method};
pub use transport::{ApiResponse, HttpTransport, Transport};
