//! Configuration resolution from environment variables.
//!
//! All configuration is read once, at process start, into an immutable
//! [`ClientConfig`]. Nothing else in the crate touches the environment, so
//! a missing variable fails the invocation before any network call.
//!
//! Recognized variables:
//!
//! | Variable           | Required | Meaning                                  |
//! |--------------------|----------|------------------------------------------|
//! | `POS_API_KEY`      | yes*     | API token, sent as `api_key` query param |
//! | `API_KEY`          | yes*     | Fallback name for the same token         |
//! | `SHOP_ID`          | yes      | Tenant id substituted into URL paths     |
//! | `POS_BASE_URL`     | no       | API root, default production endpoint    |
//! | `POS_TIMEOUT_SECS` | no       | Request timeout, default 30 seconds      |
//!
//! *one of the two names must be set; `POS_API_KEY` wins when both are.

use crate::error::{ClientError, Result};

/// Production Pancake POS API root.
pub const DEFAULT_BASE_URL: &str = "https://pos.pages.fm/api/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable per-invocation configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token, appended to every request as the `api_key` query parameter.
    pub api_key: String,

    /// Shop (tenant) identifier, substituted into `/shops/{SHOP_ID}/...`.
    pub shop_id: String,

    /// API root without a trailing slash.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an explicit lookup function.
    ///
    /// Empty values count as unset. The lookup indirection keeps resolution
    /// testable without mutating process-global environment state.
    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(&lookup, "POS_API_KEY")
            .or_else(|| non_empty(&lookup, "API_KEY"))
            .ok_or_else(|| ClientError::MissingEnv {
                name: "POS_API_KEY".into(),
            })?;

        let shop_id = non_empty(&lookup, "SHOP_ID").ok_or_else(|| ClientError::MissingEnv {
            name: "SHOP_ID".into(),
        })?;

        let base_url = match non_empty(&lookup, "POS_BASE_URL") {
            Some(raw) => {
                url::Url::parse(&raw).map_err(|e| ClientError::InvalidBaseUrl {
                    url: raw.clone(),
                    reason: e.to_string(),
                })?;
                raw.trim_end_matches('/').to_owned()
            }
            None => DEFAULT_BASE_URL.to_owned(),
        };

        let timeout_secs = match non_empty(&lookup, "POS_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ClientError::InvalidEnv {
                name: "POS_TIMEOUT_SECS".into(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            shop_id,
            base_url,
            timeout_secs,
        })
    }
}

/// Look up a variable, treating empty values as unset.
fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
