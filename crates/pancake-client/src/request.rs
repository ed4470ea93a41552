//! Request descriptors and URL composition.
//!
//! An [`ApiRequest`] is the complete description of one outbound call:
//! method, path (with the shop id already substituted), an optional literal
//! query string supplied by the caller, and an optional opaque JSON body.
//! URL composition is deterministic: identical inputs always produce the
//! identical URL string.

use std::fmt;

use crate::config::ClientConfig;

/// HTTP methods the wrapper issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    /// Parse a method name, case-insensitively.
    /// Returns `None` for methods the wrapper does not issue.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            _ => None,
        }
    }

    /// Canonical uppercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }

    /// Whether a request with this method changes remote state and must
    /// therefore pass the write guard first.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound request, never persisted beyond the invocation.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,

    /// Resource path, e.g. `/shops/123/purchases`.
    pub path: String,

    /// Literal query string including its leading `?`, passed through
    /// verbatim from the caller. Not validated here.
    pub query: Option<String>,

    /// Raw JSON body, forwarded byte-for-byte. Opaque to the wrapper.
    pub body: Option<String>,
}

impl ApiRequest {
    /// A GET request for the given path.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// A PUT request carrying an opaque body.
    pub fn put(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            query: None,
            body: Some(body.into()),
        }
    }

    /// A POST request carrying an opaque body.
    pub fn post(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: None,
            body: Some(body.into()),
        }
    }

    /// Attach a literal query string (including its leading `?`).
    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query.filter(|q| !q.is_empty());
        self
    }

    /// Compose the full request URL.
    ///
    /// `base_url + path + (query ?? "") + api_key`, where the `api_key`
    /// parameter is joined with `?` or `&` depending on whether the caller
    /// already supplied a query string.
    pub fn url(&self, config: &ClientConfig) -> String {
        let query = self.query.as_deref().unwrap_or("");
        let sep = if query.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}{}api_key={}",
            config.base_url, self.path, query, sep, config.api_key
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig {
            api_key: "abc".into(),
            shop_id: "123".into(),
            base_url: "https://pos.pages.fm/api/v1".into(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn parse_supported_methods() {
        assert_eq!(Method::parse("GET"), Some(Method::Get));
        assert_eq!(Method::parse("post"), Some(Method::Post));
        assert_eq!(Method::parse("Put"), Some(Method::Put));
    }

    #[test]
    fn parse_unsupported_returns_none() {
        assert_eq!(Method::parse("DELETE"), None);
        assert_eq!(Method::parse("PATCH"), None);
        assert_eq!(Method::parse(""), None);
    }

    #[test]
    fn mutation_classification() {
        assert!(!Method::Get.is_mutating());
        assert!(Method::Post.is_mutating());
        assert!(Method::Put.is_mutating());
    }

    #[test]
    fn url_without_query_appends_api_key_with_question_mark() {
        let request = ApiRequest::get("/shops/123/purchases");
        assert_eq!(
            request.url(&config()),
            "https://pos.pages.fm/api/v1/shops/123/purchases?api_key=abc"
        );
    }

    #[test]
    fn url_with_query_appends_api_key_with_ampersand() {
        let request =
            ApiRequest::get("/shops/123/purchases").with_query(Some("?status=1".into()));
        assert_eq!(
            request.url(&config()),
            "https://pos.pages.fm/api/v1/shops/123/purchases?status=1&api_key=abc"
        );
    }

    #[test]
    fn url_composition_is_deterministic() {
        let request = ApiRequest::get("/shops/123/suppliers")
            .with_query(Some("?page=1&page_size=50".into()));
        assert_eq!(request.url(&config()), request.url(&config()));
    }

    #[test]
    fn empty_query_treated_as_absent() {
        let request = ApiRequest::get("/shops/123/suppliers").with_query(Some(String::new()));
        assert_eq!(
            request.url(&config()),
            "https://pos.pages.fm/api/v1/shops/123/suppliers?api_key=abc"
        );
    }

    #[test]
    fn put_carries_body_untouched() {
        let body = r#"{"purchase":{"status":1}}"#;
        let request = ApiRequest::put("/shops/123/purchases/fb056b32", body);
        assert_eq!(request.body.as_deref(), Some(body));
        assert_eq!(request.method, Method::Put);
    }
}
