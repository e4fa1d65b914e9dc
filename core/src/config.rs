//! Connection settings shared by every request a client issues.

/// Upstream service the client talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "POSTS_API_BASE_URL";

/// Content type sent on every request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Base URL plus the default headers attached to each request.
///
/// The base URL is stored without a trailing slash so resource paths
/// (which start with `/`) can be appended directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize(base_url),
            headers: vec![("content-type".to_string(), JSON_CONTENT_TYPE.to_string())],
        }
    }

    /// Reads the base URL from `POSTS_API_BASE_URL`, falling back to the
    /// upstream service. Empty values are ignored.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize(base_url);
        self
    }

    /// Adds a default header, replacing any existing header with the same
    /// (case-insensitive) name.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
