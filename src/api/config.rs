//! Client configuration: base URL and default headers.
//!
//! A [`ClientConfig`] is validated once by [`ClientConfigBuilder::build`] and
//! is read-only afterwards.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Url;

use crate::api::error::{ApiError, ApiResult};
use crate::network::{DEFAULT_API_URL, DEFAULT_CONTENT_TYPE, DEFAULT_TIMEOUT_SECS};

/// Immutable configuration for [`CalendarApiClient`](crate::api::CalendarApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    default_headers: HeaderMap,
    timeout: Duration,
}

impl ClientConfig {
    /// The stock configuration: [`DEFAULT_API_URL`] plus `Content-Type: application/json`.
    pub fn new() -> ApiResult<Self> {
        ClientConfigBuilder::default().build()
    }

    /// Create a builder seeded with the stock configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Base URL, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers applied to every request unless overridden per request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Request timeout (ignored on wasm32, where the browser owns timeouts).
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: String,
    headers: Vec<(String, String)>,
    timeout: Duration,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            headers: vec![(CONTENT_TYPE.as_str().to_string(), DEFAULT_CONTENT_TYPE.to_string())],
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfigBuilder {
    /// Set the base URL. A missing trailing slash is added on build.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Add a default header, replacing any earlier value for the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Drop every default header, including the JSON content type.
    pub fn clear_headers(mut self) -> Self {
        self.headers.clear();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> ApiResult<ClientConfig> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in self.headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidConfig(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                ApiError::InvalidConfig(format!("Invalid header value for '{}': {}", name, e))
            })?;
            default_headers.insert(header_name, header_value);
        }

        Ok(ClientConfig {
            base_url,
            default_headers,
            timeout: self.timeout,
        })
    }
}

fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|e| ApiError::InvalidConfig(format!("Invalid base URL '{}': {}", trimmed, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ApiError::InvalidConfig(format!(
                "Base URL must use http or https, got '{}'",
                other
            )))
        }
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ApiError::InvalidConfig(format!(
            "Base URL must not carry a query or fragment: '{}'",
            trimmed
        )));
    }

    let mut base = trimmed.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new().unwrap();
        assert_eq!(config.base_url(), "https://closed-group-calendar.onrender.com/api/");
        assert_eq!(config.default_headers().len(), 1);
        assert_eq!(
            config.default_headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slash_added() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8000/api")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_header_replaces_default() {
        let config = ClientConfig::builder()
            .header("content-type", "text/plain")
            .header("X-Client", "calendar")
            .timeout_secs(5)
            .build()
            .unwrap();
        assert_eq!(config.default_headers().get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(config.default_headers().get("x-client").unwrap(), "calendar");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_clear_headers() {
        let config = ClientConfig::builder().clear_headers().build().unwrap();
        assert!(config.default_headers().is_empty());
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = ClientConfig::builder().base_url("api/").build().unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ClientConfig::builder()
            .base_url("ftp://closed-group-calendar.onrender.com/api/")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(msg) if msg.contains("ftp")));
    }

    #[test]
    fn test_rejects_query_in_base_url() {
        let err = ClientConfig::builder()
            .base_url("https://example.com/api/?v=1")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_invalid_header() {
        let err = ClientConfig::builder()
            .header("bad header", "x")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(msg) if msg.contains("bad header")));

        let err = ClientConfig::builder()
            .header("X-Ok", "line\nbreak")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(_)));
    }
}
