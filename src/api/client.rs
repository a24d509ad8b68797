//! Calendar REST API client implementation.
//!
//! [`CalendarApiClient`] owns one `reqwest::Client` plus an immutable
//! [`ClientConfig`]. Every request it sends is resolved against the configured
//! base URL and carries the configured default headers.
//!
//! # Example
//!
//! ```rust,ignore
//! use closed_group_calendar_sdk::api::CalendarApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CalendarApiClient::new()?;
//!
//!     // GET https://closed-group-calendar.onrender.com/api/events/
//!     let events: serde_json::Value = client.get("events/").await?;
//!     println!("{events}");
//!
//!     Ok(())
//! }
//! ```

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::config::ClientConfig;
use crate::api::error::{ApiError, ApiResult};
use crate::api::languages::Languages;

/// A single request against the calendar API, before it is resolved.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
    headers: HeaderMap,
}

impl ApiRequest {
    /// Create a request for `path`, relative to the client's base URL.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Create a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Create a PATCH request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Create a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Override a header for this request only. Replaces the client default
    /// of the same name, and any earlier override, instead of adding a second value.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path as given, before resolution against the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Shared, pre-configured client for the calendar API.
///
/// Read-only after construction and cheap to clone; share it by reference or
/// clone it into tasks.
#[derive(Debug, Clone)]
pub struct CalendarApiClient {
    http_client: Client,
    config: ClientConfig,
}

impl CalendarApiClient {
    /// Create a client with the stock configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        Self::from_config(ClientConfig::new()?)
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> ApiResult<Self> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(config.timeout())
                .pool_max_idle_per_host(10);
        }
        let http_client = builder.build()?;

        tracing::debug!(
            base_url = config.base_url(),
            default_headers = config.default_headers().len(),
            "Calendar API client initialized"
        );

        Ok(Self {
            http_client,
            config,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Resolve `path` against the base URL.
    ///
    /// Relative paths are appended with exactly one `/` at the join, absolute
    /// `http(s)://` URLs are returned unchanged.
    pub fn url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        format!("{}{}", self.config.base_url(), path.trim_start_matches('/'))
    }

    /// Sub-client for the per-language data endpoint.
    pub fn languages(&self) -> Languages<'_> {
        Languages { client: self }
    }

    // =========================================================================
    // Request building and dispatch
    // =========================================================================

    /// Build the outgoing request without sending it.
    pub fn prepare(&self, request: &ApiRequest) -> ApiResult<reqwest::Request> {
        let raw_url = self.url(&request.path);
        let url = Url::parse(&raw_url).map_err(|e| {
            ApiError::InvalidParameter(format!("Invalid request URL '{}': {}", raw_url, e))
        })?;

        let mut headers = self.config.default_headers().clone();
        for name in request.headers.keys() {
            headers.remove(name);
        }
        for (name, value) in &request.headers {
            headers.append(name.clone(), value.clone());
        }

        let mut builder = self
            .http_client
            .request(request.method.clone(), url)
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        Ok(builder.build()?)
    }

    /// Send a request and hand back the raw response, whatever its status.
    pub async fn execute(&self, request: &ApiRequest) -> ApiResult<Response> {
        let prepared = self.prepare(request)?;
        tracing::debug!(method = %prepared.method(), url = %prepared.url(), "Sending request");

        let response = self.http_client.execute(prepared).await?;
        tracing::trace!(status = %response.status(), url = %response.url(), "Received response");
        Ok(response)
    }

    /// Send a request, require a 2xx status and decode the JSON body.
    ///
    /// An empty success body decodes as JSON `null`.
    pub async fn send<T: DeserializeOwned>(&self, request: &ApiRequest) -> ApiResult<T> {
        let response = self.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ApiError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::from_slice(b"null")?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Convenience verbs
    // =========================================================================

    /// GET `path` and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(&ApiRequest::get(path)).await
    }

    /// POST a JSON body to `path` and decode the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(&ApiRequest::post(path).json(body)?).await
    }

    /// PUT a JSON body to `path` and decode the JSON response.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(&ApiRequest::put(path).json(body)?).await
    }

    /// PATCH a JSON body to `path` and decode the JSON response.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(&ApiRequest::patch(path).json(body)?).await
    }

    /// DELETE `path` and decode the JSON response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(&ApiRequest::delete(path)).await
    }
}

fn is_absolute_url(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
