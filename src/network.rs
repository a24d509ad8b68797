//! Network constants for the Closed Group Calendar API.

/// Default REST API base URL. Relative request paths are appended to it.
pub const DEFAULT_API_URL: &str = "https://closed-group-calendar.onrender.com/api/";

/// Default `Content-Type` sent with every request.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Default request timeout in seconds (native targets only).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
