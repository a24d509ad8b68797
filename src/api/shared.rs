//! Process-wide shared client.
//!
//! Prefer constructing a [`CalendarApiClient`] once and passing it by
//! reference; [`shared`] exists for call sites that cannot be threaded one.

use lazy_static::lazy_static;

use crate::api::client::CalendarApiClient;
use crate::api::error::{ApiError, ApiResult};

lazy_static! {
    static ref SHARED_CLIENT: Result<CalendarApiClient, String> =
        CalendarApiClient::new().map_err(|e| e.to_string());
}

/// The shared client, built from the stock configuration on first access.
///
/// Every call returns the same instance. If the one-time construction failed,
/// every call reports that failure.
pub fn shared() -> ApiResult<&'static CalendarApiClient> {
    SHARED_CLIENT
        .as_ref()
        .map_err(|e| ApiError::InvalidConfig(e.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;

    #[test]
    fn test_shared_is_singleton() {
        let a = shared().unwrap();
        let b = shared().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_shared_uses_stock_config() {
        let client = shared().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
        assert_eq!(
            client.config().default_headers().get(CONTENT_TYPE).unwrap(),
            crate::network::DEFAULT_CONTENT_TYPE
        );
    }
}
