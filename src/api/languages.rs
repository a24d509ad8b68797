//! Languages sub-client: read and replace per-language JSON documents.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::client::{ApiRequest, CalendarApiClient};
use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{LanguageData, SaveResponse};

/// Sub-client for `/{language}/`.
pub struct Languages<'a> {
    pub(crate) client: &'a CalendarApiClient,
}

impl<'a> Languages<'a> {
    /// Fetch the document for `language` (e.g. `"en"`).
    pub async fn get(&self, language: &str) -> ApiResult<LanguageData> {
        self.get_as(language).await
    }

    /// Fetch the document for `language` into a caller-chosen type.
    pub async fn get_as<T: DeserializeOwned>(&self, language: &str) -> ApiResult<T> {
        let path = Self::path(language)?;
        self.client.send(&ApiRequest::get(path)).await
    }

    /// Replace the document for `language` with `data`.
    ///
    /// The backend only accepts languages it already knows; unknown ones come
    /// back as a 404 [`ApiError::Status`].
    pub async fn save<B: Serialize + ?Sized>(
        &self,
        language: &str,
        data: &B,
    ) -> ApiResult<SaveResponse> {
        let path = Self::path(language)?;
        self.client.send(&ApiRequest::post(path).json(data)?).await
    }

    fn path(language: &str) -> ApiResult<String> {
        if language.is_empty() {
            return Err(ApiError::InvalidParameter(
                "language cannot be empty".to_string(),
            ));
        }
        if language.contains('/') || language == "." || language == ".." {
            return Err(ApiError::InvalidParameter(format!(
                "language must be a single path segment, got '{}'",
                language
            )));
        }
        Ok(format!("{}/", urlencoding::encode(language)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_language() {
        assert_eq!(Languages::path("en").unwrap(), "en/");
        assert_eq!(Languages::path("pt BR").unwrap(), "pt%20BR/");
    }

    #[test]
    fn test_path_rejects_bad_language() {
        assert!(matches!(
            Languages::path(""),
            Err(ApiError::InvalidParameter(_))
        ));
        assert!(matches!(
            Languages::path("../secrets"),
            Err(ApiError::InvalidParameter(_))
        ));
        for dots in ["..", "."] {
            assert!(matches!(
                Languages::path(dots),
                Err(ApiError::InvalidParameter(_))
            ));
        }
        assert_eq!(Languages::path("...").unwrap(), ".../");
    }

    #[test]
    fn test_language_request_url() {
        let client = CalendarApiClient::new().unwrap();
        let path = Languages::path("en").unwrap();
        let request = client.prepare(&ApiRequest::get(path)).unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://closed-group-calendar.onrender.com/api/en/"
        );
    }
}
