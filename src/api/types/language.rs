//! Language-data types for the calendar REST API.

use serde::{Deserialize, Serialize};

/// Per-language JSON document, stored and returned by the backend verbatim.
pub type LanguageData = serde_json::Value;

/// Response for POST /api/{language}/.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    /// "saved" on success
    pub status: String,
}

impl SaveResponse {
    pub fn is_saved(&self) -> bool {
        self.status == "saved"
    }
}
